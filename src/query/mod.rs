//! Query-time sorting, filtering, and pagination
//!
//! Declarative descriptors arrive as JSON on the wire, parse into typed
//! specs, and evaluate through pure comparators and predicates.

pub mod engine;
pub mod errors;
pub mod filter;
pub mod sort;

pub use engine::QueryOutput;
pub use errors::{QueryError, QueryResult};
pub use filter::{parse_filters, FilterOp, FilterSpec};
pub use sort::{parse_sorts, SortSpec};
