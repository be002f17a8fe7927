//! Per-session record storage
//!
//! A session owns exactly one [`RecordStore`], lazily seeded from the
//! template dataset on first access. No sharing across sessions.

pub mod errors;
pub mod record;
pub mod store;

pub use errors::{StoreError, StoreResult};
pub use record::{Record, ID_FIELD, SORT_INDEX_FIELD};
pub use store::RecordStore;
