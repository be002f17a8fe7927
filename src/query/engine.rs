//! # Query Engine
//!
//! Translates descriptor lists into one ordered, filtered, paginated view
//! of a session's collection.
//!
//! Steps, in order:
//! 1. Explicit sorts re-order the whole store (stable, multi-key). With no
//!    explicit sort, a session that was *ever* explicitly sorted falls back
//!    to the default `sortIndex` ascending order; otherwise insertion order
//!    is left untouched.
//! 2. Filters narrow the surviving set sequentially (logical AND).
//! 3. `total` is the filtered size, computed before pagination.
//! 4. The page is a clamped slice; an out-of-range start yields an empty
//!    page, not an error.

use crate::store::{Record, RecordStore};

use super::filter::FilterSpec;
use super::sort::SortSpec;

/// A page of records plus the pre-pagination match count
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutput {
    pub page: Vec<Record>,
    pub total: usize,
}

/// Run a query against one session's store.
///
/// Sorting mutates the store's order (the collection keeps the applied
/// order between requests); filtering and pagination do not.
pub fn run(
    store: &mut RecordStore,
    sorts: &[SortSpec],
    filters: &[FilterSpec],
    start: usize,
    count: Option<usize>,
) -> QueryOutput {
    if !sorts.is_empty() {
        store.sort_by(sorts);
    } else if store.ever_sorted() {
        store.sort_default();
    }

    let mut surviving: Vec<&Record> = store.records().iter().collect();
    for filter in filters {
        surviving.retain(|r| filter.matches(r));
    }

    let total = surviving.len();
    let start = start.min(total);
    let end = match count {
        Some(count) => start.saturating_add(count).min(total),
        None => total,
    };
    let page = surviving[start..end].iter().map(|r| (*r).clone()).collect();

    QueryOutput { page, total }
}
