//! # Per-Session Record Store
//!
//! The ordered working collection owned by exactly one session. Supports
//! insert, idempotent delete, merge-update, and whole-collection re-sort.
//!
//! ## Invariants
//! - STORE-1: ids are unique and stable for the dataset's lifetime;
//!   new ids are `max(existing) + 1`, computed fresh at insert time.
//! - STORE-2: an explicit sort sets the `ever_sorted` flag; the flag is
//!   never cleared.

use serde_json::{Map, Value};

use crate::query::sort::{self, SortSpec};

use super::errors::{StoreError, StoreResult};
use super::record::Record;

/// One session's record collection
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    ever_sorted: bool,
}

impl RecordStore {
    /// Create a store over an initial dataset (natural order preserved)
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            ever_sorted: false,
        }
    }

    /// Borrow the collection in its current order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records in the collection
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether an explicit sort has ever been applied to this session
    pub fn ever_sorted(&self) -> bool {
        self.ever_sorted
    }

    fn next_id(&self) -> i64 {
        self.records
            .iter()
            .filter_map(Record::id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Insert a partial record at `position` (or append), assigning a fresh
    /// unique id. Returns the created record.
    pub fn insert(&mut self, position: Option<usize>, partial: Map<String, Value>) -> Record {
        let mut record = Record::from_fields(partial);
        record.set_id(self.next_id());

        let at = position.unwrap_or(self.records.len()).min(self.records.len());
        self.records.insert(at, record.clone());
        record
    }

    /// Delete all records whose id is in `ids`. Unknown ids are ignored.
    pub fn remove(&mut self, ids: &[i64]) {
        self.records
            .retain(|r| r.id().map(|id| !ids.contains(&id)).unwrap_or(true));
    }

    /// Merge partial fields onto the record with `id`.
    ///
    /// Fails with [`StoreError::NotFound`] for unknown ids; callers must
    /// propagate this, never swallow it.
    pub fn update(&mut self, id: i64, partial: &Map<String, Value>) -> StoreResult<Record> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == Some(id))
            .ok_or(StoreError::NotFound(id))?;
        record.merge(partial);
        Ok(record.clone())
    }

    /// Whether a record with `id` exists
    pub fn contains(&self, id: i64) -> bool {
        self.records.iter().any(|r| r.id() == Some(id))
    }

    /// Re-sort the whole collection with a stable multi-key comparator and
    /// record that an explicit sort has occurred (sticky, never cleared).
    pub fn sort_by(&mut self, specs: &[SortSpec]) {
        self.records.sort_by(|a, b| sort::compare(specs, a, b));
        self.ever_sorted = true;
    }

    /// Re-apply the default ordering (`sortIndex` ascending).
    ///
    /// Does not touch the `ever_sorted` flag: only an explicit sort marks
    /// the session as sorted.
    pub fn sort_default(&mut self) {
        let specs = [SortSpec::default_order()];
        self.records.sort_by(|a, b| sort::compare(&specs, a, b));
    }
}
