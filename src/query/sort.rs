//! # Sort Descriptors
//!
//! A sort is an ordered list of `{field, ascending}` descriptors applied as
//! a stable multi-key comparison: earlier descriptors take priority, ties
//! fall through to later ones, and records equal on every key keep their
//! relative order (`Vec::sort_by` is stable).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::record::{Record, SORT_INDEX_FIELD};

use super::errors::{QueryError, QueryResult};

/// One sort key: field name plus direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, ascending: bool) -> Self {
        Self {
            field: field.into(),
            ascending,
        }
    }

    /// The default ordering key: `sortIndex` ascending
    pub fn default_order() -> Self {
        Self::new(SORT_INDEX_FIELD, true)
    }
}

/// Parse the wire form: a JSON array of `{field, ascending}` objects
pub fn parse_sorts(raw: &str) -> QueryResult<Vec<SortSpec>> {
    serde_json::from_str(raw).map_err(|e| QueryError::MalformedSort(e.to_string()))
}

/// Compare two records under a multi-key descriptor list
pub fn compare(specs: &[SortSpec], a: &Record, b: &Record) -> Ordering {
    for spec in specs {
        let ord = compare_values(a.get(&spec.field), b.get(&spec.field));
        let ord = if spec.ascending { ord } else { ord.reverse() };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Rank used to order values of different kinds deterministically.
/// Missing fields sort before any present value.
fn kind_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(_) => 4,
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}
