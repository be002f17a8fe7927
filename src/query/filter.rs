//! # Filter Descriptors
//!
//! Represents query-time filters: `{field, operator, value, caseSensitive}`.
//! The operator set is a closed enum dispatched through a pure predicate, so
//! the match is checked exhaustively at compile time; unknown symbols are
//! rejected at parse time with [`QueryError::UnsupportedOperator`].
//!
//! ## Semantics
//! - `=` is an exact type + value match. Numbers compare numerically across
//!   integer/float representations; there is no string/number coercion.
//! - `<` / `>` compare numbers numerically and strings lexicographically;
//!   cross-type or missing values never match.
//! - `*` matches everything `=` matches, plus records whose stringified
//!   field value contains the stringified filter value as a substring.
//! - `caseSensitive: false` folds both sides to lowercase when textual.

use std::cmp::Ordering;

use serde::Deserialize;
use serde_json::Value;

use crate::store::record::Record;

use super::errors::{QueryError, QueryResult};

/// Supported filter operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// `*`: equality or stringified substring containment
    Contains,
    /// `=`: exact match
    Eq,
    /// `<`: ordered comparison
    Lt,
    /// `>`: ordered comparison
    Gt,
}

impl FilterOp {
    /// Parse the wire symbol for an operator
    pub fn parse(symbol: &str) -> QueryResult<Self> {
        match symbol {
            "*" => Ok(FilterOp::Contains),
            "=" => Ok(FilterOp::Eq),
            "<" => Ok(FilterOp::Lt),
            ">" => Ok(FilterOp::Gt),
            other => Err(QueryError::UnsupportedOperator(other.to_string())),
        }
    }

    /// The operator's wire symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Contains => "*",
            FilterOp::Eq => "=",
            FilterOp::Lt => "<",
            FilterOp::Gt => ">",
        }
    }
}

/// Wire form of a filter descriptor; the operator arrives as a raw symbol
#[derive(Debug, Clone, Deserialize)]
struct RawFilter {
    field: String,
    operator: String,
    value: Value,
    #[serde(default, rename = "caseSensitive")]
    case_sensitive: bool,
}

/// A parsed filter descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
    pub case_sensitive: bool,
}

impl FilterSpec {
    pub fn new(
        field: impl Into<String>,
        op: FilterOp,
        value: Value,
        case_sensitive: bool,
    ) -> Self {
        Self {
            field: field.into(),
            op,
            value,
            case_sensitive,
        }
    }

    /// Evaluate this descriptor against one record
    pub fn matches(&self, record: &Record) -> bool {
        let field = record.get(&self.field);
        match self.op {
            FilterOp::Eq => eq_matches(field, &self.value, self.case_sensitive),
            FilterOp::Contains => {
                eq_matches(field, &self.value, self.case_sensitive)
                    || contains_matches(field, &self.value, self.case_sensitive)
            }
            FilterOp::Lt => {
                ordered(field, &self.value, self.case_sensitive) == Some(Ordering::Less)
            }
            FilterOp::Gt => {
                ordered(field, &self.value, self.case_sensitive) == Some(Ordering::Greater)
            }
        }
    }
}

/// Parse the wire form: a JSON array of descriptor objects
pub fn parse_filters(raw: &str) -> QueryResult<Vec<FilterSpec>> {
    let raws: Vec<RawFilter> =
        serde_json::from_str(raw).map_err(|e| QueryError::MalformedFilter(e.to_string()))?;

    raws.into_iter()
        .map(|r| {
            Ok(FilterSpec {
                op: FilterOp::parse(&r.operator)?,
                field: r.field,
                value: r.value,
                case_sensitive: r.case_sensitive,
            })
        })
        .collect()
}

fn fold(s: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        s.to_string()
    } else {
        s.to_lowercase()
    }
}

fn eq_matches(field: Option<&Value>, filter: &Value, case_sensitive: bool) -> bool {
    match (field, filter) {
        (Some(Value::Number(x)), Value::Number(y)) => {
            // serde_json splits integer/float representations that clients
            // treat as one number type.
            x.as_f64() == y.as_f64()
        }
        (Some(Value::String(x)), Value::String(y)) => {
            fold(x, case_sensitive) == fold(y, case_sensitive)
        }
        (Some(x), y) => x == y,
        (None, _) => false,
    }
}

fn ordered(field: Option<&Value>, filter: &Value, case_sensitive: bool) -> Option<Ordering> {
    match (field?, filter) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => {
            Some(fold(x, case_sensitive).cmp(&fold(y, case_sensitive)))
        }
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn contains_matches(field: Option<&Value>, filter: &Value, case_sensitive: bool) -> bool {
    let (Some(field), Some(filter)) = (field.and_then(stringify), stringify(filter)) else {
        return false;
    };
    fold(&field, case_sensitive).contains(&fold(&filter, case_sensitive))
}
