//! # Response Envelopes
//!
//! Every success response carries `success: true`; the presentation layer
//! keys off that flag.

use serde::Serialize;

use crate::store::Record;

/// `/read` response: one page plus the pre-pagination match count
#[derive(Debug, Clone, Serialize)]
pub struct ReadEnvelope {
    pub success: bool,
    pub total: usize,
    pub data: Vec<Record>,
}

impl ReadEnvelope {
    pub fn new(total: usize, data: Vec<Record>) -> Self {
        Self {
            success: true,
            total,
            data,
        }
    }
}

/// `/create` and `/update` response: the affected records
#[derive(Debug, Clone, Serialize)]
pub struct RecordsEnvelope {
    pub success: bool,
    pub data: Vec<Record>,
}

impl RecordsEnvelope {
    pub fn new(data: Vec<Record>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `/delete` response: acknowledgment only
#[derive(Debug, Clone, Serialize)]
pub struct AckEnvelope {
    pub success: bool,
}

impl AckEnvelope {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthEnvelope {
    pub status: String,
    pub version: String,
}

impl HealthEnvelope {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
