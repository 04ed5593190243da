//! Trace response models.

use serde::{Deserialize, Serialize};

use super::Transaction;

/// A trace: one transaction and the cascade it caused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub transaction: Transaction,
    #[serde(default)]
    pub interfaces: Vec<String>,
    pub children: Option<Vec<Trace>>,
    pub emulated: Option<bool>,
}

/// Identifier of a stored trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceId {
    pub id: String,
    pub utime: i64,
}

/// Page of trace identifiers for an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceIds {
    pub traces: Vec<TraceId>,
}
