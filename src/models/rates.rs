//! Token rate response models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token prices keyed by token, each an open map of currency to quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    pub rates: HashMap<String, Value>,
}

/// Historical rate chart points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRates {
    pub points: Value,
}
