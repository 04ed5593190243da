//! Trace methods for [`TonApiClient`].

use super::{Query, TonApiClient};
use crate::error::Result;
use crate::models::Trace;

impl TonApiClient {
    /// Get a trace by trace id or by the hash of any transaction in it.
    pub async fn get_trace(&self, trace_id: &str) -> Result<Trace> {
        let path = format!("v2/traces/{trace_id}");
        self.get_json(&path, &Query::new()).await
    }
}
