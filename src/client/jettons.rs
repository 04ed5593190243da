//! Jetton methods for [`TonApiClient`].

use super::{Query, TonApiClient};
use crate::error::Result;
use crate::models::{JettonHolders, JettonInfo, Jettons};

impl TonApiClient {
    /// Get jetton master metadata by its address.
    pub async fn get_jetton_info(&self, account_id: &str) -> Result<JettonInfo> {
        let path = format!("v2/jettons/{account_id}");
        self.get_json(&path, &Query::new()).await
    }

    /// Get a page of all jetton masters known to the indexer.
    pub async fn get_all_jettons(&self, limit: u32, offset: u32) -> Result<Jettons> {
        let query = Query::new().pair("limit", limit).pair("offset", offset);
        self.get_json("v2/jettons", &query).await
    }

    /// Get a page of holders of a jetton.
    pub async fn get_jetton_holders(
        &self,
        account_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<JettonHolders> {
        let path = format!("v2/jettons/{account_id}/holders");
        let query = Query::new().pair("limit", limit).pair("offset", offset);
        self.get_json(&path, &query).await
    }
}
