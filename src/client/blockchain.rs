//! Blockchain methods for [`TonApiClient`].

use super::{Query, TonApiClient};
use crate::error::Result;
use crate::models::{BlockchainBlock, Transaction, Transactions};

impl TonApiClient {
    /// Get a block header by block id, e.g. `(-1,8000000000000000,4234234)`.
    pub async fn get_block_data(&self, block_id: &str) -> Result<BlockchainBlock> {
        let path = format!("v2/blockchain/blocks/{block_id}");
        self.get_json(&path, &Query::new()).await
    }

    /// Get a raw transaction by its hash.
    pub async fn get_transaction_data(&self, transaction_id: &str) -> Result<Transaction> {
        let path = format!("v2/blockchain/transactions/{transaction_id}");
        self.get_json(&path, &Query::new()).await
    }

    /// Get raw transactions of an account, newest first.
    pub async fn get_account_transactions(
        &self,
        account_id: &str,
        after_lt: Option<u64>,
        before_lt: Option<u64>,
        limit: u32,
    ) -> Result<Transactions> {
        let path = format!("v2/blockchain/accounts/{account_id}/transactions");
        let query = Query::new()
            .opt("after_lt", after_lt)
            .opt("before_lt", before_lt)
            .pair("limit", limit);
        self.get_json(&path, &query).await
    }

    /// Get the last known masterchain block header.
    pub async fn get_masterchain_head(&self) -> Result<BlockchainBlock> {
        self.get_json("v2/blockchain/masterchain-head", &Query::new())
            .await
    }
}
