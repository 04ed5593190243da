//! Staking methods for [`TonApiClient`].

use super::{Query, TonApiClient};
use crate::error::Result;
use crate::models::{AccountStaking, StakingPoolHistory, StakingPoolInfo, StakingPools};

impl TonApiClient {
    /// Get all pools an account participates in.
    pub async fn get_participating_pools(&self, account_id: &str) -> Result<AccountStaking> {
        let path = format!("v2/staking/nominator/{account_id}/pools");
        self.get_json(&path, &Query::new()).await
    }

    /// Get information about one staking pool.
    pub async fn get_staking_pool_info(
        &self,
        account_id: &str,
        accept_language: &str,
    ) -> Result<StakingPoolInfo> {
        let path = format!("v2/staking/pool/{account_id}");
        self.get_json_localized(&path, &Query::new(), accept_language)
            .await
    }

    /// Get the APY history of a staking pool.
    pub async fn get_staking_pool_history(&self, account_id: &str) -> Result<StakingPoolHistory> {
        let path = format!("v2/staking/pool/{account_id}/history");
        self.get_json(&path, &Query::new()).await
    }

    /// Get all staking pools on the network.
    ///
    /// When `available_for` is set, pools the account cannot join are
    /// filtered out.
    pub async fn get_all_staking_pools(
        &self,
        available_for: Option<&str>,
        include_unverified: bool,
        accept_language: &str,
    ) -> Result<StakingPools> {
        let query = Query::new()
            .opt("available_for", available_for)
            .flag("include_unverified", include_unverified);
        self.get_json_localized("v2/staking/pools", &query, accept_language)
            .await
    }
}
