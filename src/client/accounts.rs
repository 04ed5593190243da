//! Account methods for [`TonApiClient`].

use serde_json::json;

use super::{Query, TonApiClient};
use crate::error::Result;
use crate::models::{
    Account, AccountEvent, AccountEvents, Accounts, AddressForm, BalanceChange, DnsExpiring,
    DomainNames, FoundAccounts, JettonBalance, JettonsBalances, NftItems, PublicKey, Subscriptions,
    TraceIds,
};

impl TonApiClient {
    /// Parse an address and display it in all formats.
    pub async fn parse_address(&self, account_id: &str) -> Result<AddressForm> {
        let path = format!("v2/address/{account_id}/parse");
        self.get_json(&path, &Query::new()).await
    }

    /// Get human-friendly information about an account without low-level
    /// details.
    pub async fn get_account_info(&self, account_id: &str) -> Result<Account> {
        let path = format!("v2/accounts/{account_id}");
        self.get_json(&path, &Query::new()).await
    }

    /// Get human-friendly information about multiple accounts at once.
    pub async fn get_bulk_account_info<S: AsRef<str>>(&self, account_ids: &[S]) -> Result<Accounts> {
        let ids: Vec<&str> = account_ids.iter().map(AsRef::as_ref).collect();
        let body = json!({ "account_ids": ids });
        self.post_json("v2/accounts/_bulk", Some(&body)).await
    }

    /// Get all jetton balances owned by an account.
    pub async fn get_account_jettons_balances(&self, account_id: &str) -> Result<JettonsBalances> {
        let path = format!("v2/accounts/{account_id}/jettons");
        self.get_json(&path, &Query::new()).await
    }

    /// Get one jetton balance by owner and jetton master address.
    pub async fn get_account_jetton_balance(
        &self,
        account_id: &str,
        jetton_id: &str,
    ) -> Result<JettonBalance> {
        let path = format!("v2/accounts/{account_id}/jettons/{jetton_id}");
        self.get_json(&path, &Query::new()).await
    }

    /// Get events for an account, newest first.
    ///
    /// Pass `before_lt` to page backwards from a previous response's
    /// `next_from`.
    pub async fn get_account_events(
        &self,
        account_id: &str,
        limit: u32,
        before_lt: Option<u64>,
        accept_language: &str,
        subject_only: bool,
    ) -> Result<AccountEvents> {
        let path = format!("v2/accounts/{account_id}/events");
        let mut query = Query::new().pair("limit", limit).opt("before_lt", before_lt);
        if subject_only {
            query = query.flag("subject_only", true);
        }
        self.get_json_localized(&path, &query, accept_language).await
    }

    /// Get one event on an account by event id.
    pub async fn get_account_event(
        &self,
        account_id: &str,
        event_id: &str,
        accept_language: &str,
    ) -> Result<AccountEvent> {
        let path = format!("v2/accounts/{account_id}/events/{event_id}");
        self.get_json_localized(&path, &Query::new(), accept_language)
            .await
    }

    /// Get trace ids for an account.
    pub async fn get_account_traces(&self, account_id: &str, limit: u32) -> Result<TraceIds> {
        let path = format!("v2/accounts/{account_id}/traces");
        let query = Query::new().pair("limit", limit);
        self.get_json(&path, &query).await
    }

    /// Get NFT items owned by an account.
    ///
    /// `indirect_ownership` includes items parked on sale contracts.
    pub async fn get_account_nfts(
        &self,
        account_id: &str,
        limit: u32,
        offset: u32,
        collection: Option<&str>,
        indirect_ownership: bool,
    ) -> Result<NftItems> {
        let path = format!("v2/accounts/{account_id}/nfts");
        let query = Query::new()
            .pair("limit", limit)
            .pair("offset", offset)
            .flag("indirect_ownership", indirect_ownership)
            .opt("collection", collection);
        self.get_json(&path, &query).await
    }

    /// Search accounts by domain name.
    pub async fn search_accounts_by_domain(&self, name: &str) -> Result<FoundAccounts> {
        let query = Query::new().pair("name", name);
        self.get_json("v2/accounts/search", &query).await
    }

    /// Get all on-chain subscriptions of a wallet.
    pub async fn get_account_subscriptions(&self, account_id: &str) -> Result<Subscriptions> {
        let path = format!("v2/accounts/{account_id}/subscriptions");
        self.get_json(&path, &Query::new()).await
    }

    /// Get `.ton` domains of an account that expire within `period` days.
    pub async fn get_account_expiring_dns(
        &self,
        account_id: &str,
        period: Option<u32>,
    ) -> Result<DnsExpiring> {
        let path = format!("v2/accounts/{account_id}/dns/expiring");
        let query = Query::new().opt("period", period);
        self.get_json(&path, &query).await
    }

    /// Get domain names that resolve back to an account.
    pub async fn get_account_domains(&self, account_id: &str) -> Result<DomainNames> {
        let path = format!("v2/accounts/{account_id}/dns/backresolve");
        self.get_json(&path, &Query::new()).await
    }

    /// Get the public key of an account.
    pub async fn get_account_public_key(&self, account_id: &str) -> Result<PublicKey> {
        let path = format!("v2/accounts/{account_id}/publickey");
        self.get_json(&path, &Query::new()).await
    }

    /// Get an account's net balance change between two unix timestamps.
    pub async fn get_account_balance_change(
        &self,
        account_id: &str,
        start_date: i64,
        end_date: i64,
    ) -> Result<BalanceChange> {
        let path = format!("v2/accounts/{account_id}/diff");
        let query = Query::new()
            .pair("start_date", start_date)
            .pair("end_date", end_date);
        self.get_json(&path, &query).await
    }

    /// Ask the indexer to refresh its cache for an account.
    pub async fn reindex_account(&self, account_id: &str) -> Result<()> {
        let path = format!("v2/accounts/{account_id}/reindex");
        let _: serde_json::Value = self.post_json(&path, None).await?;
        Ok(())
    }
}
