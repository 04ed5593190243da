//! DNS methods for [`TonApiClient`].

use super::{Query, TonApiClient};
use crate::error::Result;
use crate::models::{Auctions, DnsRecord, DomainBids, NftItem};

impl TonApiClient {
    /// Get full information about a domain name.
    pub async fn get_dns_info(&self, domain_name: &str) -> Result<NftItem> {
        let path = format!("v2/dns/{domain_name}");
        self.get_json(&path, &Query::new()).await
    }

    /// Resolve a domain name into its DNS record.
    pub async fn resolve_dns(&self, domain_name: &str) -> Result<DnsRecord> {
        let path = format!("v2/dns/{domain_name}/resolve");
        self.get_json(&path, &Query::new()).await
    }

    /// Get the bid history of a domain.
    pub async fn get_domain_bids(&self, domain_name: &str) -> Result<DomainBids> {
        let path = format!("v2/dns/{domain_name}/bids");
        self.get_json(&path, &Query::new()).await
    }

    /// Get all ongoing auctions for a top-level domain (e.g. `ton`).
    pub async fn get_auctions(&self, tld: &str) -> Result<Auctions> {
        let query = Query::new().pair("tld", tld);
        self.get_json("v2/dns/auctions", &query).await
    }
}
