//! DNS and domain response models.

use serde::{Deserialize, Serialize};

use super::AccountAddress;

/// Wallet resolved from a DNS record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletDns {
    pub address: String,
    pub is_wallet: bool,
    pub has_method_pubkey: bool,
    pub has_method_seqno: bool,
    #[serde(default)]
    pub names: Vec<String>,
}

/// A resolved DNS record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub wallet: Option<WalletDns>,
    pub next_resolver: Option<String>,
    #[serde(default)]
    pub sites: Vec<String>,
    pub storage: Option<String>,
}

/// Domain names resolving back to an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainNames {
    pub domains: Vec<String>,
}

/// One bid in a domain auction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainBid {
    pub success: bool,
    pub value: i64,
    #[serde(rename = "txTime")]
    pub tx_time: i64,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
    pub bidder: AccountAddress,
}

/// Bid history for a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainBids {
    pub data: Vec<DomainBid>,
}

/// One ongoing domain auction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    pub domain: String,
    pub owner: String,
    pub price: i64,
    pub bids: i64,
    pub date: i64,
}

/// All ongoing auctions for a TLD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auctions {
    pub data: Vec<Auction>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_bid_wire_field_names() {
        let json = serde_json::json!({
            "success": true,
            "value": 5_000_000_000i64,
            "txTime": 1_690_000_000i64,
            "txHash": "abc123",
            "bidder": {"address": "0:00", "is_scam": false},
        });
        let bid: DomainBid = serde_json::from_value(json).unwrap();
        assert!(bid.success);
        assert_eq!(bid.tx_hash, "abc123");
        assert_eq!(bid.tx_time, 1_690_000_000);
    }

    #[test]
    fn test_domain_names() {
        let json = serde_json::json!({"domains": ["foo.ton", "bar.ton"]});
        let names: DomainNames = serde_json::from_value(json).unwrap();
        assert_eq!(names.domains, vec!["foo.ton", "bar.ton"]);
    }

    #[test]
    fn test_dns_record_all_optional() {
        let record: DnsRecord = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(record.wallet.is_none());
        assert!(record.sites.is_empty());
    }
}
