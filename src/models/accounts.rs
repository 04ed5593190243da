//! Account response models.

use serde::{Deserialize, Serialize};

use super::NftItem;

/// Short form of an account used inside other responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountAddress {
    /// Raw address of the account.
    pub address: String,
    pub name: Option<String>,
    #[serde(default)]
    pub is_scam: bool,
    pub icon: Option<String>,
}

/// Human-friendly account information without low-level details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    /// Balance in nanoton.
    pub balance: i64,
    pub last_activity: i64,
    pub status: String,
    pub interfaces: Option<Vec<String>>,
    pub name: Option<String>,
    pub is_scam: Option<bool>,
    pub icon: Option<String>,
    pub memo_required: Option<bool>,
    #[serde(default)]
    pub get_methods: Vec<String>,
}

/// Bulk account lookup result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accounts {
    pub accounts: Vec<Account>,
}

/// One textual rendering of an address, in standard and URL-safe base64.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressFormB64 {
    pub b64: String,
    pub b64url: String,
}

/// All renderings of an address as returned by the parse endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressForm {
    pub raw_form: String,
    pub bounceable: AddressFormB64,
    pub non_bounceable: AddressFormB64,
    pub given_type: String,
    pub test_only: bool,
}

/// An account matched by a domain-name search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundAccount {
    pub address: String,
    pub name: Option<String>,
    pub preview: Option<String>,
}

/// Domain-name search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundAccounts {
    pub addresses: Vec<FoundAccount>,
}

/// Public key attached to an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicKey {
    pub public_key: String,
}

/// Net balance change over a requested period, in nanoton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceChange {
    pub balance_change: i64,
}

/// An on-chain subscription contract attached to a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub address: String,
    pub wallet_address: String,
    pub beneficiary_address: String,
    pub amount: i64,
    pub period: i64,
    pub start_time: i64,
    pub timeout: i64,
    pub last_payment_time: i64,
    pub last_request_time: i64,
    pub subscription_id: String,
    pub failed_attempts: i32,
}

/// All subscriptions for a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriptions {
    pub subscriptions: Vec<Subscription>,
}

/// A `.ton` domain nearing expiration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsExpiringItem {
    pub expiring_at: i64,
    pub name: String,
    pub dns_item: Option<NftItem>,
}

/// Expiring domains for an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsExpiring {
    pub items: Vec<DnsExpiringItem>,
}
