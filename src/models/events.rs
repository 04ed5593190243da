//! Event and event-stream response models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AccountAddress, JettonPreview};

/// A plain TON transfer action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonTransferAction {
    pub sender: AccountAddress,
    pub recipient: AccountAddress,
    pub amount: i64,
    pub comment: Option<String>,
}

/// A jetton transfer action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JettonTransferAction {
    pub sender: Option<AccountAddress>,
    pub recipient: Option<AccountAddress>,
    pub senders_wallet: String,
    pub recipients_wallet: String,
    pub amount: String,
    pub comment: Option<String>,
    pub jetton: JettonPreview,
}

/// A contract deployment action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDeployAction {
    pub address: String,
    #[serde(default)]
    pub interfaces: Vec<String>,
}

/// One high-level action inside an event.
///
/// The API tags each action with its `type` and attaches the matching typed
/// payload under a field of the same name. Action kinds this client does not
/// model stay reachable through `simple_preview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: String,
    pub status: String,
    #[serde(rename = "TonTransfer")]
    pub ton_transfer: Option<TonTransferAction>,
    #[serde(rename = "JettonTransfer")]
    pub jetton_transfer: Option<JettonTransferAction>,
    #[serde(rename = "ContractDeploy")]
    pub contract_deploy: Option<ContractDeployAction>,
    pub simple_preview: Option<Value>,
}

/// An event on one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountEvent {
    pub event_id: String,
    pub account: AccountAddress,
    pub timestamp: i64,
    pub actions: Vec<Action>,
    pub is_scam: bool,
    pub lt: u64,
    pub in_progress: bool,
    pub extra: i64,
}

/// Page of account events plus the pagination cursor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountEvents {
    pub events: Vec<AccountEvent>,
    pub next_from: i64,
}

// ============================================================================
// Stream payloads
// ============================================================================

/// Payload of a transaction stream event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEventData {
    pub account_id: String,
    pub lt: u64,
    pub tx_hash: String,
}

/// Payload of a trace stream event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEventData {
    pub accounts: Vec<String>,
    pub hash: String,
}

/// Payload of a mempool stream event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MempoolEventData {
    pub boc: String,
}

/// Payload of a block stream event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockEventData {
    pub workchain: i32,
    pub shard: String,
    pub seqno: u32,
    pub root_hash: String,
    pub file_hash: String,
}
