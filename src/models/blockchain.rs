//! Blockchain (blocks and raw transactions) response models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AccountAddress;

/// A message attached to a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub created_lt: u64,
    pub ihr_disabled: Option<bool>,
    pub bounce: Option<bool>,
    pub bounced: Option<bool>,
    pub value: i64,
    pub fwd_fee: i64,
    pub ihr_fee: i64,
    pub destination: Option<AccountAddress>,
    pub source: Option<AccountAddress>,
    pub import_fee: i64,
    pub created_at: i64,
    pub op_code: Option<String>,
    pub raw_body: Option<String>,
    pub decoded_op_name: Option<String>,
    pub decoded_body: Option<Value>,
}

/// A raw blockchain transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub lt: u64,
    pub account: AccountAddress,
    pub success: bool,
    pub utime: i64,
    pub orig_status: String,
    pub end_status: String,
    pub total_fees: i64,
    pub transaction_type: String,
    pub state_update_old: String,
    pub state_update_new: String,
    pub in_msg: Option<Message>,
    #[serde(default)]
    pub out_msgs: Vec<Message>,
    pub block: String,
    pub prev_trans_hash: Option<String>,
    pub prev_trans_lt: Option<u64>,
    /// Execution phases are open maps; callers needing them drill in.
    pub compute_phase: Option<Value>,
    pub storage_phase: Option<Value>,
    pub credit_phase: Option<Value>,
    pub action_phase: Option<Value>,
    pub bounce_phase: Option<String>,
    pub aborted: Option<bool>,
    pub destroyed: Option<bool>,
}

/// Page of transactions for an account or block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transactions {
    pub transactions: Vec<Transaction>,
}

/// A block header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockchainBlock {
    pub workchain_id: i32,
    pub shard: String,
    pub seqno: u32,
    pub root_hash: String,
    pub file_hash: String,
    pub global_id: i32,
    pub version: u32,
    pub after_merge: bool,
    pub before_split: bool,
    pub after_split: bool,
    pub want_split: bool,
    pub want_merge: bool,
    pub key_block: bool,
    pub gen_utime: i64,
    pub start_lt: u64,
    pub end_lt: u64,
    pub vert_seqno: u32,
    pub gen_catchain_seqno: u32,
    pub min_ref_mc_seqno: u32,
    pub prev_key_block_seqno: u32,
    pub gen_software_version: Option<u32>,
    pub gen_software_capabilities: Option<i64>,
    pub master_ref: Option<String>,
    #[serde(default)]
    pub prev_refs: Vec<String>,
    pub in_msg_descr_length: Option<i64>,
    pub out_msg_descr_length: Option<i64>,
    pub rand_seed: Option<String>,
    pub created_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_deserialization() {
        let json = serde_json::json!({
            "hash": "deadbeef",
            "lt": 40_208_061_000_001u64,
            "account": {"address": "0:00", "is_scam": false},
            "success": true,
            "utime": 1_700_000_000i64,
            "orig_status": "active",
            "end_status": "active",
            "total_fees": 5_000_000i64,
            "transaction_type": "TransOrd",
            "state_update_old": "old",
            "state_update_new": "new",
            "out_msgs": [],
            "block": "(0,8000000000000000,40000000)",
        });
        let txn: Transaction = serde_json::from_value(json).unwrap();
        assert!(txn.success);
        assert_eq!(txn.transaction_type, "TransOrd");
        assert!(txn.in_msg.is_none());
        assert!(txn.out_msgs.is_empty());
    }
}
