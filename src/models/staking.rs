//! Staking pool response models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One pool an account stakes in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountStakingInfo {
    pub pool: String,
    pub amount: i64,
    pub pending_deposit: i64,
    pub pending_withdraw: i64,
    pub ready_withdraw: i64,
}

/// All pools an account participates in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountStaking {
    pub pools: Vec<AccountStakingInfo>,
}

/// Description of a pool implementation family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolImplementation {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub socials: Vec<String>,
}

/// One staking pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolInfo {
    pub address: String,
    pub name: String,
    pub total_amount: i64,
    pub implementation: String,
    pub apy: f64,
    pub min_stake: i64,
    pub cycle_start: i64,
    pub cycle_end: i64,
    pub verified: bool,
    pub current_nominators: i64,
    pub max_nominators: i64,
    pub liquid_jetton_master: Option<String>,
    pub nominators_stake: i64,
    pub validator_stake: i64,
}

/// Pool plus its implementation details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingPoolInfo {
    pub implementation: PoolImplementation,
    pub pool: PoolInfo,
}

/// One APY sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApyHistory {
    pub apy: f64,
    pub time: i64,
}

/// APY history of a pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingPoolHistory {
    pub apy: Vec<ApyHistory>,
}

/// All pools on the network, keyed implementations included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingPools {
    pub pools: Vec<PoolInfo>,
    pub implementations: HashMap<String, PoolImplementation>,
}
