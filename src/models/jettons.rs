//! Jetton (fungible token) response models.

use serde::{Deserialize, Serialize};

use super::AccountAddress;

/// Jetton master metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JettonMetadata {
    pub address: String,
    pub name: String,
    pub symbol: String,
    /// Decimals arrive as a string on the wire.
    pub decimals: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub social: Option<Vec<String>>,
    pub websites: Option<Vec<String>>,
    pub catalogs: Option<Vec<String>>,
}

/// Full jetton master information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JettonInfo {
    pub mintable: bool,
    pub total_supply: String,
    pub metadata: JettonMetadata,
    /// One of `whitelist`, `blacklist`, `none`.
    pub verification: String,
    pub holders_count: Option<i64>,
}

/// Compact jetton reference embedded in balances and events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JettonPreview {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: i32,
    pub image: String,
    pub verification: String,
}

/// One jetton balance of an owner wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JettonBalance {
    /// Raw token amount as a decimal string.
    pub balance: String,
    pub wallet_address: AccountAddress,
    pub jetton: JettonPreview,
}

/// All jetton balances of an owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JettonsBalances {
    pub balances: Vec<JettonBalance>,
}

/// Page of all jetton masters known to the indexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jettons {
    pub jettons: Vec<JettonInfo>,
}

/// One holder of a jetton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JettonHolder {
    pub address: String,
    pub owner: AccountAddress,
    pub balance: String,
}

/// Holders page for a jetton master.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JettonHolders {
    pub addresses: Vec<JettonHolder>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jetton_balance_deserialization() {
        let json = serde_json::json!({
            "balance": "597968399",
            "wallet_address": {
                "address": "0:9a33970f617bcd71acf2cd28357c067aa31859c02820d8f01d74c88063a8f4d8",
                "is_scam": false,
            },
            "jetton": {
                "address": "0:b113a994b5024a16719f69139328eb759596c38a25f59028b146fecdc3621dfe",
                "name": "Tether USD",
                "symbol": "USDT",
                "decimals": 6,
                "image": "https://example.com/usdt.png",
                "verification": "whitelist",
            },
        });

        let balance: JettonBalance = serde_json::from_value(json).unwrap();
        assert_eq!(balance.balance, "597968399");
        assert_eq!(balance.jetton.symbol, "USDT");
        assert_eq!(balance.jetton.decimals, 6);
        assert!(!balance.wallet_address.is_scam);
    }
}
