//! NFT response models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AccountAddress;

/// A price quoted for an NFT sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub value: String,
    pub token_name: String,
}

/// An active sale contract for an NFT item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub address: String,
    pub market: AccountAddress,
    pub owner: Option<AccountAddress>,
    pub price: Price,
}

/// A resized preview of an NFT image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePreview {
    pub resolution: String,
    pub url: String,
}

/// Compact collection reference embedded in items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub address: String,
    pub name: String,
    pub description: Option<String>,
}

/// A full NFT collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftCollection {
    pub address: String,
    pub next_item_index: i64,
    pub owner: Option<AccountAddress>,
    pub raw_collection_content: String,
    /// Collection metadata is an open map.
    pub metadata: Option<Value>,
    pub previews: Option<Vec<ImagePreview>>,
}

/// Collections page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftCollections {
    pub nft_collections: Vec<NftCollection>,
}

/// A single NFT item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftItem {
    pub address: String,
    pub index: i64,
    pub owner: Option<AccountAddress>,
    pub collection: Option<Collection>,
    pub verified: bool,
    /// Item metadata is an open map.
    pub metadata: Value,
    pub sale: Option<Sale>,
    pub previews: Option<Vec<ImagePreview>>,
    pub dns: Option<String>,
    #[serde(default)]
    pub approved_by: Vec<String>,
    /// One of `whitelist`, `graylist`, `blacklist`, `none`.
    pub trust: Option<String>,
}

/// Items page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftItems {
    pub nft_items: Vec<NftItem>,
}
