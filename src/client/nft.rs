//! NFT methods for [`TonApiClient`].

use serde_json::json;

use super::{Query, TonApiClient};
use crate::error::Result;
use crate::models::{NftCollection, NftCollections, NftItem, NftItems};

impl TonApiClient {
    /// Get a page of NFT collections.
    pub async fn get_nft_collections(&self, limit: u32, offset: u32) -> Result<NftCollections> {
        let query = Query::new().pair("limit", limit).pair("offset", offset);
        self.get_json("v2/nfts/collections", &query).await
    }

    /// Get an NFT collection by its address.
    pub async fn get_nft_collection(&self, collection_id: &str) -> Result<NftCollection> {
        let path = format!("v2/nfts/collections/{collection_id}");
        self.get_json(&path, &Query::new()).await
    }

    /// Get a page of items from a collection.
    pub async fn get_nft_items_by_collection(
        &self,
        collection_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<NftItems> {
        let path = format!("v2/nfts/collections/{collection_id}/items");
        let query = Query::new().pair("limit", limit).pair("offset", offset);
        self.get_json(&path, &query).await
    }

    /// Get one NFT item by its address.
    pub async fn get_nft_item(&self, account_id: &str) -> Result<NftItem> {
        let path = format!("v2/nfts/{account_id}");
        self.get_json(&path, &Query::new()).await
    }

    /// Get several NFT items by address in one call.
    pub async fn get_bulk_nft_items<S: AsRef<str>>(&self, account_ids: &[S]) -> Result<NftItems> {
        let ids: Vec<&str> = account_ids.iter().map(AsRef::as_ref).collect();
        let body = json!({ "account_ids": ids });
        self.post_json("v2/nfts/_bulk", Some(&body)).await
    }
}
