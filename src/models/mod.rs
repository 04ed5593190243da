//! Typed response models for the TON API.
//!
//! Shapes mirror the JSON the API returns; fields the API may omit are
//! `Option`. Open-ended maps (NFT metadata, rates, shard descriptors) stay
//! `serde_json::Value` and are left to the caller to interpret.

mod accounts;
mod blockchain;
mod dns;
mod events;
mod jettons;
mod nft;
mod rates;
mod staking;
mod traces;

pub use accounts::{
    Account, AccountAddress, Accounts, AddressForm, AddressFormB64, BalanceChange, DnsExpiring,
    DnsExpiringItem, FoundAccount, FoundAccounts, PublicKey, Subscription, Subscriptions,
};
pub use blockchain::{BlockchainBlock, Message, Transaction, Transactions};
pub use dns::{Auction, Auctions, DnsRecord, DomainBid, DomainBids, DomainNames, WalletDns};
pub use events::{
    AccountEvent, AccountEvents, Action, BlockEventData, ContractDeployAction, JettonTransferAction,
    MempoolEventData, TonTransferAction, TraceEventData, TransactionEventData,
};
pub use jettons::{
    JettonBalance, JettonHolder, JettonHolders, JettonInfo, JettonMetadata, JettonPreview, Jettons,
    JettonsBalances,
};
pub use nft::{Collection, ImagePreview, NftCollection, NftCollections, NftItem, NftItems, Price, Sale};
pub use rates::{ChartRates, Rates};
pub use staking::{
    AccountStaking, AccountStakingInfo, ApyHistory, PoolImplementation, PoolInfo, StakingPoolHistory,
    StakingPoolInfo, StakingPools,
};
pub use traces::{Trace, TraceId, TraceIds};
