//! Async client library for the TON API (tonapi.io), a blockchain-indexing
//! web service.
//!
//! The crate exposes three layers:
//!
//! - [`address`] / [`amount`]: pure helpers for the two textual TON address
//!   forms and nanoton conversions, usable without a client.
//! - [`TonApiClient`]: typed request/response wrappers over the REST API
//!   (accounts, jettons, NFTs, DNS, staking, traces, blockchain, rates) with
//!   uniform error classification and a bounded rate-limit retry loop.
//! - Streaming subscriptions over SSE and WebSocket for live transaction,
//!   trace and mempool events.
//!
//! # Example
//!
//! ```ignore
//! use tonapi_client::{Network, TonApiClient, address};
//!
//! # async fn run() -> tonapi_client::Result<()> {
//! let client = TonApiClient::new("YOUR_API_KEY", Network::Mainnet)?;
//!
//! let raw = address::userfriendly_to_raw("EQCD39VS5jcptHL8vMjEXrzGaRcCVYto7HUn4bpAOg8xqB2N")?;
//! let account = client.get_account_info(&raw).await?;
//! println!("{} has {} nanoton", account.address, account.balance);
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod amount;
pub mod client;
pub mod error;
pub mod models;
pub mod network;

pub use client::{TonApiClient, TonApiClientBuilder};
pub use error::{Result, TonApiError};
pub use network::Network;
