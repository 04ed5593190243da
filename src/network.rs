//! Network selection for the TON API.
//!
//! The API is served from two fixed hosts; picking a network selects the
//! base URL for REST/SSE calls and the WebSocket endpoint.

use serde::{Deserialize, Serialize};

// ============================================================================
// Network Configuration
// ============================================================================

/// TON network variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Network {
    /// TON mainnet - the production network.
    #[default]
    Mainnet,
    /// TON testnet - the test network for development.
    Testnet,
}

impl Network {
    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Testnet => "Testnet",
        }
    }

    /// Returns the REST/SSE base URL for this network.
    ///
    /// The URL carries a trailing slash; API paths are appended directly.
    #[must_use]
    pub const fn base_url(&self) -> &str {
        match self {
            Self::Mainnet => "https://tonapi.io/",
            Self::Testnet => "https://testnet.tonapi.io/",
        }
    }

    /// Returns the WebSocket endpoint for this network.
    #[must_use]
    pub const fn websocket_url(&self) -> &str {
        match self {
            Self::Mainnet => "wss://tonapi.io/v2/websocket",
            Self::Testnet => "wss://testnet.tonapi.io/v2/websocket",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
