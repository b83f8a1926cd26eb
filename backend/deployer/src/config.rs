//! Deployment configuration loaded from environment variables.

use std::str::FromStr;

use crate::errors::{DeployError, Result};

/// Target network for a deployment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// Local quickstart container; always gets a freshly deployed mock feed.
    Local,
    Testnet,
    Mainnet,
}

impl Network {
    /// Development networks have no live oracle to point at.
    pub fn is_dev(self) -> bool {
        matches!(self, Network::Local)
    }

    /// Network name as understood by the stellar CLI presets.
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Local => "local",
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
        }
    }
}

impl FromStr for Network {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" | "standalone" | "sandbox" => Ok(Network::Local),
            "testnet" => Ok(Network::Testnet),
            "mainnet" | "public" => Ok(Network::Mainnet),
            other => Err(DeployError::Config(format!("Unknown network: {other}"))),
        }
    }
}

/// Live price-feed contract per network (the funding asset quoted in USD).
/// The local network never appears here because it always gets a mock.
pub fn live_price_feed(network: Network) -> Option<&'static str> {
    match network {
        Network::Local => None,
        Network::Testnet => Some("CCYOZJCOPG34LLQQ7N24YXBM7LL62R7ONMZ3G6WZAAYPB5OYKOMJRN63"),
        Network::Mainnet => Some("CALI2BYU2JE6WVRUFYTS6MSBNEHGJ35P4AVCZYF3B6QOE3QKOB2PLE6M"),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Target network.
    pub network: Network,
    /// CLI identity (name or G-address) that signs; it becomes the owner.
    pub source_account: String,
    /// Optional RPC endpoint override.
    pub rpc_url: Option<String>,
    /// Mock feed decimal precision (development networks only).
    pub mock_decimals: u32,
    /// Mock feed starting quote (development networks only).
    pub mock_initial_answer: i128,
    /// Overrides the built-in live feed table when set.
    pub price_feed_id: Option<String>,
    /// Verification credential; verification is skipped when absent.
    pub explorer_api_key: Option<String>,
    /// Built contract artifacts.
    pub fund_me_wasm: String,
    pub mock_feed_wasm: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            network: env_var("NETWORK")
                .unwrap_or_else(|_| "local".to_string())
                .parse()?,
            source_account: env_var("SOURCE_ACCOUNT").map_err(|_| {
                DeployError::Config("SOURCE_ACCOUNT environment variable is required".to_string())
            })?,
            rpc_url: env_var("RPC_URL").ok(),
            mock_decimals: env_var("MOCK_DECIMALS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .map_err(|_| DeployError::Config("Invalid MOCK_DECIMALS".to_string()))?,
            mock_initial_answer: env_var("MOCK_INITIAL_ANSWER")
                .unwrap_or_else(|_| "200000000000".to_string())
                .parse()
                .map_err(|_| DeployError::Config("Invalid MOCK_INITIAL_ANSWER".to_string()))?,
            price_feed_id: env_var("PRICE_FEED_ID").ok(),
            explorer_api_key: env_var("EXPLORER_API_KEY").ok(),
            fund_me_wasm: env_var("FUND_ME_WASM")
                .unwrap_or_else(|_| "target/wasm32v1-none/release/fund_me.wasm".to_string()),
            mock_feed_wasm: env_var("MOCK_FEED_WASM").unwrap_or_else(|_| {
                "target/wasm32v1-none/release/mock_price_feed.wasm".to_string()
            }),
        })
    }

    /// The feed the ledger gets wired to on a live network: an explicit
    /// override first, then the built-in table.
    pub fn resolved_price_feed(&self) -> Result<String> {
        if let Some(id) = &self.price_feed_id {
            return Ok(id.clone());
        }
        live_price_feed(self.network)
            .map(str::to_string)
            .ok_or_else(|| {
                DeployError::Config(format!(
                    "No live price feed known for network {}; set PRICE_FEED_ID",
                    self.network.as_str()
                ))
            })
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| DeployError::Config(format!("Missing env var: {key}")))
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
