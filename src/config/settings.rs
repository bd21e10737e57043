//! Deployer configuration settings and environment variable handling

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

// Configuration constants
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
pub const DEFAULT_NETWORK: &str = "localhost";
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts/contracts";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_POOL_FUNDING: Decimal = dec!(10_000_000);
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;
pub const MAX_TOKEN_DECIMALS: u8 = 77; // 10^77 still fits in a U256

// Receipt wait per transaction
pub const DEFAULT_DEPLOY_TIMEOUT_SECS: u64 = 60;
pub const MIN_DEPLOY_TIMEOUT_SECS: u64 = 5;
pub const MAX_DEPLOY_TIMEOUT_SECS: u64 = 600;

// Hardhat and Anvil both run their dev chain under this id
pub const DEV_CHAIN_ID: u64 = 31337;
// Dev account #0 of the shared "test test ... junk" mnemonic
pub const DEV_ACCOUNT_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

// Mock token parameters
pub const USDC_NAME: &str = "Usdc";
pub const USDC_SYMBOL: &str = "fusdc";
pub const WETH_NAME: &str = "WETH";
pub const WETH_SYMBOL: &str = "FWETH";

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub network: String,
    pub private_key: Option<String>,
    pub spawn_anvil: bool,
    pub artifacts_dir: PathBuf,
    // Funding
    pub pool_funding_amount: Decimal,
    pub token_decimals: u8,
    // Transactions
    pub deploy_timeout_secs: u64,
    // Output
    pub save_deployment: bool,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unparseable values fall back to
    /// their defaults and numeric values are clamped to their bounds.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            rpc_url: non_empty("RPC_URL")
                .unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
            network: non_empty("NETWORK")
                .unwrap_or_else(|| DEFAULT_NETWORK.to_string()),
            private_key: non_empty("PRIVATE_KEY"),
            spawn_anvil: non_empty("SPAWN_ANVIL")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(false),
            artifacts_dir: non_empty("ARTIFACTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR)),
            pool_funding_amount: non_empty("POOL_FUNDING_AMOUNT")
                .and_then(|s| Decimal::from_str(s.trim()).ok())
                .filter(|amount| *amount > dec!(0))
                .unwrap_or(DEFAULT_POOL_FUNDING),
            token_decimals: non_empty("TOKEN_DECIMALS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_TOKEN_DECIMALS)
                .min(MAX_TOKEN_DECIMALS),
            deploy_timeout_secs: non_empty("DEPLOY_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_DEPLOY_TIMEOUT_SECS)
                .clamp(MIN_DEPLOY_TIMEOUT_SECS, MAX_DEPLOY_TIMEOUT_SECS),
            save_deployment: non_empty("SAVE_DEPLOYMENT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(true),
            output_dir: non_empty("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        }
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.output_dir.join("logs")
    }

    pub fn deployments_dir(&self) -> PathBuf {
        self.output_dir.join("deployments")
    }
}
