//! Flash-loan arbitrage test fixture deployer
//!
//! Deploys two mock ERC-20 tokens, a mock liquidity pool funded with both,
//! and the FlashloanArb bot pointed at that pool, from compiled Hardhat
//! artifacts onto an EVM test network.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod contracts;
pub mod deploy;
pub mod utils;
pub mod storage;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{DeployError, DeployResult};
pub use types::*;

// Type alias for our concrete read-only provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;

// Filler + wallet provider used for every transaction
pub type SignerProvider = std::sync::Arc<dyn alloy::providers::Provider>;
