//! Custom error types for the deployer

use alloy::primitives::{Address, TxHash, U256};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        retry_count: u32,
    },

    #[error("No signing account: set PRIVATE_KEY or SPAWN_ANVIL=true (chain id {chain_id} has no dev accounts)")]
    MissingSigner { chain_id: u64 },

    #[error("Invalid signer: {message}")]
    Signer {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Artifact error for {contract} ({path}): {message}")]
    Artifact {
        contract: String,
        path: PathBuf,
        message: String,
    },

    #[error("Failed to encode {context}")]
    Encoding {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Transaction failed during {step}: {message}")]
    Transaction {
        step: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Transaction reverted during {step}: {tx_hash}")]
    Reverted { step: String, tx_hash: TxHash },

    #[error("Receipt for {step} has no contract address: {tx_hash}")]
    MissingContractAddress { step: String, tx_hash: TxHash },

    #[error("No runtime code at {address} after deploying {step}")]
    EmptyCode { step: String, address: Address },

    #[error("Timed out after {timeout:?} waiting for {step}")]
    Timeout { step: String, timeout: Duration },

    #[error("Pool {pool} holds {actual} {token_label}, expected at least {expected}")]
    FundingMismatch {
        token_label: String,
        pool: Address,
        expected: U256,
        actual: U256,
    },

    #[error("Failed to persist deployment record to {path}")]
    Storage {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

pub type DeployResult<T> = Result<T, DeployError>;

impl DeployError {
    pub fn transaction(step: &str, source: impl Into<anyhow::Error>) -> Self {
        let source = source.into();
        DeployError::Transaction {
            step: step.to_string(),
            message: source.to_string(),
            source: Some(source),
        }
    }
}
