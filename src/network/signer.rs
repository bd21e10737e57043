//! Deployer account selection

use alloy::{
    node_bindings::{Anvil, AnvilInstance},
    primitives::Address,
    signers::local::PrivateKeySigner,
};
use std::str::FromStr;
use tracing::{info, warn};
use crate::{
    config::{Config, DEV_ACCOUNT_PRIVATE_KEY, DEV_CHAIN_ID},
    errors::{DeployError, DeployResult},
};

/// Where the deployer key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerSource {
    PrivateKey,
    Anvil,
    DevAccount,
}

/// A node spawned for this run. The process is killed when dropped.
pub struct LocalNode {
    pub instance: AnvilInstance,
}

impl LocalNode {
    pub fn spawn() -> DeployResult<Self> {
        info!("Spawning local Anvil node...");
        let instance = Anvil::new().try_spawn().map_err(|e| DeployError::Network {
            message: "Failed to spawn Anvil (is it installed?)".to_string(),
            source: Some(anyhow::Error::new(e)),
            retry_count: 0,
        })?;
        info!("Anvil listening at {} (chain {})", instance.endpoint(), instance.chain_id());
        Ok(Self { instance })
    }

    pub fn endpoint(&self) -> String {
        self.instance.endpoint()
    }

    /// First funded dev key of the spawned node.
    pub fn first_signer(&self) -> DeployResult<PrivateKeySigner> {
        let key = self.instance.keys().first().cloned().ok_or_else(|| DeployError::Signer {
            message: "Anvil started without dev accounts".to_string(),
            source: anyhow::anyhow!("empty key list"),
        })?;
        Ok(PrivateKeySigner::from_signing_key(key.into()))
    }
}

pub fn parse_private_key(key: &str) -> DeployResult<PrivateKeySigner> {
    PrivateKeySigner::from_str(key.trim()).map_err(|e| DeployError::Signer {
        // Never echo the key itself
        message: "PRIVATE_KEY is not a valid secp256k1 key".to_string(),
        source: anyhow::Error::new(e),
    })
}

/// Picks the deployer account for a node reporting `chain_id`.
///
/// An explicit key always wins. Without one, only dev chains get the shared
/// dev account; any other chain is refused.
pub fn select_signer(
    config: &Config,
    chain_id: u64,
    node: Option<&LocalNode>,
) -> DeployResult<(PrivateKeySigner, SignerSource)> {
    if let Some(key) = &config.private_key {
        return Ok((parse_private_key(key)?, SignerSource::PrivateKey));
    }

    if let Some(node) = node {
        return Ok((node.first_signer()?, SignerSource::Anvil));
    }

    if chain_id == DEV_CHAIN_ID {
        warn!("PRIVATE_KEY not set, falling back to dev account #0 on chain {}", chain_id);
        return Ok((parse_private_key(DEV_ACCOUNT_PRIVATE_KEY)?, SignerSource::DevAccount));
    }

    Err(DeployError::MissingSigner { chain_id })
}

pub fn signer_address(signer: &PrivateKeySigner) -> Address {
    signer.address()
}
