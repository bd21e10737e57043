//! Network provider setup and node connection

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use crate::{
    errors::{DeployError, DeployResult},
    network::retry::{retry_with_backoff, RetryConfig},
    ConcreteProvider, SignerProvider,
};

/// Read-only provider used before a signer is known.
pub fn setup_read_provider(rpc_url: &str) -> DeployResult<Arc<ConcreteProvider>> {
    let url: Url = rpc_url.parse().map_err(|e| DeployError::Network {
        message: format!("Invalid RPC URL: {}", rpc_url),
        source: Some(anyhow::Error::new(e)),
        retry_count: 0,
    })?;

    Ok(Arc::new(ProviderBuilder::new().on_http(url).boxed()))
}

/// Provider that fills nonce, gas and chain id and signs with `wallet`.
pub fn setup_signer_provider(
    root: &Arc<ConcreteProvider>,
    wallet: EthereumWallet,
) -> SignerProvider {
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_provider(root.as_ref().clone());

    Arc::new(provider)
}

/// Waits for the node to answer `eth_chainId` and returns the chain id.
pub async fn wait_for_node(
    provider: &ConcreteProvider,
    rpc_url: &str,
    retry: &RetryConfig,
) -> DeployResult<u64> {
    info!("Connecting to {}...", rpc_url);

    let chain_id = retry_with_backoff(
        || async move {
            provider.get_chain_id().await
                .context("Failed to get chain id")
        },
        retry,
        "node connection",
    ).await?;

    info!("Connected to chain {}", chain_id);
    Ok(chain_id)
}
