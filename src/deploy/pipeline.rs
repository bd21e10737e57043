//! The deployment sequence: tokens, pool, funding, bot

use alloy::{network::EthereumWallet, primitives::Address};
use std::time::Duration;
use tracing::{debug, info};
use crate::{
    config::{Config, USDC_NAME, USDC_SYMBOL, WETH_NAME, WETH_SYMBOL},
    contracts::{self, ArtifactSet},
    deploy::Deployer,
    errors::{DeployError, DeployResult},
    network::{self, LocalNode, RetryConfig},
    types::{ContractKind, DeployedContract, DeploymentRecord, FundingRecord},
    utils::to_base_units,
};

/// Everything a run needs once the node and account are settled.
pub struct DeploymentSession {
    pub deployer: Deployer,
    pub deployer_address: Address,
    pub chain_id: u64,
    /// Endpoint actually used, the spawned node's when there is one.
    pub rpc_url: String,
    // Keeps a spawned node alive for the whole run
    _node: Option<LocalNode>,
}

/// Loads artifacts, connects to (or spawns) the node and picks the account.
pub async fn prepare_session(config: &Config) -> DeployResult<DeploymentSession> {
    let artifacts = ArtifactSet::load(&config.artifacts_dir)?;

    let node = if config.spawn_anvil && config.private_key.is_none() {
        Some(LocalNode::spawn()?)
    } else {
        None
    };
    let rpc_url = node.as_ref().map(LocalNode::endpoint).unwrap_or_else(|| config.rpc_url.clone());

    let read_provider = network::setup_read_provider(&rpc_url)?;
    let chain_id = network::wait_for_node(&read_provider, &rpc_url, &RetryConfig::default()).await?;

    let (signer, source) = network::select_signer(config, chain_id, node.as_ref())?;
    let deployer_address = network::signer_address(&signer);
    debug!(?source, "Signer selected");
    info!("Deploying with account: {}", deployer_address);

    let provider = network::setup_signer_provider(&read_provider, EthereumWallet::from(signer));
    let deployer = Deployer::new(
        provider,
        artifacts,
        Duration::from_secs(config.deploy_timeout_secs),
    );

    Ok(DeploymentSession {
        deployer,
        deployer_address,
        chain_id,
        rpc_url,
        _node: node,
    })
}

pub async fn run_deployment(config: &Config) -> DeployResult<DeploymentRecord> {
    info!("Starting deployment...");
    log_configuration(config);
    let session = prepare_session(config).await?;
    execute_deployment(&session, config).await
}

fn log_configuration(config: &Config) {
    let rpc = if config.spawn_anvil && config.private_key.is_none() {
        "spawned anvil"
    } else {
        config.rpc_url.as_str()
    };
    info!("Flashloan arbitrage deployer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("   Network: {}", config.network);
    info!("   RPC URL: {}", rpc);
    info!("   Artifacts: {}", config.artifacts_dir.display());
    info!("   Pool funding: {} per token", config.pool_funding_amount.normalize());
}

/// Runs every step in order. Each step waits for its receipt, so an address
/// is only used once the transaction that created it has been mined.
pub async fn execute_deployment(
    session: &DeploymentSession,
    config: &Config,
) -> DeployResult<DeploymentRecord> {
    let deployer = &session.deployer;

    info!("Deploying mock tokens...");
    let usdc = deployer
        .deploy(ContractKind::MockToken, "USDC", contracts::mock_token_args(USDC_NAME, USDC_SYMBOL))
        .await?;
    let weth = deployer
        .deploy(ContractKind::MockToken, "WETH", contracts::mock_token_args(WETH_NAME, WETH_SYMBOL))
        .await?;
    info!("Mock USDC: {}", usdc.address);
    info!("Mock WETH: {}", weth.address);

    info!("Deploying MockPool...");
    let pool = deployer
        .deploy(ContractKind::MockPool, "MockPool", contracts::mock_pool_args(usdc.address, weth.address))
        .await?;
    info!("Mock Pool: {}", pool.address);

    info!("Funding the mock pool...");
    let funding = fund_pool(deployer, &usdc, &weth, pool.address, config).await?;
    info!(
        "Pool funded with {} USDC & WETH",
        config.pool_funding_amount.normalize()
    );

    info!("Deploying FlashloanArb bot...");
    // The pool is both the flash-loan lender and the swap venue
    let bot = deployer
        .deploy(ContractKind::FlashloanArb, "FlashloanArb", contracts::flashloan_arb_args(pool.address, pool.address))
        .await?;
    info!("FlashloanArb deployed to: {}", bot.address);

    Ok(DeploymentRecord {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp: chrono::Utc::now(),
        network: config.network.clone(),
        chain_id: session.chain_id,
        deployer: session.deployer_address,
        usdc,
        weth,
        pool,
        bot,
        funding,
    })
}

/// Mints the configured amount of both tokens to the pool, USDC first, then
/// reads the balances back.
async fn fund_pool(
    deployer: &Deployer,
    usdc: &DeployedContract,
    weth: &DeployedContract,
    pool: Address,
    config: &Config,
) -> DeployResult<Vec<FundingRecord>> {
    let amount = to_base_units(config.pool_funding_amount, config.token_decimals)?;

    let mut funding = Vec::with_capacity(2);
    for token in [usdc, weth] {
        funding.push(deployer.mint(&token.label, token.address, pool, amount).await?);
    }

    for token in [usdc, weth] {
        let actual = deployer.balance_of(token.address, pool).await?;
        if actual < amount {
            return Err(DeployError::FundingMismatch {
                token_label: token.label.clone(),
                pool,
                expected: amount,
                actual,
            });
        }
    }

    Ok(funding)
}
