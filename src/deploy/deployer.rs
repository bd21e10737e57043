//! Contract creation and token calls over a signing provider

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    rpc::types::eth::{TransactionReceipt, TransactionRequest},
};
use std::time::Duration;
use tracing::{debug, info};
use crate::{
    contracts::{self, ArtifactSet},
    errors::{DeployError, DeployResult},
    types::{ContractKind, DeployedContract, FundingRecord},
    SignerProvider,
};

pub struct Deployer {
    provider: SignerProvider,
    artifacts: ArtifactSet,
    confirmation_timeout: Duration,
}

impl Deployer {
    pub fn new(provider: SignerProvider, artifacts: ArtifactSet, confirmation_timeout: Duration) -> Self {
        Self {
            provider,
            artifacts,
            confirmation_timeout,
        }
    }

    /// Sends a create transaction for `kind` and waits until the contract
    /// has code on chain.
    pub async fn deploy(
        &self,
        kind: ContractKind,
        label: &str,
        constructor_args: Bytes,
    ) -> DeployResult<DeployedContract> {
        let step = format!("{label} ({kind})");
        let init_code = self.artifacts.get(kind).init_code(&constructor_args);
        debug!(step = %step, size = init_code.len(), "Sending create transaction");

        let tx = TransactionRequest::default().with_deploy_code(init_code);
        let receipt = self.send_and_confirm(&step, tx).await?;

        let address = receipt.contract_address.ok_or_else(|| DeployError::MissingContractAddress {
            step: step.clone(),
            tx_hash: receipt.transaction_hash,
        })?;

        let code = self.provider.get_code_at(address).await
            .map_err(|e| DeployError::transaction(&step, e))?;
        if code.is_empty() {
            return Err(DeployError::EmptyCode { step, address });
        }

        Ok(DeployedContract {
            label: label.to_string(),
            kind,
            address,
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: u128::from(receipt.gas_used),
        })
    }

    /// `token.mint(to, amount)`
    pub async fn mint(
        &self,
        token_label: &str,
        token: Address,
        to: Address,
        amount: U256,
    ) -> DeployResult<FundingRecord> {
        let step = format!("mint {token_label}");
        let tx = TransactionRequest::default()
            .to(token)
            .input(contracts::mint_calldata(to, amount).into());

        let receipt = self.send_and_confirm(&step, tx).await?;

        Ok(FundingRecord {
            token_label: token_label.to_string(),
            token,
            recipient: to,
            amount,
            tx_hash: receipt.transaction_hash,
        })
    }

    /// `token.balanceOf(owner)` via `eth_call`
    pub async fn balance_of(&self, token: Address, owner: Address) -> DeployResult<U256> {
        let step = format!("balanceOf {owner} on {token}");
        let tx = TransactionRequest::default()
            .to(token)
            .input(contracts::balance_of_calldata(owner).into());

        let data = self.provider.call(&tx).await
            .map_err(|e| DeployError::transaction(&step, e))?;
        contracts::decode_balance(&data).map_err(|e| DeployError::transaction(&step, e))
    }

    async fn send_and_confirm(&self, step: &str, tx: TransactionRequest) -> DeployResult<TransactionReceipt> {
        let pending = self.provider.send_transaction(tx).await
            .map_err(|e| DeployError::transaction(step, e))?;
        let tx_hash = *pending.tx_hash();

        info!("Sent {}: {}", step, tx_hash);

        tokio::select! {
            result = pending.get_receipt() => {
                let receipt = result.map_err(|e| DeployError::transaction(step, e))?;
                if !receipt.status() {
                    return Err(DeployError::Reverted {
                        step: step.to_string(),
                        tx_hash,
                    });
                }
                debug!(step, block = ?receipt.block_number, "Transaction confirmed");
                Ok(receipt)
            }
            _ = tokio::time::sleep(self.confirmation_timeout) => {
                Err(DeployError::Timeout {
                    step: step.to_string(),
                    timeout: self.confirmation_timeout,
                })
            }
        }
    }
}
