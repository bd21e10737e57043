//! Deployment result types

use alloy::primitives::{Address, TxHash, U256};
use chrono::{DateTime, Utc};
use serde::Serialize;
use super::ContractKind;

#[derive(Debug, Clone, Serialize)]
pub struct DeployedContract {
    pub label: String,
    pub kind: ContractKind,
    pub address: Address,
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct FundingRecord {
    pub token_label: String,
    pub token: Address,
    pub recipient: Address,
    pub amount: U256,
    pub tx_hash: TxHash,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeploymentRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub network: String,
    pub chain_id: u64,
    pub deployer: Address,
    pub usdc: DeployedContract,
    pub weth: DeployedContract,
    pub pool: DeployedContract,
    pub bot: DeployedContract,
    pub funding: Vec<FundingRecord>,
}

impl DeploymentRecord {
    pub fn contracts(&self) -> [&DeployedContract; 4] {
        [&self.usdc, &self.weth, &self.pool, &self.bot]
    }

    pub fn total_gas_used(&self) -> u128 {
        self.contracts().iter().map(|c| c.gas_used).sum()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use alloy::primitives::{address, b256};

    pub fn deployed(label: &str, kind: ContractKind, address: Address, gas_used: u128) -> DeployedContract {
        DeployedContract {
            label: label.to_string(),
            kind,
            address,
            tx_hash: b256!("1111111111111111111111111111111111111111111111111111111111111111"),
            block_number: Some(1),
            gas_used,
        }
    }

    pub fn sample_record() -> DeploymentRecord {
        let pool = address!("9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0");
        DeploymentRecord {
            id: "3f1c2a4e-0000-4000-8000-000000000000".to_string(),
            timestamp: Utc::now(),
            network: "localhost".to_string(),
            chain_id: 31337,
            deployer: address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            usdc: deployed("USDC", ContractKind::MockToken, address!("5FbDB2315678afecb367f032d93F642f64180aa3"), 600_000),
            weth: deployed("WETH", ContractKind::MockToken, address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512"), 600_000),
            pool: deployed("MockPool", ContractKind::MockPool, pool, 400_000),
            bot: deployed("FlashloanArb", ContractKind::FlashloanArb, address!("Dc64a140Aa3E981100a9becA4E685f962f0cF6C9"), 900_000),
            funding: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_record;

    #[test]
    fn sums_gas_over_all_contracts() {
        assert_eq!(sample_record().total_gas_used(), 2_500_000);
    }

    #[test]
    fn serializes_addresses_as_hex_strings() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["chain_id"], 31337);
        assert_eq!(json["pool"]["kind"], "MockPool");
        assert_eq!(
            json["usdc"]["address"].as_str().map(str::to_lowercase).as_deref(),
            Some("0x5fbdb2315678afecb367f032d93f642f64180aa3")
        );
    }
}
