//! Display and printing utilities

use tracing::info;
use crate::{
    types::{DeployedContract, DeploymentRecord},
    utils::from_base_units,
};

pub fn summary_line(contract: &DeployedContract) -> String {
    format!(
        "{:<14} {}  (gas {}, block {})",
        format!("{}:", contract.label),
        contract.address,
        contract.gas_used,
        contract
            .block_number
            .map(|b| b.to_string())
            .unwrap_or_else(|| "pending".to_string())
    )
}

pub fn print_deployment_summary(record: &DeploymentRecord, token_decimals: u8) {
    info!("");
    info!("Deployment summary #{}", record.id);
    info!("   Network:  {} (chain {})", record.network, record.chain_id);
    info!("   Deployer: {}", record.deployer);
    for contract in record.contracts() {
        info!("   {}", summary_line(contract));
    }
    for funding in &record.funding {
        info!(
            "   Funded {} with {} {}",
            funding.recipient,
            from_base_units(funding.amount, token_decimals),
            funding.token_label
        );
    }
    info!("   Total gas used: {}", record.total_gas_used());
    info!("");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::sample_record;

    #[test]
    fn summary_line_shows_label_address_and_gas() {
        let record = sample_record();
        let line = summary_line(&record.pool);

        assert!(line.starts_with("MockPool:"));
        assert!(line.to_lowercase().contains("0x9fe46736679d2d9a65f0992f2272de9f3c7fa6e0"));
        assert!(line.contains("gas 400000"));
        assert!(line.contains("block 1"));
    }

    #[test]
    fn unmined_block_is_shown_as_pending() {
        let mut record = sample_record();
        record.bot.block_number = None;

        assert!(summary_line(&record.bot).contains("block pending"));
    }
}
