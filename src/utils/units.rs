//! Token amount conversions

use alloy::primitives::{
    utils::{format_units, parse_units},
    U256,
};
use rust_decimal::Decimal;
use crate::errors::{DeployError, DeployResult};

/// Converts a whole-token amount to base units, e.g. `10000000` at 18
/// decimals becomes `10000000 * 10^18`.
pub fn to_base_units(amount: Decimal, decimals: u8) -> DeployResult<U256> {
    if amount.is_sign_negative() {
        return Err(DeployError::Encoding {
            context: format!("token amount {amount}"),
            source: anyhow::anyhow!("amount is negative"),
        });
    }

    let parsed = parse_units(&amount.normalize().to_string(), decimals).map_err(|e| {
        DeployError::Encoding {
            context: format!("token amount {amount} with {decimals} decimals"),
            source: anyhow::Error::new(e),
        }
    })?;
    Ok(parsed.get_absolute())
}

/// Base units back to a human readable amount.
pub fn from_base_units(amount: U256, decimals: u8) -> String {
    format_units(amount, decimals).unwrap_or_else(|_| amount.to_string())
}
