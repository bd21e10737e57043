//! Contract kinds known to the deployer

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContractKind {
    MockToken,
    MockPool,
    FlashloanArb,
}

impl ContractKind {
    /// Name of the Solidity contract and of its Hardhat artifact.
    pub fn artifact_name(&self) -> &'static str {
        match self {
            ContractKind::MockToken => "MockToken",
            ContractKind::MockPool => "MockPool",
            ContractKind::FlashloanArb => "FlashloanArb",
        }
    }

    /// Number of constructor arguments the deployer passes.
    ///
    /// MockToken(name, symbol), MockPool(token0, token1),
    /// FlashloanArb(flashLoanProvider, swapPool)
    pub fn constructor_arity(&self) -> usize {
        match self {
            ContractKind::MockToken | ContractKind::MockPool | ContractKind::FlashloanArb => 2,
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.artifact_name())
    }
}
