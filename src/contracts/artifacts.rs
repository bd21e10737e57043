//! Hardhat artifact loading and init code assembly

use alloy::{json_abi::JsonAbi, primitives::{hex, Bytes}};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::{
    errors::{DeployError, DeployResult},
    types::ContractKind,
};

/// Artifact JSON as Hardhat writes it. The bytecode stays a string since
/// unlinked library slots are `__$<hash>$__` placeholders, not hex.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: String,
    abi: JsonAbi,
    bytecode: String,
    #[serde(default)]
    link_references: serde_json::Map<String, serde_json::Value>,
}

/// A linked, deployable contract.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn constructor_arity(&self) -> usize {
        self.abi.constructor.as_ref().map_or(0, |c| c.inputs.len())
    }

    /// Creation bytecode followed by the ABI-encoded constructor arguments.
    pub fn init_code(&self, encoded_args: &[u8]) -> Bytes {
        let mut code = Vec::with_capacity(self.bytecode.len() + encoded_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(encoded_args);
        code.into()
    }
}

/// `<root>/<Name>.sol/<Name>.json`, Hardhat's default layout.
pub fn artifact_path(root: &Path, contract: &str) -> PathBuf {
    root.join(format!("{contract}.sol")).join(format!("{contract}.json"))
}

pub fn load_artifact(root: &Path, kind: ContractKind) -> DeployResult<ContractArtifact> {
    let contract = kind.artifact_name();
    let path = artifact_path(root, contract);
    let fail = |message: String| DeployError::Artifact {
        contract: contract.to_string(),
        path: path.clone(),
        message,
    };

    let raw = std::fs::read_to_string(&path)
        .map_err(|e| fail(format!("cannot read file: {e} (run `npx hardhat compile`?)")))?;
    let raw: RawArtifact = serde_json::from_str(&raw)
        .map_err(|e| fail(format!("malformed artifact JSON: {e}")))?;

    if raw.contract_name != contract {
        return Err(fail(format!("artifact is for {}", raw.contract_name)));
    }
    if !raw.link_references.is_empty() {
        let libraries: Vec<&str> = raw.link_references.keys().map(String::as_str).collect();
        return Err(fail(format!("requires unlinked libraries: {}", libraries.join(", "))));
    }
    let bytecode = hex::decode(raw.bytecode.trim())
        .map_err(|e| fail(format!("bytecode is not valid hex: {e}")))?;
    if bytecode.is_empty() {
        return Err(fail("bytecode is empty (abstract contract or interface?)".to_string()));
    }

    let artifact = ContractArtifact {
        contract_name: raw.contract_name,
        abi: raw.abi,
        bytecode: bytecode.into(),
    };
    if artifact.constructor_arity() != kind.constructor_arity() {
        return Err(fail(format!(
            "constructor takes {} arguments, deployer passes {}",
            artifact.constructor_arity(),
            kind.constructor_arity()
        )));
    }

    debug!(contract, path = %path.display(), size = artifact.bytecode.len(), "Loaded artifact");
    Ok(artifact)
}

/// Loads the artifacts of every contract the deployment touches.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub mock_token: ContractArtifact,
    pub mock_pool: ContractArtifact,
    pub flashloan_arb: ContractArtifact,
}

impl ArtifactSet {
    pub fn load(root: &Path) -> DeployResult<Self> {
        Ok(Self {
            mock_token: load_artifact(root, ContractKind::MockToken)?,
            mock_pool: load_artifact(root, ContractKind::MockPool)?,
            flashloan_arb: load_artifact(root, ContractKind::FlashloanArb)?,
        })
    }

    pub fn get(&self, kind: ContractKind) -> &ContractArtifact {
        match kind {
            ContractKind::MockToken => &self.mock_token,
            ContractKind::MockPool => &self.mock_pool,
            ContractKind::FlashloanArb => &self.flashloan_arb,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use serde_json::json;

    /// Init code returning a one-byte runtime (`STOP`), constructor args ignored.
    pub const STOP_CONTRACT_BYTECODE: &str = "0x6001600c60003960016000f300";

    pub fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("deployer-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn constructor_abi(inputs: &[(&str, &str)]) -> serde_json::Value {
        let inputs: Vec<_> = inputs
            .iter()
            .map(|(name, ty)| json!({ "name": name, "type": ty, "internalType": ty }))
            .collect();
        json!([{ "type": "constructor", "stateMutability": "nonpayable", "inputs": inputs }])
    }

    pub fn write_artifact(root: &Path, name: &str, abi: serde_json::Value, bytecode: &str) -> PathBuf {
        let path = artifact_path(root, name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let artifact = json!({
            "_format": "hh-sol-artifact-1",
            "contractName": name,
            "sourceName": format!("contracts/{name}.sol"),
            "abi": abi,
            "bytecode": bytecode,
            "deployedBytecode": "0x00",
            "linkReferences": {},
            "deployedLinkReferences": {}
        });
        std::fs::write(&path, serde_json::to_string_pretty(&artifact).unwrap()).unwrap();
        path
    }

    /// Writes artifacts for all three contracts with the expected constructors.
    pub fn write_fixture_set(root: &Path) {
        write_artifact(root, "MockToken", constructor_abi(&[("name", "string"), ("symbol", "string")]), STOP_CONTRACT_BYTECODE);
        write_artifact(root, "MockPool", constructor_abi(&[("_token0", "address"), ("_token1", "address")]), STOP_CONTRACT_BYTECODE);
        write_artifact(root, "FlashloanArb", constructor_abi(&[("_lender", "address"), ("_pool", "address")]), STOP_CONTRACT_BYTECODE);
    }
}
