//! Deployment record storage

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::{
    errors::{DeployError, DeployResult},
    types::DeploymentRecord,
};

pub fn deployment_file_name(record: &DeploymentRecord) -> String {
    format!(
        "{}_{}_{}.json",
        record.network,
        record.chain_id,
        record.timestamp.format("%Y%m%dT%H%M%S")
    )
}

/// Writes `record` as pretty JSON under `dir` and returns the file path.
pub fn save_deployment(record: &DeploymentRecord, dir: &Path) -> DeployResult<PathBuf> {
    let path = dir.join(deployment_file_name(record));
    let storage_err = |source: anyhow::Error| DeployError::Storage {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(|e| storage_err(e.into()))?;
    let json = serde_json::to_string_pretty(record).map_err(|e| storage_err(e.into()))?;
    fs::write(&path, json).map_err(|e| storage_err(e.into()))?;

    info!(
        deployment_id = %record.id,
        pool = %record.pool.address,
        bot = %record.bot.address,
        path = %path.display(),
        "Saved deployment record"
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::sample_record;
    use chrono::TimeZone;

    #[test]
    fn file_name_includes_network_chain_and_time() {
        let mut record = sample_record();
        record.timestamp = chrono::Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 5).unwrap();

        assert_eq!(deployment_file_name(&record), "localhost_31337_20261016T093005.json");
    }

    #[test]
    fn writes_readable_json() {
        let dir = std::env::temp_dir()
            .join(format!("deployer-storage-{}", uuid::Uuid::new_v4()))
            .join("deployments");
        let record = sample_record();

        let path = tokio_test::assert_ok!(save_deployment(&record, &dir));

        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["id"], record.id.as_str());
        assert_eq!(saved["bot"]["kind"], "FlashloanArb");
        assert_eq!(saved["bot"]["gas_used"], 900_000);
    }

    #[test]
    fn unwritable_directory_is_a_storage_error() {
        let blocker = std::env::temp_dir().join(format!("deployer-blocker-{}", uuid::Uuid::new_v4()));
        fs::write(&blocker, "not a directory").unwrap();

        let result = save_deployment(&sample_record(), &blocker.join("deployments"));
        let err = tokio_test::assert_err!(result);
        assert!(matches!(err, DeployError::Storage { .. }));
    }
}
