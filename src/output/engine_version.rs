use aws_sdk_rds::types;
use serde_json::{Value, json};

fn upgrade_target(target: &types::UpgradeTarget) -> Value {
    json!({
        "Engine": target.engine,
        "EngineVersion": target.engine_version,
        "IsMajorVersionUpgrade": target.is_major_version_upgrade,
        "AutoUpgrade": target.auto_upgrade,
    })
}

/// An engine version.
pub fn db_engine_version(version: &types::DbEngineVersion) -> Value {
    json!({
        "Engine": version.engine,
        "EngineVersion": version.engine_version,
        "DBParameterGroupFamily": version.db_parameter_group_family,
        "DBEngineDescription": version.db_engine_description,
        "DBEngineVersionDescription": version.db_engine_version_description,
        "Status": version.status,
        "SupportsReadReplica": version.supports_read_replica,
        "ValidUpgradeTarget": version
            .valid_upgrade_target()
            .iter()
            .map(upgrade_target)
            .collect::<Vec<_>>(),
    })
}
