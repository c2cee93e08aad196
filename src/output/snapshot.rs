use crate::output;

use aws_sdk_rds::types;
use serde_json::{Value, json};

/// A DB snapshot.
pub fn db_snapshot(snapshot: &types::DbSnapshot) -> Value {
    json!({
        "DBSnapshotIdentifier": snapshot.db_snapshot_identifier,
        "DBSnapshotArn": snapshot.db_snapshot_arn,
        "DBInstanceIdentifier": snapshot.db_instance_identifier,
        "SnapshotType": snapshot.snapshot_type,
        "Status": snapshot.status,
        "PercentProgress": snapshot.percent_progress,
        "Engine": snapshot.engine,
        "EngineVersion": snapshot.engine_version,
        "AllocatedStorage": snapshot.allocated_storage,
        "StorageType": snapshot.storage_type,
        "Encrypted": snapshot.encrypted,
        "KmsKeyId": snapshot.kms_key_id,
        "Port": snapshot.port,
        "AvailabilityZone": snapshot.availability_zone,
        "VpcId": snapshot.vpc_id,
        "MasterUsername": snapshot.master_username,
        "SourceRegion": snapshot.source_region,
        "InstanceCreateTime": output::timestamp(snapshot.instance_create_time.as_ref()),
        "SnapshotCreateTime": output::timestamp(snapshot.snapshot_create_time.as_ref()),
        "TagList": output::tags(snapshot.tag_list()),
    })
}

/// A DB cluster snapshot.
pub fn db_cluster_snapshot(snapshot: &types::DbClusterSnapshot) -> Value {
    json!({
        "DBClusterSnapshotIdentifier": snapshot.db_cluster_snapshot_identifier,
        "DBClusterSnapshotArn": snapshot.db_cluster_snapshot_arn,
        "DBClusterIdentifier": snapshot.db_cluster_identifier,
        "SnapshotType": snapshot.snapshot_type,
        "Status": snapshot.status,
        "PercentProgress": snapshot.percent_progress,
        "Engine": snapshot.engine,
        "EngineVersion": snapshot.engine_version,
        "AllocatedStorage": snapshot.allocated_storage,
        "StorageEncrypted": snapshot.storage_encrypted,
        "KmsKeyId": snapshot.kms_key_id,
        "Port": snapshot.port,
        "VpcId": snapshot.vpc_id,
        "MasterUsername": snapshot.master_username,
        "AvailabilityZones": snapshot.availability_zones(),
        "ClusterCreateTime": output::timestamp(snapshot.cluster_create_time.as_ref()),
        "SnapshotCreateTime": output::timestamp(snapshot.snapshot_create_time.as_ref()),
        "TagList": output::tags(snapshot.tag_list()),
    })
}
