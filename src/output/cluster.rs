use crate::output;

use aws_sdk_rds::types;
use serde_json::{Value, json};

fn db_cluster_member(member: &types::DbClusterMember) -> Value {
    json!({
        "DBInstanceIdentifier": member.db_instance_identifier,
        "IsClusterWriter": member.is_cluster_writer,
        "DBClusterParameterGroupStatus": member.db_cluster_parameter_group_status,
        "PromotionTier": member.promotion_tier,
    })
}

/// A DB cluster.
pub fn db_cluster(cluster: &types::DbCluster) -> Value {
    json!({
        "DBClusterIdentifier": cluster.db_cluster_identifier,
        "DBClusterArn": cluster.db_cluster_arn,
        "Status": cluster.status,
        "Engine": cluster.engine,
        "EngineVersion": cluster.engine_version,
        "EngineMode": cluster.engine_mode,
        "DatabaseName": cluster.database_name,
        "MasterUsername": cluster.master_username,
        "Endpoint": cluster.endpoint,
        "ReaderEndpoint": cluster.reader_endpoint,
        "Port": cluster.port,
        "MultiAZ": cluster.multi_az,
        "AllocatedStorage": cluster.allocated_storage,
        "StorageEncrypted": cluster.storage_encrypted,
        "KmsKeyId": cluster.kms_key_id,
        "DeletionProtection": cluster.deletion_protection,
        "BackupRetentionPeriod": cluster.backup_retention_period,
        "PreferredBackupWindow": cluster.preferred_backup_window,
        "PreferredMaintenanceWindow": cluster.preferred_maintenance_window,
        "ClusterCreateTime": output::timestamp(cluster.cluster_create_time.as_ref()),
        "AvailabilityZones": cluster.availability_zones(),
        "DBSubnetGroup": cluster.db_subnet_group,
        "DBClusterParameterGroup": cluster.db_cluster_parameter_group,
        "DBClusterMembers": cluster
            .db_cluster_members()
            .iter()
            .map(db_cluster_member)
            .collect::<Vec<_>>(),
        "TagList": output::tags(cluster.tag_list()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_cluster() {
        let cluster = types::DbCluster::builder()
            .db_cluster_identifier("cluster-1")
            .engine("aurora-postgresql")
            .status("available")
            .endpoint("cluster-1.cluster-abc.us-east-1.rds.amazonaws.com")
            .availability_zones("us-east-1a")
            .availability_zones("us-east-1b")
            .db_subnet_group("private")
            .db_cluster_members(
                types::DbClusterMember::builder()
                    .db_instance_identifier("cluster-1-a")
                    .is_cluster_writer(true)
                    .promotion_tier(1)
                    .build(),
            )
            .build();
        let actual = db_cluster(&cluster);
        assert_eq!(actual["DBClusterIdentifier"], "cluster-1");
        assert_eq!(actual["Engine"], "aurora-postgresql");
        assert_eq!(
            actual["Endpoint"],
            "cluster-1.cluster-abc.us-east-1.rds.amazonaws.com"
        );
        assert_eq!(actual["AvailabilityZones"], json!(["us-east-1a", "us-east-1b"]));
        assert_eq!(actual["DBSubnetGroup"], "private");
        assert_eq!(
            actual["DBClusterMembers"],
            json!([{
                "DBInstanceIdentifier": "cluster-1-a",
                "IsClusterWriter": true,
                "DBClusterParameterGroupStatus": null,
                "PromotionTier": 1,
            }])
        );
        assert_eq!(actual["TagList"], json!([]));
    }
}
