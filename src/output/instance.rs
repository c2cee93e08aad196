use crate::output;

use aws_sdk_rds::types;
use serde_json::{Value, json};

fn endpoint(endpoint: &types::Endpoint) -> Value {
    json!({
        "Address": endpoint.address,
        "Port": endpoint.port,
        "HostedZoneId": endpoint.hosted_zone_id,
    })
}

/// A DB instance.
pub fn db_instance(instance: &types::DbInstance) -> Value {
    json!({
        "DBInstanceIdentifier": instance.db_instance_identifier,
        "DBInstanceArn": instance.db_instance_arn,
        "DbiResourceId": instance.dbi_resource_id,
        "DBInstanceClass": instance.db_instance_class,
        "DBInstanceStatus": instance.db_instance_status,
        "Engine": instance.engine,
        "EngineVersion": instance.engine_version,
        "DBName": instance.db_name,
        "MasterUsername": instance.master_username,
        "Endpoint": instance.endpoint.as_ref().map(endpoint),
        "AllocatedStorage": instance.allocated_storage,
        "StorageType": instance.storage_type,
        "Iops": instance.iops,
        "StorageEncrypted": instance.storage_encrypted,
        "KmsKeyId": instance.kms_key_id,
        "AvailabilityZone": instance.availability_zone,
        "MultiAZ": instance.multi_az,
        "PubliclyAccessible": instance.publicly_accessible,
        "AutoMinorVersionUpgrade": instance.auto_minor_version_upgrade,
        "DeletionProtection": instance.deletion_protection,
        "CopyTagsToSnapshot": instance.copy_tags_to_snapshot,
        "BackupRetentionPeriod": instance.backup_retention_period,
        "PreferredBackupWindow": instance.preferred_backup_window,
        "PreferredMaintenanceWindow": instance.preferred_maintenance_window,
        "InstanceCreateTime": output::timestamp(instance.instance_create_time.as_ref()),
        "LatestRestorableTime": output::timestamp(instance.latest_restorable_time.as_ref()),
        "DBClusterIdentifier": instance.db_cluster_identifier,
        "DBSubnetGroup": instance
            .db_subnet_group
            .as_ref()
            .map(output::subnet_group::db_subnet_group),
        "VpcSecurityGroups": instance
            .vpc_security_groups()
            .iter()
            .map(|group| json!({
                "VpcSecurityGroupId": group.vpc_security_group_id,
                "Status": group.status,
            }))
            .collect::<Vec<_>>(),
        "DBParameterGroups": instance
            .db_parameter_groups()
            .iter()
            .map(|group| json!({
                "DBParameterGroupName": group.db_parameter_group_name,
                "ParameterApplyStatus": group.parameter_apply_status,
            }))
            .collect::<Vec<_>>(),
        "TagList": output::tags(instance.tag_list()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_rds::primitives::DateTime;

    #[test]
    fn test_db_instance() {
        let instance = types::DbInstance::builder()
            .db_instance_identifier("db-1")
            .db_instance_class("db.t3.micro")
            .engine("postgres")
            .db_instance_status("available")
            .endpoint(
                types::Endpoint::builder()
                    .address("db-1.abc.us-east-1.rds.amazonaws.com")
                    .port(5432)
                    .build(),
            )
            .multi_az(true)
            .instance_create_time(DateTime::from_secs(0))
            .db_subnet_group(
                types::DbSubnetGroup::builder()
                    .db_subnet_group_name("private")
                    .vpc_id("vpc-1")
                    .subnet_group_status("Complete")
                    .build(),
            )
            .vpc_security_groups(
                types::VpcSecurityGroupMembership::builder()
                    .vpc_security_group_id("sg-1")
                    .status("active")
                    .build(),
            )
            .tag_list(types::Tag::builder().key("team").value("storage").build())
            .build();
        let actual = db_instance(&instance);
        assert_eq!(actual["DBInstanceIdentifier"], "db-1");
        assert_eq!(actual["DBInstanceClass"], "db.t3.micro");
        assert_eq!(actual["DBInstanceStatus"], "available");
        assert_eq!(
            actual["Endpoint"],
            json!({
                "Address": "db-1.abc.us-east-1.rds.amazonaws.com",
                "Port": 5432,
                "HostedZoneId": null,
            })
        );
        assert_eq!(actual["MultiAZ"], true);
        assert_eq!(actual["InstanceCreateTime"], "1970-01-01T00:00:00Z");
        assert_eq!(
            actual["DBSubnetGroup"],
            json!({
                "DBSubnetGroupName": "private",
                "DBSubnetGroupDescription": null,
                "DBSubnetGroupArn": null,
                "VpcId": "vpc-1",
                "SubnetGroupStatus": "Complete",
                "Subnets": [],
            })
        );
        assert_eq!(
            actual["VpcSecurityGroups"],
            json!([{"VpcSecurityGroupId": "sg-1", "Status": "active"}])
        );
        assert_eq!(actual["TagList"], json!([{"Key": "team", "Value": "storage"}]));
        assert_eq!(actual["DBClusterIdentifier"], Value::Null);
    }

    #[test]
    fn test_db_instance_empty() {
        let actual = db_instance(&types::DbInstance::builder().build());
        assert_eq!(actual["DBInstanceIdentifier"], Value::Null);
        assert_eq!(actual["Endpoint"], Value::Null);
        assert_eq!(actual["DBSubnetGroup"], Value::Null);
        assert_eq!(actual["VpcSecurityGroups"], json!([]));
        assert_eq!(actual["TagList"], json!([]));
    }
}
