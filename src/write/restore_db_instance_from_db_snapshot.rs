use crate::command::Command;
use crate::common::{self, select::Select, tag};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// restore DB instance from DB snapshot operation
#[derive(Clone, Debug, Default, PartialEq)]
struct RestoreDbInstanceFromDbSnapshotInput {
    db_instance_identifier: String,
    db_snapshot_identifier: String,
    db_instance_class: Option<String>,
    engine: Option<String>,
    storage_type: Option<String>,
    iops: Option<i32>,
    port: Option<i32>,
    availability_zone: Option<String>,
    db_subnet_group_name: Option<String>,
    db_parameter_group_name: Option<String>,
    vpc_security_group_ids: Option<Vec<String>>,
    multi_az: Option<bool>,
    publicly_accessible: Option<bool>,
    auto_minor_version_upgrade: Option<bool>,
    deletion_protection: Option<bool>,
    copy_tags_to_snapshot: Option<bool>,
    tags: Option<Vec<types::Tag>>,
}

/// Create a new DB instance from a DB snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDbInstanceFromDbSnapshot {
    /// Identifier of the new DB instance.
    #[arg(long)]
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
    /// Identifier or ARN of the snapshot to restore.
    #[arg(long)]
    #[serde(rename = "DBSnapshotIdentifier")]
    pub db_snapshot_identifier: String,
    /// Compute and memory class; the snapshot's class when omitted.
    #[arg(long)]
    #[serde(rename = "DBInstanceClass")]
    pub db_instance_class: Option<String>,
    /// Engine of the new instance.
    #[arg(long)]
    pub engine: Option<String>,
    /// Storage type of the new instance.
    #[arg(long)]
    pub storage_type: Option<String>,
    /// Provisioned IOPS.
    #[arg(long)]
    pub iops: Option<i32>,
    /// Port the database listens on.
    #[arg(long)]
    pub port: Option<i32>,
    /// Availability zone of a Single-AZ instance.
    #[arg(long)]
    pub availability_zone: Option<String>,
    /// Subnet group the instance is placed in.
    #[arg(long)]
    #[serde(rename = "DBSubnetGroupName")]
    pub db_subnet_group_name: Option<String>,
    /// Parameter group applied to the instance.
    #[arg(long)]
    #[serde(rename = "DBParameterGroupName")]
    pub db_parameter_group_name: Option<String>,
    /// VPC security groups attached to the instance.
    #[arg(long = "vpc-security-group-id")]
    pub vpc_security_group_ids: Vec<String>,
    /// Deploy a standby in a second availability zone.
    #[arg(long)]
    #[serde(rename = "MultiAZ")]
    pub multi_az: Option<bool>,
    /// Give the instance a public DNS name.
    #[arg(long)]
    pub publicly_accessible: Option<bool>,
    /// Apply minor engine upgrades automatically.
    #[arg(long)]
    pub auto_minor_version_upgrade: Option<bool>,
    /// Refuse deletion while enabled.
    #[arg(long)]
    pub deletion_protection: Option<bool>,
    /// Copy the instance tags to its snapshots.
    #[arg(long)]
    pub copy_tags_to_snapshot: Option<bool>,
    /// Tags to attach (`Key=Value`).
    #[arg(long = "tag", value_name = "KEY=VALUE")]
    pub tags: Vec<tag::Tag>,
}

impl From<RestoreDbInstanceFromDbSnapshot> for RestoreDbInstanceFromDbSnapshotInput {
    fn from(restore: RestoreDbInstanceFromDbSnapshot) -> Self {
        Self {
            db_instance_identifier: restore.db_instance_identifier,
            db_snapshot_identifier: restore.db_snapshot_identifier,
            db_instance_class: restore.db_instance_class,
            engine: restore.engine,
            storage_type: restore.storage_type,
            iops: restore.iops,
            port: restore.port,
            availability_zone: restore.availability_zone,
            db_subnet_group_name: restore.db_subnet_group_name,
            db_parameter_group_name: restore.db_parameter_group_name,
            vpc_security_group_ids: common::non_empty(restore.vpc_security_group_ids),
            multi_az: restore.multi_az,
            publicly_accessible: restore.publicly_accessible,
            auto_minor_version_upgrade: restore.auto_minor_version_upgrade,
            deletion_protection: restore.deletion_protection,
            copy_tags_to_snapshot: restore.copy_tags_to_snapshot,
            tags: tag::into_sdk_tags(restore.tags),
        }
    }
}

impl RestoreDbInstanceFromDbSnapshot {
    /// Execute the restore DB instance from DB snapshot operation.
    #[tracing::instrument(
        name = "rds_commands.restore_db_instance_from_db_snapshot",
        skip_all,
        fields(resource = %self.db_instance_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::restore_db_instance_from_db_snapshot::RestoreDbInstanceFromDbSnapshotOutput,
        error::SdkError<
            operation::restore_db_instance_from_db_snapshot::RestoreDBInstanceFromDBSnapshotError,
        >,
    > {
        let restore: RestoreDbInstanceFromDbSnapshotInput = self.into();
        client
            .restore_db_instance_from_db_snapshot()
            .db_instance_identifier(restore.db_instance_identifier)
            .db_snapshot_identifier(restore.db_snapshot_identifier)
            .set_db_instance_class(restore.db_instance_class)
            .set_engine(restore.engine)
            .set_storage_type(restore.storage_type)
            .set_iops(restore.iops)
            .set_port(restore.port)
            .set_availability_zone(restore.availability_zone)
            .set_db_subnet_group_name(restore.db_subnet_group_name)
            .set_db_parameter_group_name(restore.db_parameter_group_name)
            .set_vpc_security_group_ids(restore.vpc_security_group_ids)
            .set_multi_az(restore.multi_az)
            .set_publicly_accessible(restore.publicly_accessible)
            .set_auto_minor_version_upgrade(restore.auto_minor_version_upgrade)
            .set_deletion_protection(restore.deletion_protection)
            .set_copy_tags_to_snapshot(restore.copy_tags_to_snapshot)
            .set_tags(restore.tags)
            .send()
            .await
    }
}

impl Command for RestoreDbInstanceFromDbSnapshot {
    const OPERATION: &'static str = "RestoreDBInstanceFromDBSnapshot";

    fn default_select() -> Select {
        Select::Field("DBInstance".to_string())
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.db_instance_identifier.clone())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBInstance": response.db_instance().map(output::instance::db_instance),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::required(
        RestoreDbInstanceFromDbSnapshot {
            db_instance_identifier: "a".to_string(),
            db_snapshot_identifier: "b".to_string(),
            ..Default::default()
        },
        RestoreDbInstanceFromDbSnapshotInput {
            db_instance_identifier: "a".to_string(),
            db_snapshot_identifier: "b".to_string(),
            ..Default::default()
        }
    )]
    #[case::placed(
        RestoreDbInstanceFromDbSnapshot {
            db_instance_identifier: "a".to_string(),
            db_snapshot_identifier: "b".to_string(),
            db_instance_class: Some("db.t3.small".to_string()),
            db_subnet_group_name: Some("c".to_string()),
            vpc_security_group_ids: vec!["sg-1".to_string()],
            multi_az: Some(false),
            tags: vec![
                tag::Tag {
                    key: "restored".to_string(),
                    value: None,
                },
            ],
            ..Default::default()
        },
        RestoreDbInstanceFromDbSnapshotInput {
            db_instance_identifier: "a".to_string(),
            db_snapshot_identifier: "b".to_string(),
            db_instance_class: Some("db.t3.small".to_string()),
            db_subnet_group_name: Some("c".to_string()),
            vpc_security_group_ids: Some(vec!["sg-1".to_string()]),
            multi_az: Some(false),
            tags: Some(vec![types::Tag::builder().key("restored").build()]),
            ..Default::default()
        }
    )]
    fn test_restore_db_instance_from_db_snapshot(
        #[case] args: RestoreDbInstanceFromDbSnapshot,
        #[case] expected: RestoreDbInstanceFromDbSnapshotInput,
    ) {
        let actual: RestoreDbInstanceFromDbSnapshotInput = args.into();
        assert_eq!(actual, expected);
    }
}
