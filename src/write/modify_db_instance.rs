use crate::command::Command;
use crate::common::{self, select::Select};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// modify DB instance operation
#[derive(Clone, Debug, Default, PartialEq)]
struct ModifyDbInstanceInput {
    db_instance_identifier: String,
    new_db_instance_identifier: Option<String>,
    db_instance_class: Option<String>,
    engine_version: Option<String>,
    allow_major_version_upgrade: Option<bool>,
    allocated_storage: Option<i32>,
    storage_type: Option<String>,
    iops: Option<i32>,
    master_user_password: Option<String>,
    db_parameter_group_name: Option<String>,
    vpc_security_group_ids: Option<Vec<String>>,
    multi_az: Option<bool>,
    publicly_accessible: Option<bool>,
    backup_retention_period: Option<i32>,
    preferred_backup_window: Option<String>,
    preferred_maintenance_window: Option<String>,
    auto_minor_version_upgrade: Option<bool>,
    deletion_protection: Option<bool>,
    copy_tags_to_snapshot: Option<bool>,
    apply_immediately: Option<bool>,
}

/// Change the settings of a DB instance.
///
/// Changes wait for the next maintenance window unless `apply_immediately` is set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDbInstance {
    /// Identifier of the DB instance.
    #[arg(long)]
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
    /// Rename the instance.
    #[arg(long)]
    #[serde(rename = "NewDBInstanceIdentifier")]
    pub new_db_instance_identifier: Option<String>,
    /// New compute and memory class.
    #[arg(long)]
    #[serde(rename = "DBInstanceClass")]
    pub db_instance_class: Option<String>,
    /// Engine version to upgrade to.
    #[arg(long)]
    pub engine_version: Option<String>,
    /// Permit an engine version change across major versions.
    #[arg(long)]
    pub allow_major_version_upgrade: Option<bool>,
    /// New storage size in GiB.
    #[arg(long)]
    pub allocated_storage: Option<i32>,
    /// New storage type.
    #[arg(long)]
    pub storage_type: Option<String>,
    /// New provisioned IOPS.
    #[arg(long)]
    pub iops: Option<i32>,
    /// New master user password.
    #[arg(long, env = "RDS_MASTER_USER_PASSWORD", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub master_user_password: Option<String>,
    /// Parameter group to apply.
    #[arg(long)]
    #[serde(rename = "DBParameterGroupName")]
    pub db_parameter_group_name: Option<String>,
    /// Replacement list of VPC security groups.
    #[arg(long = "vpc-security-group-id")]
    pub vpc_security_group_ids: Vec<String>,
    /// Turn the Multi-AZ standby on or off.
    #[arg(long)]
    #[serde(rename = "MultiAZ")]
    pub multi_az: Option<bool>,
    /// Give the instance a public DNS name.
    #[arg(long)]
    pub publicly_accessible: Option<bool>,
    /// Days automated backups are retained.
    #[arg(long)]
    pub backup_retention_period: Option<i32>,
    /// Daily backup window (`hh24:mi-hh24:mi`, UTC).
    #[arg(long)]
    pub preferred_backup_window: Option<String>,
    /// Weekly maintenance window (`ddd:hh24:mi-ddd:hh24:mi`, UTC).
    #[arg(long)]
    pub preferred_maintenance_window: Option<String>,
    /// Apply minor engine upgrades automatically.
    #[arg(long)]
    pub auto_minor_version_upgrade: Option<bool>,
    /// Refuse deletion while enabled.
    #[arg(long)]
    pub deletion_protection: Option<bool>,
    /// Copy the instance tags to its snapshots.
    #[arg(long)]
    pub copy_tags_to_snapshot: Option<bool>,
    /// Apply now instead of in the next maintenance window.
    #[arg(long)]
    pub apply_immediately: bool,
}

impl From<ModifyDbInstance> for ModifyDbInstanceInput {
    fn from(modify: ModifyDbInstance) -> Self {
        Self {
            db_instance_identifier: modify.db_instance_identifier,
            new_db_instance_identifier: modify.new_db_instance_identifier,
            db_instance_class: modify.db_instance_class,
            engine_version: modify.engine_version,
            allow_major_version_upgrade: modify.allow_major_version_upgrade,
            allocated_storage: modify.allocated_storage,
            storage_type: modify.storage_type,
            iops: modify.iops,
            master_user_password: modify.master_user_password,
            db_parameter_group_name: modify.db_parameter_group_name,
            vpc_security_group_ids: common::non_empty(modify.vpc_security_group_ids),
            multi_az: modify.multi_az,
            publicly_accessible: modify.publicly_accessible,
            backup_retention_period: modify.backup_retention_period,
            preferred_backup_window: modify.preferred_backup_window,
            preferred_maintenance_window: modify.preferred_maintenance_window,
            auto_minor_version_upgrade: modify.auto_minor_version_upgrade,
            deletion_protection: modify.deletion_protection,
            copy_tags_to_snapshot: modify.copy_tags_to_snapshot,
            apply_immediately: modify.apply_immediately.then_some(true),
        }
    }
}

impl ModifyDbInstance {
    /// Execute the modify DB instance operation.
    #[tracing::instrument(
        name = "rds_commands.modify_db_instance",
        skip_all,
        fields(resource = %self.db_instance_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::modify_db_instance::ModifyDbInstanceOutput,
        error::SdkError<operation::modify_db_instance::ModifyDBInstanceError>,
    > {
        let modify: ModifyDbInstanceInput = self.into();
        client
            .modify_db_instance()
            .db_instance_identifier(modify.db_instance_identifier)
            .set_new_db_instance_identifier(modify.new_db_instance_identifier)
            .set_db_instance_class(modify.db_instance_class)
            .set_engine_version(modify.engine_version)
            .set_allow_major_version_upgrade(modify.allow_major_version_upgrade)
            .set_allocated_storage(modify.allocated_storage)
            .set_storage_type(modify.storage_type)
            .set_iops(modify.iops)
            .set_master_user_password(modify.master_user_password)
            .set_db_parameter_group_name(modify.db_parameter_group_name)
            .set_vpc_security_group_ids(modify.vpc_security_group_ids)
            .set_multi_az(modify.multi_az)
            .set_publicly_accessible(modify.publicly_accessible)
            .set_backup_retention_period(modify.backup_retention_period)
            .set_preferred_backup_window(modify.preferred_backup_window)
            .set_preferred_maintenance_window(modify.preferred_maintenance_window)
            .set_auto_minor_version_upgrade(modify.auto_minor_version_upgrade)
            .set_deletion_protection(modify.deletion_protection)
            .set_copy_tags_to_snapshot(modify.copy_tags_to_snapshot)
            .set_apply_immediately(modify.apply_immediately)
            .send()
            .await
    }
}

impl Command for ModifyDbInstance {
    const OPERATION: &'static str = "ModifyDBInstance";

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
        ModifyDbInstance {
            db_instance_identifier: "a".to_string(),
            ..Default::default()
        },
        ModifyDbInstanceInput {
            db_instance_identifier: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::resize_now(
        ModifyDbInstance {
            db_instance_identifier: "a".to_string(),
            db_instance_class: Some("db.r6g.xlarge".to_string()),
            allocated_storage: Some(200),
            vpc_security_group_ids: vec!["sg-1".to_string()],
            multi_az: Some(true),
            apply_immediately: true,
            ..Default::default()
        },
        ModifyDbInstanceInput {
            db_instance_identifier: "a".to_string(),
            db_instance_class: Some("db.r6g.xlarge".to_string()),
            allocated_storage: Some(200),
            vpc_security_group_ids: Some(vec!["sg-1".to_string()]),
            multi_az: Some(true),
            apply_immediately: Some(true),
            ..Default::default()
        }
    )]
    #[case::rename(
        ModifyDbInstance {
            db_instance_identifier: "a".to_string(),
            new_db_instance_identifier: Some("b".to_string()),
            master_user_password: Some("c".to_string()),
            deletion_protection: Some(false),
            ..Default::default()
        },
        ModifyDbInstanceInput {
            db_instance_identifier: "a".to_string(),
            new_db_instance_identifier: Some("b".to_string()),
            master_user_password: Some("c".to_string()),
            deletion_protection: Some(false),
            ..Default::default()
        }
    )]
    fn test_modify_db_instance(#[case] args: ModifyDbInstance, #[case] expected: ModifyDbInstanceInput) {
        let actual: ModifyDbInstanceInput = args.into();
        assert_eq!(actual, expected);
    }
}
