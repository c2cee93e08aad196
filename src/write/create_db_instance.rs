use crate::command::Command;
use crate::common::{self, select::Select, tag};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// create DB instance operation
#[derive(Clone, Debug, Default, PartialEq)]
struct CreateDbInstanceInput {
    db_instance_identifier: String,
    db_instance_class: String,
    engine: String,
    engine_version: Option<String>,
    db_name: Option<String>,
    master_username: Option<String>,
    master_user_password: Option<String>,
    manage_master_user_password: Option<bool>,
    allocated_storage: Option<i32>,
    storage_type: Option<String>,
    iops: Option<i32>,
    storage_encrypted: Option<bool>,
    kms_key_id: Option<String>,
    db_cluster_identifier: Option<String>,
    db_subnet_group_name: Option<String>,
    db_parameter_group_name: Option<String>,
    vpc_security_group_ids: Option<Vec<String>>,
    availability_zone: Option<String>,
    multi_az: Option<bool>,
    publicly_accessible: Option<bool>,
    port: Option<i32>,
    backup_retention_period: Option<i32>,
    preferred_backup_window: Option<String>,
    preferred_maintenance_window: Option<String>,
    auto_minor_version_upgrade: Option<bool>,
    deletion_protection: Option<bool>,
    copy_tags_to_snapshot: Option<bool>,
    license_model: Option<String>,
    tags: Option<Vec<types::Tag>>,
}

/// Create a DB instance.
///
/// ```rust,no_run
/// use aws_sdk_rds::Client;
/// use rds_commands::write;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let create = write::create_db_instance::CreateDbInstance {
///     db_instance_identifier: "orders-db".to_string(),
///     db_instance_class: "db.t3.micro".to_string(),
///     engine: "postgres".to_string(),
///     master_username: Some("orders".to_string()),
///     manage_master_user_password: Some(true),
///     allocated_storage: Some(20),
///     ..Default::default()
/// };
/// let output = create.send(client).await?;
/// println!("{:?}", output.db_instance().and_then(|instance| instance.db_instance_status()));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDbInstance {
    /// Identifier of the new DB instance.
    #[arg(long)]
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
    /// Compute and memory class, such as `db.t3.micro`.
    #[arg(long)]
    #[serde(rename = "DBInstanceClass")]
    pub db_instance_class: String,
    /// Database engine, such as `postgres` or `mysql`.
    #[arg(long)]
    pub engine: String,
    /// Engine version; the engine default when omitted.
    #[arg(long)]
    pub engine_version: Option<String>,
    /// Name of the database created with the instance.
    #[arg(long)]
    #[serde(rename = "DBName")]
    pub db_name: Option<String>,
    /// Name of the master user.
    #[arg(long)]
    pub master_username: Option<String>,
    /// Password of the master user.
    #[arg(long, env = "RDS_MASTER_USER_PASSWORD", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub master_user_password: Option<String>,
    /// Let RDS generate the master password and keep it in Secrets Manager.
    #[arg(long)]
    pub manage_master_user_password: Option<bool>,
    /// Storage in GiB.
    #[arg(long)]
    pub allocated_storage: Option<i32>,
    /// Storage type: `gp2`, `gp3`, `io1`, `io2` or `standard`.
    #[arg(long)]
    pub storage_type: Option<String>,
    /// Provisioned IOPS.
    #[arg(long)]
    pub iops: Option<i32>,
    /// Encrypt the storage.
    #[arg(long)]
    pub storage_encrypted: Option<bool>,
    /// KMS key used for storage encryption.
    #[arg(long)]
    pub kms_key_id: Option<String>,
    /// Aurora cluster the instance joins.
    #[arg(long)]
    #[serde(rename = "DBClusterIdentifier")]
    pub db_cluster_identifier: Option<String>,
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
    /// Availability zone of a Single-AZ instance.
    #[arg(long)]
    pub availability_zone: Option<String>,
    /// Deploy a standby in a second availability zone.
    #[arg(long)]
    #[serde(rename = "MultiAZ")]
    pub multi_az: Option<bool>,
    /// Give the instance a public DNS name.
    #[arg(long)]
    pub publicly_accessible: Option<bool>,
    /// Port the database listens on.
    #[arg(long)]
    pub port: Option<i32>,
    /// Days automated backups are retained; `0` disables them.
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
    /// License model, such as `license-included`.
    #[arg(long)]
    pub license_model: Option<String>,
    /// Tags to attach (`Key=Value`).
    #[arg(long = "tag", value_name = "KEY=VALUE")]
    pub tags: Vec<tag::Tag>,
}

impl From<CreateDbInstance> for CreateDbInstanceInput {
    fn from(create: CreateDbInstance) -> Self {
        Self {
            db_instance_identifier: create.db_instance_identifier,
            db_instance_class: create.db_instance_class,
            engine: create.engine,
            engine_version: create.engine_version,
            db_name: create.db_name,
            master_username: create.master_username,
            master_user_password: create.master_user_password,
            manage_master_user_password: create.manage_master_user_password,
            allocated_storage: create.allocated_storage,
            storage_type: create.storage_type,
            iops: create.iops,
            storage_encrypted: create.storage_encrypted,
            kms_key_id: create.kms_key_id,
            db_cluster_identifier: create.db_cluster_identifier,
            db_subnet_group_name: create.db_subnet_group_name,
            db_parameter_group_name: create.db_parameter_group_name,
            vpc_security_group_ids: common::non_empty(create.vpc_security_group_ids),
            availability_zone: create.availability_zone,
            multi_az: create.multi_az,
            publicly_accessible: create.publicly_accessible,
            port: create.port,
            backup_retention_period: create.backup_retention_period,
            preferred_backup_window: create.preferred_backup_window,
            preferred_maintenance_window: create.preferred_maintenance_window,
            auto_minor_version_upgrade: create.auto_minor_version_upgrade,
            deletion_protection: create.deletion_protection,
            copy_tags_to_snapshot: create.copy_tags_to_snapshot,
            license_model: create.license_model,
            tags: tag::into_sdk_tags(create.tags),
        }
    }
}

impl CreateDbInstance {
    /// Execute the create DB instance operation.
    #[tracing::instrument(
        name = "rds_commands.create_db_instance",
        skip_all,
        fields(resource = %self.db_instance_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::create_db_instance::CreateDbInstanceOutput,
        error::SdkError<operation::create_db_instance::CreateDBInstanceError>,
    > {
        let create: CreateDbInstanceInput = self.into();
        client
            .create_db_instance()
            .db_instance_identifier(create.db_instance_identifier)
            .db_instance_class(create.db_instance_class)
            .engine(create.engine)
            .set_engine_version(create.engine_version)
            .set_db_name(create.db_name)
            .set_master_username(create.master_username)
            .set_master_user_password(create.master_user_password)
            .set_manage_master_user_password(create.manage_master_user_password)
            .set_allocated_storage(create.allocated_storage)
            .set_storage_type(create.storage_type)
            .set_iops(create.iops)
            .set_storage_encrypted(create.storage_encrypted)
            .set_kms_key_id(create.kms_key_id)
            .set_db_cluster_identifier(create.db_cluster_identifier)
            .set_db_subnet_group_name(create.db_subnet_group_name)
            .set_db_parameter_group_name(create.db_parameter_group_name)
            .set_vpc_security_group_ids(create.vpc_security_group_ids)
            .set_availability_zone(create.availability_zone)
            .set_multi_az(create.multi_az)
            .set_publicly_accessible(create.publicly_accessible)
            .set_port(create.port)
            .set_backup_retention_period(create.backup_retention_period)
            .set_preferred_backup_window(create.preferred_backup_window)
            .set_preferred_maintenance_window(create.preferred_maintenance_window)
            .set_auto_minor_version_upgrade(create.auto_minor_version_upgrade)
            .set_deletion_protection(create.deletion_protection)
            .set_copy_tags_to_snapshot(create.copy_tags_to_snapshot)
            .set_license_model(create.license_model)
            .set_tags(create.tags)
            .send()
            .await
    }
}

impl Command for CreateDbInstance {
    const OPERATION: &'static str = "CreateDBInstance";

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
        CreateDbInstance {
            db_instance_identifier: "a".to_string(),
            db_instance_class: "db.t3.micro".to_string(),
            engine: "postgres".to_string(),
            ..Default::default()
        },
        CreateDbInstanceInput {
            db_instance_identifier: "a".to_string(),
            db_instance_class: "db.t3.micro".to_string(),
            engine: "postgres".to_string(),
            ..Default::default()
        }
    )]
    #[case::full(
        CreateDbInstance {
            db_instance_identifier: "a".to_string(),
            db_instance_class: "db.r6g.large".to_string(),
            engine: "postgres".to_string(),
            engine_version: Some("16.3".to_string()),
            db_name: Some("b".to_string()),
            master_username: Some("c".to_string()),
            master_user_password: Some("d".to_string()),
            manage_master_user_password: Some(false),
            allocated_storage: Some(100),
            storage_type: Some("gp3".to_string()),
            iops: Some(3000),
            storage_encrypted: Some(true),
            kms_key_id: Some("e".to_string()),
            db_cluster_identifier: None,
            db_subnet_group_name: Some("f".to_string()),
            db_parameter_group_name: Some("g".to_string()),
            vpc_security_group_ids: vec!["sg-1".to_string(), "sg-2".to_string()],
            availability_zone: None,
            multi_az: Some(true),
            publicly_accessible: Some(false),
            port: Some(5432),
            backup_retention_period: Some(7),
            preferred_backup_window: Some("03:00-04:00".to_string()),
            preferred_maintenance_window: Some("sun:05:00-sun:06:00".to_string()),
            auto_minor_version_upgrade: Some(true),
            deletion_protection: Some(true),
            copy_tags_to_snapshot: Some(true),
            license_model: None,
            tags: vec![
                tag::Tag {
                    key: "team".to_string(),
                    value: Some("storage".to_string()),
                },
            ],
        },
        CreateDbInstanceInput {
            db_instance_identifier: "a".to_string(),
            db_instance_class: "db.r6g.large".to_string(),
            engine: "postgres".to_string(),
            engine_version: Some("16.3".to_string()),
            db_name: Some("b".to_string()),
            master_username: Some("c".to_string()),
            master_user_password: Some("d".to_string()),
            manage_master_user_password: Some(false),
            allocated_storage: Some(100),
            storage_type: Some("gp3".to_string()),
            iops: Some(3000),
            storage_encrypted: Some(true),
            kms_key_id: Some("e".to_string()),
            db_cluster_identifier: None,
            db_subnet_group_name: Some("f".to_string()),
            db_parameter_group_name: Some("g".to_string()),
            vpc_security_group_ids: Some(vec!["sg-1".to_string(), "sg-2".to_string()]),
            availability_zone: None,
            multi_az: Some(true),
            publicly_accessible: Some(false),
            port: Some(5432),
            backup_retention_period: Some(7),
            preferred_backup_window: Some("03:00-04:00".to_string()),
            preferred_maintenance_window: Some("sun:05:00-sun:06:00".to_string()),
            auto_minor_version_upgrade: Some(true),
            deletion_protection: Some(true),
            copy_tags_to_snapshot: Some(true),
            license_model: None,
            tags: Some(
                vec![
                    types::Tag::builder()
                        .key("team")
                        .value("storage")
                        .build(),
                ]
            ),
        }
    )]
    fn test_create_db_instance(#[case] args: CreateDbInstance, #[case] expected: CreateDbInstanceInput) {
        let actual: CreateDbInstanceInput = args.into();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_password_is_not_echoed() {
        let args = CreateDbInstance {
            db_instance_identifier: "a".to_string(),
            master_user_password: Some("secret".to_string()),
            ..Default::default()
        };
        let actual = serde_json::to_value(&args).unwrap();
        assert_eq!(actual["DBInstanceIdentifier"], "a");
        assert!(actual.get("MasterUserPassword").is_none());
        assert_eq!(args.confirmation_target().as_deref(), Some("a"));
    }
}
