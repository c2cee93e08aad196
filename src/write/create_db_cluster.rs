use crate::command::Command;
use crate::common::{self, select::Select, tag};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// create DB cluster operation
#[derive(Clone, Debug, Default, PartialEq)]
struct CreateDbClusterInput {
    db_cluster_identifier: String,
    engine: String,
    engine_version: Option<String>,
    engine_mode: Option<String>,
    database_name: Option<String>,
    master_username: Option<String>,
    master_user_password: Option<String>,
    manage_master_user_password: Option<bool>,
    db_cluster_instance_class: Option<String>,
    allocated_storage: Option<i32>,
    storage_type: Option<String>,
    iops: Option<i32>,
    storage_encrypted: Option<bool>,
    kms_key_id: Option<String>,
    db_cluster_parameter_group_name: Option<String>,
    db_subnet_group_name: Option<String>,
    vpc_security_group_ids: Option<Vec<String>>,
    availability_zones: Option<Vec<String>>,
    port: Option<i32>,
    backup_retention_period: Option<i32>,
    preferred_backup_window: Option<String>,
    preferred_maintenance_window: Option<String>,
    deletion_protection: Option<bool>,
    copy_tags_to_snapshot: Option<bool>,
    tags: Option<Vec<types::Tag>>,
}

/// Create an Aurora or Multi-AZ DB cluster.
///
/// Aurora clusters start without instances; add them with `CreateDbInstance`
/// and `db_cluster_identifier`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDbCluster {
    /// Identifier of the new DB cluster.
    #[arg(long)]
    #[serde(rename = "DBClusterIdentifier")]
    pub db_cluster_identifier: String,
    /// Database engine, such as `aurora-postgresql`.
    #[arg(long)]
    pub engine: String,
    /// Engine version; the engine default when omitted.
    #[arg(long)]
    pub engine_version: Option<String>,
    /// Engine mode, such as `provisioned`.
    #[arg(long)]
    pub engine_mode: Option<String>,
    /// Name of the database created with the cluster.
    #[arg(long)]
    pub database_name: Option<String>,
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
    /// Instance class of a Multi-AZ DB cluster.
    #[arg(long)]
    #[serde(rename = "DBClusterInstanceClass")]
    pub db_cluster_instance_class: Option<String>,
    /// Storage in GiB of a Multi-AZ DB cluster.
    #[arg(long)]
    pub allocated_storage: Option<i32>,
    /// Storage type, such as `aurora-iopt1` or `io1`.
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
    /// Cluster parameter group applied to the cluster.
    #[arg(long)]
    #[serde(rename = "DBClusterParameterGroupName")]
    pub db_cluster_parameter_group_name: Option<String>,
    /// Subnet group the cluster is placed in.
    #[arg(long)]
    #[serde(rename = "DBSubnetGroupName")]
    pub db_subnet_group_name: Option<String>,
    /// VPC security groups attached to the cluster.
    #[arg(long = "vpc-security-group-id")]
    pub vpc_security_group_ids: Vec<String>,
    /// Availability zones the cluster storage spans.
    #[arg(long = "availability-zone")]
    pub availability_zones: Vec<String>,
    /// Port the database listens on.
    #[arg(long)]
    pub port: Option<i32>,
    /// Days automated backups are retained.
    #[arg(long)]
    pub backup_retention_period: Option<i32>,
    /// Daily backup window (`hh24:mi-hh24:mi`, UTC).
    #[arg(long)]
    pub preferred_backup_window: Option<String>,
    /// Weekly maintenance window (`ddd:hh24:mi-ddd:hh24:mi`, UTC).
    #[arg(long)]
    pub preferred_maintenance_window: Option<String>,
    /// Refuse deletion while enabled.
    #[arg(long)]
    pub deletion_protection: Option<bool>,
    /// Copy the cluster tags to its snapshots.
    #[arg(long)]
    pub copy_tags_to_snapshot: Option<bool>,
    /// Tags to attach (`Key=Value`).
    #[arg(long = "tag", value_name = "KEY=VALUE")]
    pub tags: Vec<tag::Tag>,
}

impl From<CreateDbCluster> for CreateDbClusterInput {
    fn from(create: CreateDbCluster) -> Self {
        Self {
            db_cluster_identifier: create.db_cluster_identifier,
            engine: create.engine,
            engine_version: create.engine_version,
            engine_mode: create.engine_mode,
            database_name: create.database_name,
            master_username: create.master_username,
            master_user_password: create.master_user_password,
            manage_master_user_password: create.manage_master_user_password,
            db_cluster_instance_class: create.db_cluster_instance_class,
            allocated_storage: create.allocated_storage,
            storage_type: create.storage_type,
            iops: create.iops,
            storage_encrypted: create.storage_encrypted,
            kms_key_id: create.kms_key_id,
            db_cluster_parameter_group_name: create.db_cluster_parameter_group_name,
            db_subnet_group_name: create.db_subnet_group_name,
            vpc_security_group_ids: common::non_empty(create.vpc_security_group_ids),
            availability_zones: common::non_empty(create.availability_zones),
            port: create.port,
            backup_retention_period: create.backup_retention_period,
            preferred_backup_window: create.preferred_backup_window,
            preferred_maintenance_window: create.preferred_maintenance_window,
            deletion_protection: create.deletion_protection,
            copy_tags_to_snapshot: create.copy_tags_to_snapshot,
            tags: tag::into_sdk_tags(create.tags),
        }
    }
}

impl CreateDbCluster {
    /// Execute the create DB cluster operation.
    #[tracing::instrument(
        name = "rds_commands.create_db_cluster",
        skip_all,
        fields(resource = %self.db_cluster_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::create_db_cluster::CreateDbClusterOutput,
        error::SdkError<operation::create_db_cluster::CreateDBClusterError>,
    > {
        let create: CreateDbClusterInput = self.into();
        client
            .create_db_cluster()
            .db_cluster_identifier(create.db_cluster_identifier)
            .engine(create.engine)
            .set_engine_version(create.engine_version)
            .set_engine_mode(create.engine_mode)
            .set_database_name(create.database_name)
            .set_master_username(create.master_username)
            .set_master_user_password(create.master_user_password)
            .set_manage_master_user_password(create.manage_master_user_password)
            .set_db_cluster_instance_class(create.db_cluster_instance_class)
            .set_allocated_storage(create.allocated_storage)
            .set_storage_type(create.storage_type)
            .set_iops(create.iops)
            .set_storage_encrypted(create.storage_encrypted)
            .set_kms_key_id(create.kms_key_id)
            .set_db_cluster_parameter_group_name(create.db_cluster_parameter_group_name)
            .set_db_subnet_group_name(create.db_subnet_group_name)
            .set_vpc_security_group_ids(create.vpc_security_group_ids)
            .set_availability_zones(create.availability_zones)
            .set_port(create.port)
            .set_backup_retention_period(create.backup_retention_period)
            .set_preferred_backup_window(create.preferred_backup_window)
            .set_preferred_maintenance_window(create.preferred_maintenance_window)
            .set_deletion_protection(create.deletion_protection)
            .set_copy_tags_to_snapshot(create.copy_tags_to_snapshot)
            .set_tags(create.tags)
            .send()
            .await
    }
}

impl Command for CreateDbCluster {
    const OPERATION: &'static str = "CreateDBCluster";

    fn default_select() -> Select {
        Select::Field("DBCluster".to_string())
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.db_cluster_identifier.clone())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBCluster": response.db_cluster().map(output::cluster::db_cluster),
        }))
    }
}
