//! Command line surface of the `rds` binary.
//!
//! One kebab-case subcommand per RDS operation, e.g. `rds describe-db-instances`,
//! plus global flags that override [`Settings`].

use crate::command::{Command, Invocation};
use crate::common::select::Select;
use crate::config::Settings;
use crate::{Result, read, write};

use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

/// Run AWS RDS API operations and print the result as JSON.
#[derive(Debug, Parser)]
#[command(name = "rds", version, about)]
pub struct Cli {
    /// Settings file (TOML).
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// AWS region.
    #[arg(long, global = true)]
    pub region: Option<String>,
    /// Named AWS profile.
    #[arg(long, global = true)]
    pub profile: Option<String>,
    /// Endpoint URL override.
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint_url: Option<String>,
    /// Log filter, such as `info` or `rds_commands=debug`.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,
    /// Output selection: `*`, a response field, or `^Parameter`.
    #[arg(long, global = true, value_name = "SELECT")]
    pub select: Option<Select>,
    /// Skip the confirmation prompt of mutating operations.
    #[arg(short, long, global = true)]
    pub force: bool,
    /// Pretty-print the JSON output.
    #[arg(long, global = true, overrides_with = "no_pretty")]
    pub pretty: bool,
    /// Print compact JSON even if settings ask for pretty output.
    #[arg(long, global = true, overrides_with = "pretty")]
    pub no_pretty: bool,
    /// The operation to run.
    #[command(subcommand)]
    pub operation: Operation,
}

impl Cli {
    /// Apply the flags given on the command line on top of `settings`.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(region) = &self.region {
            settings.region = Some(region.clone());
        }
        if let Some(profile) = &self.profile {
            settings.profile = Some(profile.clone());
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            settings.endpoint_url = Some(endpoint_url.clone());
        }
        if let Some(log_level) = &self.log_level {
            settings.log_level = log_level.clone();
        }
        if self.pretty {
            settings.pretty = true;
        }
        if self.no_pretty {
            settings.pretty = false;
        }
    }
}

macro_rules! operations {
    ($($(#[$meta:meta])* $variant:ident($command:ty),)+) => {
        /// One RDS API operation with its parameters.
        #[derive(Debug, clap::Subcommand)]
        pub enum Operation {
            $(
                $(#[$meta])*
                $variant($command),
            )+
        }

        impl Operation {
            /// The RDS API name of the operation.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => <$command as Command>::OPERATION,)+
                }
            }

            /// Run the operation through `invocation`.
            pub async fn run(self, invocation: &Invocation<'_>) -> Result<Option<Value>> {
                match self {
                    $(Self::$variant(command) => invocation.run(command).await,)+
                }
            }
        }
    };
}

operations! {
    /// Add tags to a resource.
    AddTagsToResource(write::add_tags_to_resource::AddTagsToResource),
    /// Copy a DB snapshot.
    CopyDbSnapshot(write::copy_db_snapshot::CopyDbSnapshot),
    /// Create a DB cluster.
    CreateDbCluster(write::create_db_cluster::CreateDbCluster),
    /// Snapshot a DB cluster.
    CreateDbClusterSnapshot(write::create_db_cluster_snapshot::CreateDbClusterSnapshot),
    /// Create a DB instance.
    CreateDbInstance(write::create_db_instance::CreateDbInstance),
    /// Create a DB parameter group.
    CreateDbParameterGroup(write::create_db_parameter_group::CreateDbParameterGroup),
    /// Snapshot a DB instance.
    CreateDbSnapshot(write::create_db_snapshot::CreateDbSnapshot),
    /// Create a DB subnet group.
    CreateDbSubnetGroup(write::create_db_subnet_group::CreateDbSubnetGroup),
    /// Delete a DB cluster.
    DeleteDbCluster(write::delete_db_cluster::DeleteDbCluster),
    /// Delete a DB cluster snapshot.
    DeleteDbClusterSnapshot(write::delete_db_cluster_snapshot::DeleteDbClusterSnapshot),
    /// Delete a DB instance.
    DeleteDbInstance(write::delete_db_instance::DeleteDbInstance),
    /// Delete a DB parameter group.
    DeleteDbParameterGroup(write::delete_db_parameter_group::DeleteDbParameterGroup),
    /// Delete a DB snapshot.
    DeleteDbSnapshot(write::delete_db_snapshot::DeleteDbSnapshot),
    /// Delete a DB subnet group.
    DeleteDbSubnetGroup(write::delete_db_subnet_group::DeleteDbSubnetGroup),
    /// Show account quotas and usage.
    DescribeAccountAttributes(read::describe_account_attributes::DescribeAccountAttributes),
    /// Describe DB cluster snapshots.
    DescribeDbClusterSnapshots(read::describe_db_cluster_snapshots::DescribeDbClusterSnapshots),
    /// Describe DB clusters.
    DescribeDbClusters(read::describe_db_clusters::DescribeDbClusters),
    /// Describe available engine versions.
    DescribeDbEngineVersions(read::describe_db_engine_versions::DescribeDbEngineVersions),
    /// Describe DB instances.
    DescribeDbInstances(read::describe_db_instances::DescribeDbInstances),
    /// List the log files of a DB instance.
    DescribeDbLogFiles(read::describe_db_log_files::DescribeDbLogFiles),
    /// Describe DB parameter groups.
    DescribeDbParameterGroups(read::describe_db_parameter_groups::DescribeDbParameterGroups),
    /// List the parameters of a DB parameter group.
    DescribeDbParameters(read::describe_db_parameters::DescribeDbParameters),
    /// Describe DB snapshots.
    DescribeDbSnapshots(read::describe_db_snapshots::DescribeDbSnapshots),
    /// Describe DB subnet groups.
    DescribeDbSubnetGroups(read::describe_db_subnet_groups::DescribeDbSubnetGroups),
    /// Describe recent events.
    DescribeEvents(read::describe_events::DescribeEvents),
    /// Fail a DB cluster over to a reader.
    FailoverDbCluster(write::failover_db_cluster::FailoverDbCluster),
    /// List the tags on a resource.
    ListTagsForResource(read::list_tags_for_resource::ListTagsForResource),
    /// Change a DB instance.
    ModifyDbInstance(write::modify_db_instance::ModifyDbInstance),
    /// Change parameters in a DB parameter group.
    ModifyDbParameterGroup(write::modify_db_parameter_group::ModifyDbParameterGroup),
    /// Reboot a DB instance.
    RebootDbInstance(write::reboot_db_instance::RebootDbInstance),
    /// Remove tags from a resource.
    RemoveTagsFromResource(write::remove_tags_from_resource::RemoveTagsFromResource),
    /// Restore a DB instance from a DB snapshot.
    RestoreDbInstanceFromDbSnapshot(
        write::restore_db_instance_from_db_snapshot::RestoreDbInstanceFromDbSnapshot
    ),
    /// Start a DB cluster.
    StartDbCluster(write::start_db_cluster::StartDbCluster),
    /// Start a DB instance.
    StartDbInstance(write::start_db_instance::StartDbInstance),
    /// Stop a DB cluster.
    StopDbCluster(write::stop_db_cluster::StopDbCluster),
    /// Stop a DB instance.
    StopDbInstance(write::stop_db_instance::StopDbInstance),
}
