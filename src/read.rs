//! Non-mutating RDS operations.
//!
//! These commands never prompt for confirmation. Operations that return lists are
//! paginated automatically unless `--no-auto-iteration` is given.

/// DescribeAccountAttributes: account quotas and usage.
pub mod describe_account_attributes;

/// DescribeDBClusterSnapshots.
pub mod describe_db_cluster_snapshots;

/// DescribeDBClusters.
pub mod describe_db_clusters;

/// DescribeDBEngineVersions: available engines and versions.
pub mod describe_db_engine_versions;

/// DescribeDBInstances.
pub mod describe_db_instances;

/// DescribeDBLogFiles: log files of a DB instance.
pub mod describe_db_log_files;

/// DescribeDBParameterGroups.
pub mod describe_db_parameter_groups;

/// DescribeDBParameters: the parameters of one parameter group.
pub mod describe_db_parameters;

/// DescribeDBSnapshots.
pub mod describe_db_snapshots;

/// DescribeDBSubnetGroups.
pub mod describe_db_subnet_groups;

/// DescribeEvents: events from the past 14 days.
pub mod describe_events;

/// ListTagsForResource: tags on a resource.
pub mod list_tags_for_resource;
