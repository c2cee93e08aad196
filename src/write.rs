//! Mutating RDS operations.
//!
//! Every command here names the resource it changes and goes through the
//! confirmation gate before it is sent, unless `--force` is given.

/// AddTagsToResource.
pub mod add_tags_to_resource;

/// CopyDBSnapshot.
pub mod copy_db_snapshot;

/// CreateDBCluster.
pub mod create_db_cluster;

/// CreateDBClusterSnapshot.
pub mod create_db_cluster_snapshot;

/// CreateDBInstance.
pub mod create_db_instance;

/// CreateDBParameterGroup.
pub mod create_db_parameter_group;

/// CreateDBSnapshot.
pub mod create_db_snapshot;

/// CreateDBSubnetGroup.
pub mod create_db_subnet_group;

/// DeleteDBCluster.
pub mod delete_db_cluster;

/// DeleteDBClusterSnapshot.
pub mod delete_db_cluster_snapshot;

/// DeleteDBInstance.
pub mod delete_db_instance;

/// DeleteDBParameterGroup.
pub mod delete_db_parameter_group;

/// DeleteDBSnapshot.
pub mod delete_db_snapshot;

/// DeleteDBSubnetGroup.
pub mod delete_db_subnet_group;

/// FailoverDBCluster.
pub mod failover_db_cluster;

/// ModifyDBInstance.
pub mod modify_db_instance;

/// ModifyDBParameterGroup: change parameter values.
pub mod modify_db_parameter_group;

/// RebootDBInstance.
pub mod reboot_db_instance;

/// RemoveTagsFromResource.
pub mod remove_tags_from_resource;

/// RestoreDBInstanceFromDBSnapshot.
pub mod restore_db_instance_from_db_snapshot;

/// StartDBCluster.
pub mod start_db_cluster;

/// StartDBInstance.
pub mod start_db_instance;

/// StopDBCluster.
pub mod stop_db_cluster;

/// StopDBInstance.
pub mod stop_db_instance;
