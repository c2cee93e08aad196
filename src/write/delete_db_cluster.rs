use crate::command::Command;
use crate::common::select::Select;
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// delete DB cluster operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DeleteDbClusterInput {
    db_cluster_identifier: String,
    skip_final_snapshot: Option<bool>,
    final_db_snapshot_identifier: Option<String>,
    delete_automated_backups: Option<bool>,
}

/// Delete a DB cluster.
///
/// The instances of an Aurora cluster must be deleted first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDbCluster {
    /// Identifier of the DB cluster.
    #[arg(long)]
    #[serde(rename = "DBClusterIdentifier")]
    pub db_cluster_identifier: String,
    /// Delete without taking a final snapshot.
    #[arg(long, conflicts_with = "final_db_snapshot_identifier")]
    pub skip_final_snapshot: bool,
    /// Identifier of the final cluster snapshot taken before deletion.
    #[arg(long)]
    #[serde(rename = "FinalDBSnapshotIdentifier")]
    pub final_db_snapshot_identifier: Option<String>,
    /// Also delete the automated backups of the cluster.
    #[arg(long)]
    pub delete_automated_backups: Option<bool>,
}

impl From<DeleteDbCluster> for DeleteDbClusterInput {
    fn from(delete: DeleteDbCluster) -> Self {
        Self {
            db_cluster_identifier: delete.db_cluster_identifier,
            skip_final_snapshot: delete.skip_final_snapshot.then_some(true),
            final_db_snapshot_identifier: delete.final_db_snapshot_identifier,
            delete_automated_backups: delete.delete_automated_backups,
        }
    }
}

impl DeleteDbCluster {
    /// Execute the delete DB cluster operation.
    #[tracing::instrument(
        name = "rds_commands.delete_db_cluster",
        skip_all,
        fields(resource = %self.db_cluster_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::delete_db_cluster::DeleteDbClusterOutput,
        error::SdkError<operation::delete_db_cluster::DeleteDBClusterError>,
    > {
        let delete: DeleteDbClusterInput = self.into();
        client
            .delete_db_cluster()
            .db_cluster_identifier(delete.db_cluster_identifier)
            .set_skip_final_snapshot(delete.skip_final_snapshot)
            .set_final_db_snapshot_identifier(delete.final_db_snapshot_identifier)
            .set_delete_automated_backups(delete.delete_automated_backups)
            .send()
            .await
    }
}

impl Command for DeleteDbCluster {
    const OPERATION: &'static str = "DeleteDBCluster";

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

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::final_snapshot(
        DeleteDbCluster {
            db_cluster_identifier: "a".to_string(),
            final_db_snapshot_identifier: Some("b".to_string()),
            ..Default::default()
        },
        DeleteDbClusterInput {
            db_cluster_identifier: "a".to_string(),
            final_db_snapshot_identifier: Some("b".to_string()),
            ..Default::default()
        }
    )]
    #[case::skip_final_snapshot(
        DeleteDbCluster {
            db_cluster_identifier: "a".to_string(),
            skip_final_snapshot: true,
            ..Default::default()
        },
        DeleteDbClusterInput {
            db_cluster_identifier: "a".to_string(),
            skip_final_snapshot: Some(true),
            ..Default::default()
        }
    )]
    fn test_delete_db_cluster(#[case] args: DeleteDbCluster, #[case] expected: DeleteDbClusterInput) {
        let actual: DeleteDbClusterInput = args.into();
        assert_eq!(actual, expected);
    }
}
