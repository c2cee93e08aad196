use crate::command::Command;
use crate::common::select::Select;
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Delete a manual DB cluster snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDbClusterSnapshot {
    /// Identifier of the cluster snapshot.
    #[arg(long)]
    #[serde(rename = "DBClusterSnapshotIdentifier")]
    pub db_cluster_snapshot_identifier: String,
}

impl DeleteDbClusterSnapshot {
    /// Execute the delete DB cluster snapshot operation.
    #[tracing::instrument(
        name = "rds_commands.delete_db_cluster_snapshot",
        skip_all,
        fields(resource = %self.db_cluster_snapshot_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::delete_db_cluster_snapshot::DeleteDbClusterSnapshotOutput,
        error::SdkError<operation::delete_db_cluster_snapshot::DeleteDBClusterSnapshotError>,
    > {
        client
            .delete_db_cluster_snapshot()
            .db_cluster_snapshot_identifier(self.db_cluster_snapshot_identifier)
            .send()
            .await
    }
}

impl Command for DeleteDbClusterSnapshot {
    const OPERATION: &'static str = "DeleteDBClusterSnapshot";

    fn default_select() -> Select {
        Select::Field("DBClusterSnapshot".to_string())
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.db_cluster_snapshot_identifier.clone())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBClusterSnapshot": response
                .db_cluster_snapshot()
                .map(output::snapshot::db_cluster_snapshot),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_db_cluster_snapshot() {
        let args = DeleteDbClusterSnapshot {
            db_cluster_snapshot_identifier: "a".to_string(),
        };
        assert_eq!(args.confirmation_target().as_deref(), Some("a"));
    }
}
