use crate::command::Command;
use crate::common::select::Select;
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Start a stopped DB cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct StartDbCluster {
    /// Identifier of the DB cluster.
    #[arg(long)]
    #[serde(rename = "DBClusterIdentifier")]
    pub db_cluster_identifier: String,
}

impl StartDbCluster {
    /// Execute the start DB cluster operation.
    #[tracing::instrument(
        name = "rds_commands.start_db_cluster",
        skip_all,
        fields(resource = %self.db_cluster_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::start_db_cluster::StartDbClusterOutput,
        error::SdkError<operation::start_db_cluster::StartDBClusterError>,
    > {
        client
            .start_db_cluster()
            .db_cluster_identifier(self.db_cluster_identifier)
            .send()
            .await
    }
}

impl Command for StartDbCluster {
    const OPERATION: &'static str = "StartDBCluster";

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

    #[test]
    fn test_start_db_cluster() {
        let args = StartDbCluster {
            db_cluster_identifier: "a".to_string(),
        };
        assert_eq!(args.confirmation_target().as_deref(), Some("a"));
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"DBClusterIdentifier": "a"})
        );
    }
}
