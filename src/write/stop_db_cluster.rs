use crate::command::Command;
use crate::common::select::Select;
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Stop a DB cluster and all of its instances.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct StopDbCluster {
    /// Identifier of the DB cluster.
    #[arg(long)]
    #[serde(rename = "DBClusterIdentifier")]
    pub db_cluster_identifier: String,
}

impl StopDbCluster {
    /// Execute the stop DB cluster operation.
    #[tracing::instrument(
        name = "rds_commands.stop_db_cluster",
        skip_all,
        fields(resource = %self.db_cluster_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::stop_db_cluster::StopDbClusterOutput,
        error::SdkError<operation::stop_db_cluster::StopDBClusterError>,
    > {
        client
            .stop_db_cluster()
            .db_cluster_identifier(self.db_cluster_identifier)
            .send()
            .await
    }
}

impl Command for StopDbCluster {
    const OPERATION: &'static str = "StopDBCluster";

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
