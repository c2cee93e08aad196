use crate::command::Command;
use crate::common::select::Select;
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Force a failover of a DB cluster to one of its readers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct FailoverDbCluster {
    /// Identifier of the DB cluster.
    #[arg(long)]
    #[serde(rename = "DBClusterIdentifier")]
    pub db_cluster_identifier: String,
    /// Reader to promote; RDS picks one when omitted.
    #[arg(long)]
    #[serde(rename = "TargetDBInstanceIdentifier")]
    pub target_db_instance_identifier: Option<String>,
}

impl FailoverDbCluster {
    /// Execute the failover DB cluster operation.
    #[tracing::instrument(
        name = "rds_commands.failover_db_cluster",
        skip_all,
        fields(resource = %self.db_cluster_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::failover_db_cluster::FailoverDbClusterOutput,
        error::SdkError<operation::failover_db_cluster::FailoverDBClusterError>,
    > {
        client
            .failover_db_cluster()
            .db_cluster_identifier(self.db_cluster_identifier)
            .set_target_db_instance_identifier(self.target_db_instance_identifier)
            .send()
            .await
    }
}

impl Command for FailoverDbCluster {
    const OPERATION: &'static str = "FailoverDBCluster";

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
    fn test_failover_db_cluster() {
        let args = FailoverDbCluster {
            db_cluster_identifier: "a".to_string(),
            target_db_instance_identifier: Some("a-2".to_string()),
        };
        assert_eq!(args.confirmation_target().as_deref(), Some("a"));
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"DBClusterIdentifier": "a", "TargetDBInstanceIdentifier": "a-2"})
        );
    }
}
