use crate::command::Command;
use crate::common::{select::Select, tag};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// create DB cluster snapshot operation
#[derive(Clone, Debug, Default, PartialEq)]
struct CreateDbClusterSnapshotInput {
    db_cluster_snapshot_identifier: String,
    db_cluster_identifier: String,
    tags: Option<Vec<types::Tag>>,
}

/// Take a manual snapshot of a DB cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDbClusterSnapshot {
    /// Identifier of the new cluster snapshot.
    #[arg(long)]
    #[serde(rename = "DBClusterSnapshotIdentifier")]
    pub db_cluster_snapshot_identifier: String,
    /// Identifier of the DB cluster to snapshot.
    #[arg(long)]
    #[serde(rename = "DBClusterIdentifier")]
    pub db_cluster_identifier: String,
    /// Tags to attach (`Key=Value`).
    #[arg(long = "tag", value_name = "KEY=VALUE")]
    pub tags: Vec<tag::Tag>,
}

impl From<CreateDbClusterSnapshot> for CreateDbClusterSnapshotInput {
    fn from(create: CreateDbClusterSnapshot) -> Self {
        Self {
            db_cluster_snapshot_identifier: create.db_cluster_snapshot_identifier,
            db_cluster_identifier: create.db_cluster_identifier,
            tags: tag::into_sdk_tags(create.tags),
        }
    }
}

impl CreateDbClusterSnapshot {
    /// Execute the create DB cluster snapshot operation.
    #[tracing::instrument(
        name = "rds_commands.create_db_cluster_snapshot",
        skip_all,
        fields(resource = %self.db_cluster_snapshot_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::create_db_cluster_snapshot::CreateDbClusterSnapshotOutput,
        error::SdkError<operation::create_db_cluster_snapshot::CreateDBClusterSnapshotError>,
    > {
        let create: CreateDbClusterSnapshotInput = self.into();
        client
            .create_db_cluster_snapshot()
            .db_cluster_snapshot_identifier(create.db_cluster_snapshot_identifier)
            .db_cluster_identifier(create.db_cluster_identifier)
            .set_tags(create.tags)
            .send()
            .await
    }
}

impl Command for CreateDbClusterSnapshot {
    const OPERATION: &'static str = "CreateDBClusterSnapshot";

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

    use rstest::rstest;

    #[rstest]
    #[case::untagged(
        CreateDbClusterSnapshot {
            db_cluster_snapshot_identifier: "a".to_string(),
            db_cluster_identifier: "b".to_string(),
            tags: Vec::new(),
        },
        CreateDbClusterSnapshotInput {
            db_cluster_snapshot_identifier: "a".to_string(),
            db_cluster_identifier: "b".to_string(),
            tags: None,
        }
    )]
    #[case::tagged(
        CreateDbClusterSnapshot {
            db_cluster_snapshot_identifier: "a".to_string(),
            db_cluster_identifier: "b".to_string(),
            tags: vec![
                tag::Tag {
                    key: "retain".to_string(),
                    value: None,
                },
            ],
        },
        CreateDbClusterSnapshotInput {
            db_cluster_snapshot_identifier: "a".to_string(),
            db_cluster_identifier: "b".to_string(),
            tags: Some(vec![types::Tag::builder().key("retain").build()]),
        }
    )]
    fn test_create_db_cluster_snapshot(
        #[case] args: CreateDbClusterSnapshot,
        #[case] expected: CreateDbClusterSnapshotInput,
    ) {
        let actual: CreateDbClusterSnapshotInput = args.into();
        assert_eq!(actual, expected);
    }
}
