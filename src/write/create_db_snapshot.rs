use crate::command::Command;
use crate::common::{select::Select, tag};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// create DB snapshot operation
#[derive(Clone, Debug, Default, PartialEq)]
struct CreateDbSnapshotInput {
    db_snapshot_identifier: String,
    db_instance_identifier: String,
    tags: Option<Vec<types::Tag>>,
}

/// Take a manual snapshot of a DB instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDbSnapshot {
    /// Identifier of the new snapshot.
    #[arg(long)]
    #[serde(rename = "DBSnapshotIdentifier")]
    pub db_snapshot_identifier: String,
    /// Identifier of the DB instance to snapshot.
    #[arg(long)]
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
    /// Tags to attach (`Key=Value`).
    #[arg(long = "tag", value_name = "KEY=VALUE")]
    pub tags: Vec<tag::Tag>,
}

impl From<CreateDbSnapshot> for CreateDbSnapshotInput {
    fn from(create: CreateDbSnapshot) -> Self {
        Self {
            db_snapshot_identifier: create.db_snapshot_identifier,
            db_instance_identifier: create.db_instance_identifier,
            tags: tag::into_sdk_tags(create.tags),
        }
    }
}

impl CreateDbSnapshot {
    /// Execute the create DB snapshot operation.
    #[tracing::instrument(
        name = "rds_commands.create_db_snapshot",
        skip_all,
        fields(resource = %self.db_snapshot_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::create_db_snapshot::CreateDbSnapshotOutput,
        error::SdkError<operation::create_db_snapshot::CreateDBSnapshotError>,
    > {
        let create: CreateDbSnapshotInput = self.into();
        client
            .create_db_snapshot()
            .db_snapshot_identifier(create.db_snapshot_identifier)
            .db_instance_identifier(create.db_instance_identifier)
            .set_tags(create.tags)
            .send()
            .await
    }
}

impl Command for CreateDbSnapshot {
    const OPERATION: &'static str = "CreateDBSnapshot";

    fn default_select() -> Select {
        Select::Field("DBSnapshot".to_string())
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.db_snapshot_identifier.clone())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBSnapshot": response.db_snapshot().map(output::snapshot::db_snapshot),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::untagged(
        CreateDbSnapshot {
            db_snapshot_identifier: "a".to_string(),
            db_instance_identifier: "b".to_string(),
            tags: Vec::new(),
        },
        CreateDbSnapshotInput {
            db_snapshot_identifier: "a".to_string(),
            db_instance_identifier: "b".to_string(),
            tags: None,
        }
    )]
    #[case::tagged(
        CreateDbSnapshot {
            db_snapshot_identifier: "a".to_string(),
            db_instance_identifier: "b".to_string(),
            tags: vec![
                tag::Tag {
                    key: "reason".to_string(),
                    value: Some("pre-upgrade".to_string()),
                },
            ],
        },
        CreateDbSnapshotInput {
            db_snapshot_identifier: "a".to_string(),
            db_instance_identifier: "b".to_string(),
            tags: Some(
                vec![
                    types::Tag::builder()
                        .key("reason")
                        .value("pre-upgrade")
                        .build(),
                ]
            ),
        }
    )]
    fn test_create_db_snapshot(#[case] args: CreateDbSnapshot, #[case] expected: CreateDbSnapshotInput) {
        let actual: CreateDbSnapshotInput = args.into();
        assert_eq!(actual, expected);
    }
}
