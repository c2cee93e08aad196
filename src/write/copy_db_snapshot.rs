use crate::command::Command;
use crate::common::{select::Select, tag};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// copy DB snapshot operation
#[derive(Clone, Debug, Default, PartialEq)]
struct CopyDbSnapshotInput {
    source_db_snapshot_identifier: String,
    target_db_snapshot_identifier: String,
    kms_key_id: Option<String>,
    copy_tags: Option<bool>,
    option_group_name: Option<String>,
    tags: Option<Vec<types::Tag>>,
}

/// Copy a DB snapshot, possibly from another region or account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDbSnapshot {
    /// Identifier or ARN of the snapshot to copy.
    #[arg(long)]
    #[serde(rename = "SourceDBSnapshotIdentifier")]
    pub source_db_snapshot_identifier: String,
    /// Identifier of the copy.
    #[arg(long)]
    #[serde(rename = "TargetDBSnapshotIdentifier")]
    pub target_db_snapshot_identifier: String,
    /// KMS key encrypting the copy.
    #[arg(long)]
    pub kms_key_id: Option<String>,
    /// Copy the source snapshot's tags.
    #[arg(long)]
    pub copy_tags: bool,
    /// Option group associated with the copy.
    #[arg(long)]
    pub option_group_name: Option<String>,
    /// Tags to attach to the copy (`Key=Value`).
    #[arg(long = "tag", value_name = "KEY=VALUE")]
    pub tags: Vec<tag::Tag>,
}

impl From<CopyDbSnapshot> for CopyDbSnapshotInput {
    fn from(copy: CopyDbSnapshot) -> Self {
        Self {
            source_db_snapshot_identifier: copy.source_db_snapshot_identifier,
            target_db_snapshot_identifier: copy.target_db_snapshot_identifier,
            kms_key_id: copy.kms_key_id,
            copy_tags: copy.copy_tags.then_some(true),
            option_group_name: copy.option_group_name,
            tags: tag::into_sdk_tags(copy.tags),
        }
    }
}

impl CopyDbSnapshot {
    /// Execute the copy DB snapshot operation.
    #[tracing::instrument(
        name = "rds_commands.copy_db_snapshot",
        skip_all,
        fields(resource = %self.target_db_snapshot_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::copy_db_snapshot::CopyDbSnapshotOutput,
        error::SdkError<operation::copy_db_snapshot::CopyDBSnapshotError>,
    > {
        let copy: CopyDbSnapshotInput = self.into();
        client
            .copy_db_snapshot()
            .source_db_snapshot_identifier(copy.source_db_snapshot_identifier)
            .target_db_snapshot_identifier(copy.target_db_snapshot_identifier)
            .set_kms_key_id(copy.kms_key_id)
            .set_copy_tags(copy.copy_tags)
            .set_option_group_name(copy.option_group_name)
            .set_tags(copy.tags)
            .send()
            .await
    }
}

impl Command for CopyDbSnapshot {
    const OPERATION: &'static str = "CopyDBSnapshot";

    fn default_select() -> Select {
        Select::Field("DBSnapshot".to_string())
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.target_db_snapshot_identifier.clone())
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
    #[case::required(
        CopyDbSnapshot {
            source_db_snapshot_identifier: "a".to_string(),
            target_db_snapshot_identifier: "b".to_string(),
            ..Default::default()
        },
        CopyDbSnapshotInput {
            source_db_snapshot_identifier: "a".to_string(),
            target_db_snapshot_identifier: "b".to_string(),
            ..Default::default()
        }
    )]
    #[case::encrypted_copy(
        CopyDbSnapshot {
            source_db_snapshot_identifier: "arn:aws:rds:eu-west-1:123456789012:snapshot:a".to_string(),
            target_db_snapshot_identifier: "b".to_string(),
            kms_key_id: Some("c".to_string()),
            copy_tags: true,
            option_group_name: None,
            tags: Vec::new(),
        },
        CopyDbSnapshotInput {
            source_db_snapshot_identifier: "arn:aws:rds:eu-west-1:123456789012:snapshot:a".to_string(),
            target_db_snapshot_identifier: "b".to_string(),
            kms_key_id: Some("c".to_string()),
            copy_tags: Some(true),
            option_group_name: None,
            tags: None,
        }
    )]
    fn test_copy_db_snapshot(#[case] args: CopyDbSnapshot, #[case] expected: CopyDbSnapshotInput) {
        assert_eq!(args.confirmation_target().as_deref(), Some("b"));
        let actual: CopyDbSnapshotInput = args.into();
        assert_eq!(actual, expected);
    }
}
