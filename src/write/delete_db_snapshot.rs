use crate::command::Command;
use crate::common::select::Select;
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Delete a manual DB snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDbSnapshot {
    /// Identifier of the snapshot.
    #[arg(long)]
    #[serde(rename = "DBSnapshotIdentifier")]
    pub db_snapshot_identifier: String,
}

impl DeleteDbSnapshot {
    /// Execute the delete DB snapshot operation.
    #[tracing::instrument(
        name = "rds_commands.delete_db_snapshot",
        skip_all,
        fields(resource = %self.db_snapshot_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::delete_db_snapshot::DeleteDbSnapshotOutput,
        error::SdkError<operation::delete_db_snapshot::DeleteDBSnapshotError>,
    > {
        client
            .delete_db_snapshot()
            .db_snapshot_identifier(self.db_snapshot_identifier)
            .send()
            .await
    }
}

impl Command for DeleteDbSnapshot {
    const OPERATION: &'static str = "DeleteDBSnapshot";

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

    #[test]
    fn test_delete_db_snapshot() {
        let args = DeleteDbSnapshot {
            db_snapshot_identifier: "a".to_string(),
        };
        assert_eq!(args.confirmation_target().as_deref(), Some("a"));
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"DBSnapshotIdentifier": "a"})
        );
    }
}
