use crate::command::Command;
use crate::common::select::Select;
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// delete DB instance operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DeleteDbInstanceInput {
    db_instance_identifier: String,
    skip_final_snapshot: Option<bool>,
    final_db_snapshot_identifier: Option<String>,
    delete_automated_backups: Option<bool>,
}

/// Delete a DB instance.
///
/// RDS requires either a final snapshot identifier or `skip_final_snapshot`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDbInstance {
    /// Identifier of the DB instance.
    #[arg(long)]
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
    /// Delete without taking a final snapshot.
    #[arg(long, conflicts_with = "final_db_snapshot_identifier")]
    pub skip_final_snapshot: bool,
    /// Identifier of the final snapshot taken before deletion.
    #[arg(long)]
    #[serde(rename = "FinalDBSnapshotIdentifier")]
    pub final_db_snapshot_identifier: Option<String>,
    /// Also delete the automated backups of the instance.
    #[arg(long)]
    pub delete_automated_backups: Option<bool>,
}

impl From<DeleteDbInstance> for DeleteDbInstanceInput {
    fn from(delete: DeleteDbInstance) -> Self {
        Self {
            db_instance_identifier: delete.db_instance_identifier,
            skip_final_snapshot: delete.skip_final_snapshot.then_some(true),
            final_db_snapshot_identifier: delete.final_db_snapshot_identifier,
            delete_automated_backups: delete.delete_automated_backups,
        }
    }
}

impl DeleteDbInstance {
    /// Execute the delete DB instance operation.
    #[tracing::instrument(
        name = "rds_commands.delete_db_instance",
        skip_all,
        fields(resource = %self.db_instance_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::delete_db_instance::DeleteDbInstanceOutput,
        error::SdkError<operation::delete_db_instance::DeleteDBInstanceError>,
    > {
        let delete: DeleteDbInstanceInput = self.into();
        client
            .delete_db_instance()
            .db_instance_identifier(delete.db_instance_identifier)
            .set_skip_final_snapshot(delete.skip_final_snapshot)
            .set_final_db_snapshot_identifier(delete.final_db_snapshot_identifier)
            .set_delete_automated_backups(delete.delete_automated_backups)
            .send()
            .await
    }
}

impl Command for DeleteDbInstance {
    const OPERATION: &'static str = "DeleteDBInstance";

    fn default_select() -> Select {
        Select::Field("DBInstance".to_string())
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.db_instance_identifier.clone())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBInstance": response.db_instance().map(output::instance::db_instance),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::final_snapshot(
        DeleteDbInstance {
            db_instance_identifier: "a".to_string(),
            final_db_snapshot_identifier: Some("b".to_string()),
            ..Default::default()
        },
        DeleteDbInstanceInput {
            db_instance_identifier: "a".to_string(),
            final_db_snapshot_identifier: Some("b".to_string()),
            ..Default::default()
        }
    )]
    #[case::skip_final_snapshot(
        DeleteDbInstance {
            db_instance_identifier: "a".to_string(),
            skip_final_snapshot: true,
            final_db_snapshot_identifier: None,
            delete_automated_backups: Some(true),
        },
        DeleteDbInstanceInput {
            db_instance_identifier: "a".to_string(),
            skip_final_snapshot: Some(true),
            final_db_snapshot_identifier: None,
            delete_automated_backups: Some(true),
        }
    )]
    fn test_delete_db_instance(#[case] args: DeleteDbInstance, #[case] expected: DeleteDbInstanceInput) {
        let actual: DeleteDbInstanceInput = args.into();
        assert_eq!(actual, expected);
    }
}
