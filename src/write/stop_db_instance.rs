use crate::command::Command;
use crate::common::select::Select;
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Stop a DB instance.
///
/// RDS starts a stopped instance again on its own after seven days.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct StopDbInstance {
    /// Identifier of the DB instance.
    #[arg(long)]
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
    /// Take a snapshot with this identifier before stopping.
    #[arg(long)]
    #[serde(rename = "DBSnapshotIdentifier")]
    pub db_snapshot_identifier: Option<String>,
}

impl StopDbInstance {
    /// Execute the stop DB instance operation.
    #[tracing::instrument(
        name = "rds_commands.stop_db_instance",
        skip_all,
        fields(resource = %self.db_instance_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::stop_db_instance::StopDbInstanceOutput,
        error::SdkError<operation::stop_db_instance::StopDBInstanceError>,
    > {
        client
            .stop_db_instance()
            .db_instance_identifier(self.db_instance_identifier)
            .set_db_snapshot_identifier(self.db_snapshot_identifier)
            .send()
            .await
    }
}

impl Command for StopDbInstance {
    const OPERATION: &'static str = "StopDBInstance";

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

    #[test]
    fn test_stop_db_instance() {
        let args = StopDbInstance {
            db_instance_identifier: "a".to_string(),
            db_snapshot_identifier: None,
        };
        assert_eq!(args.confirmation_target().as_deref(), Some("a"));
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"DBInstanceIdentifier": "a", "DBSnapshotIdentifier": null})
        );
    }
}
