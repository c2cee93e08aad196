use crate::command::Command;
use crate::common::select::Select;
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Start a stopped DB instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct StartDbInstance {
    /// Identifier of the DB instance.
    #[arg(long)]
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
}

impl StartDbInstance {
    /// Execute the start DB instance operation.
    #[tracing::instrument(
        name = "rds_commands.start_db_instance",
        skip_all,
        fields(resource = %self.db_instance_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::start_db_instance::StartDbInstanceOutput,
        error::SdkError<operation::start_db_instance::StartDBInstanceError>,
    > {
        client
            .start_db_instance()
            .db_instance_identifier(self.db_instance_identifier)
            .send()
            .await
    }
}

impl Command for StartDbInstance {
    const OPERATION: &'static str = "StartDBInstance";

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
    fn test_start_db_instance() {
        let args = StartDbInstance {
            db_instance_identifier: "a".to_string(),
        };
        assert_eq!(args.confirmation_target().as_deref(), Some("a"));
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"DBInstanceIdentifier": "a"})
        );
    }
}
