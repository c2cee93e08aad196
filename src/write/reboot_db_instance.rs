use crate::command::Command;
use crate::common::select::Select;
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Reboot a DB instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct RebootDbInstance {
    /// Identifier of the DB instance.
    #[arg(long)]
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
    /// Reboot through a Multi-AZ failover.
    #[arg(long)]
    pub force_failover: bool,
}

impl RebootDbInstance {
    /// Execute the reboot DB instance operation.
    #[tracing::instrument(
        name = "rds_commands.reboot_db_instance",
        skip_all,
        fields(resource = %self.db_instance_identifier),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::reboot_db_instance::RebootDbInstanceOutput,
        error::SdkError<operation::reboot_db_instance::RebootDBInstanceError>,
    > {
        client
            .reboot_db_instance()
            .db_instance_identifier(self.db_instance_identifier)
            .set_force_failover(self.force_failover.then_some(true))
            .send()
            .await
    }
}

impl Command for RebootDbInstance {
    const OPERATION: &'static str = "RebootDBInstance";

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
    fn test_reboot_db_instance() {
        let args = RebootDbInstance {
            db_instance_identifier: "a".to_string(),
            force_failover: true,
        };
        assert_eq!(args.confirmation_target().as_deref(), Some("a"));
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"DBInstanceIdentifier": "a", "ForceFailover": true})
        );
    }
}
