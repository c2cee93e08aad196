use crate::command::Command;
use crate::common::select::Select;
use crate::Error;

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Delete a DB subnet group that no instance uses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDbSubnetGroup {
    /// Name of the DB subnet group.
    #[arg(long)]
    #[serde(rename = "DBSubnetGroupName")]
    pub db_subnet_group_name: String,
}

impl DeleteDbSubnetGroup {
    /// Execute the delete DB subnet group operation.
    #[tracing::instrument(
        name = "rds_commands.delete_db_subnet_group",
        skip_all,
        fields(resource = %self.db_subnet_group_name),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::delete_db_subnet_group::DeleteDbSubnetGroupOutput,
        error::SdkError<operation::delete_db_subnet_group::DeleteDBSubnetGroupError>,
    > {
        client
            .delete_db_subnet_group()
            .db_subnet_group_name(self.db_subnet_group_name)
            .send()
            .await
    }
}

impl Command for DeleteDbSubnetGroup {
    const OPERATION: &'static str = "DeleteDBSubnetGroup";

    fn default_select() -> Select {
        Select::Nothing
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.db_subnet_group_name.clone())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        self.send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({}))
    }
}
