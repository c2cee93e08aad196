use crate::command::Command;
use crate::common::select::Select;
use crate::Error;

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Delete a DB parameter group that no instance uses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDbParameterGroup {
    /// Name of the DB parameter group.
    #[arg(long)]
    #[serde(rename = "DBParameterGroupName")]
    pub db_parameter_group_name: String,
}

impl DeleteDbParameterGroup {
    /// Execute the delete DB parameter group operation.
    #[tracing::instrument(
        name = "rds_commands.delete_db_parameter_group",
        skip_all,
        fields(resource = %self.db_parameter_group_name),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::delete_db_parameter_group::DeleteDbParameterGroupOutput,
        error::SdkError<operation::delete_db_parameter_group::DeleteDBParameterGroupError>,
    > {
        client
            .delete_db_parameter_group()
            .db_parameter_group_name(self.db_parameter_group_name)
            .send()
            .await
    }
}

impl Command for DeleteDbParameterGroup {
    const OPERATION: &'static str = "DeleteDBParameterGroup";

    fn default_select() -> Select {
        Select::Nothing
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.db_parameter_group_name.clone())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        self.send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_db_parameter_group() {
        let args = DeleteDbParameterGroup {
            db_parameter_group_name: "a".to_string(),
        };
        assert_eq!(args.confirmation_target().as_deref(), Some("a"));
        assert_eq!(DeleteDbParameterGroup::default_select(), Select::Nothing);
    }
}
