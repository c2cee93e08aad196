use crate::command::Command;
use crate::common::{select::Select, tag};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// create DB parameter group operation
#[derive(Clone, Debug, Default, PartialEq)]
struct CreateDbParameterGroupInput {
    db_parameter_group_name: String,
    db_parameter_group_family: String,
    description: String,
    tags: Option<Vec<types::Tag>>,
}

/// Create a DB parameter group.
///
/// The group starts with the engine defaults of its family.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDbParameterGroup {
    /// Name of the new group.
    #[arg(long)]
    #[serde(rename = "DBParameterGroupName")]
    pub db_parameter_group_name: String,
    /// Parameter group family, such as `postgres16`.
    #[arg(long)]
    #[serde(rename = "DBParameterGroupFamily")]
    pub db_parameter_group_family: String,
    /// Description of the group.
    #[arg(long)]
    pub description: String,
    /// Tags to attach (`Key=Value`).
    #[arg(long = "tag", value_name = "KEY=VALUE")]
    pub tags: Vec<tag::Tag>,
}

impl From<CreateDbParameterGroup> for CreateDbParameterGroupInput {
    fn from(create: CreateDbParameterGroup) -> Self {
        Self {
            db_parameter_group_name: create.db_parameter_group_name,
            db_parameter_group_family: create.db_parameter_group_family,
            description: create.description,
            tags: tag::into_sdk_tags(create.tags),
        }
    }
}

impl CreateDbParameterGroup {
    /// Execute the create DB parameter group operation.
    #[tracing::instrument(
        name = "rds_commands.create_db_parameter_group",
        skip_all,
        fields(resource = %self.db_parameter_group_name),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::create_db_parameter_group::CreateDbParameterGroupOutput,
        error::SdkError<operation::create_db_parameter_group::CreateDBParameterGroupError>,
    > {
        let create: CreateDbParameterGroupInput = self.into();
        client
            .create_db_parameter_group()
            .db_parameter_group_name(create.db_parameter_group_name)
            .db_parameter_group_family(create.db_parameter_group_family)
            .description(create.description)
            .set_tags(create.tags)
            .send()
            .await
    }
}

impl Command for CreateDbParameterGroup {
    const OPERATION: &'static str = "CreateDBParameterGroup";

    fn default_select() -> Select {
        Select::Field("DBParameterGroup".to_string())
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.db_parameter_group_name.clone())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBParameterGroup": response
                .db_parameter_group()
                .map(output::parameter_group::db_parameter_group),
        }))
    }
}
