use crate::command::Command;
use crate::common::{select::Select, tag};
use crate::Error;

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// add tags to resource operation
#[derive(Clone, Debug, Default, PartialEq)]
struct AddTagsToResourceInput {
    resource_name: String,
    tags: Vec<types::Tag>,
}

/// Add tags to an RDS resource, overwriting the values of existing keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct AddTagsToResource {
    /// ARN of the resource.
    #[arg(long)]
    pub resource_name: String,
    /// Tags to add (`Key=Value`).
    #[arg(long = "tag", value_name = "KEY=VALUE", required = true)]
    pub tags: Vec<tag::Tag>,
}

impl From<AddTagsToResource> for AddTagsToResourceInput {
    fn from(add: AddTagsToResource) -> Self {
        Self {
            resource_name: add.resource_name,
            tags: add.tags.into_iter().map(types::Tag::from).collect(),
        }
    }
}

impl AddTagsToResource {
    /// Execute the add tags to resource operation.
    #[tracing::instrument(
        name = "rds_commands.add_tags_to_resource",
        skip_all,
        fields(resource = %self.resource_name),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::add_tags_to_resource::AddTagsToResourceOutput,
        error::SdkError<operation::add_tags_to_resource::AddTagsToResourceError>,
    > {
        let add: AddTagsToResourceInput = self.into();
        client
            .add_tags_to_resource()
            .resource_name(add.resource_name)
            .set_tags(Some(add.tags))
            .send()
            .await
    }
}

impl Command for AddTagsToResource {
    const OPERATION: &'static str = "AddTagsToResource";

    fn default_select() -> Select {
        Select::Nothing
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.resource_name.clone())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        self.send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({}))
    }
}
