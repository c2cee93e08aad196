use crate::command::Command;
use crate::common::select::Select;
use crate::Error;

use aws_sdk_rds::{Client, error, operation};
use serde::Serialize;
use serde_json::{Value, json};

/// Remove tags from an RDS resource by key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveTagsFromResource {
    /// ARN of the resource.
    #[arg(long)]
    pub resource_name: String,
    /// Keys of the tags to remove.
    #[arg(long = "tag-key", required = true)]
    pub tag_keys: Vec<String>,
}

impl RemoveTagsFromResource {
    /// Execute the remove tags from resource operation.
    #[tracing::instrument(
        name = "rds_commands.remove_tags_from_resource",
        skip_all,
        fields(resource = %self.resource_name),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::remove_tags_from_resource::RemoveTagsFromResourceOutput,
        error::SdkError<operation::remove_tags_from_resource::RemoveTagsFromResourceError>,
    > {
        client
            .remove_tags_from_resource()
            .resource_name(self.resource_name)
            .set_tag_keys(Some(self.tag_keys))
            .send()
            .await
    }
}

impl Command for RemoveTagsFromResource {
    const OPERATION: &'static str = "RemoveTagsFromResource";

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
