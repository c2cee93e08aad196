use crate::command::Command;
use crate::common::{filter, select::Select};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// list tags for resource operation
#[derive(Clone, Debug, Default, PartialEq)]
struct ListTagsForResourceInput {
    resource_name: String,
    filters: Option<Vec<types::Filter>>,
}

/// List the tags on an RDS resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResource {
    /// ARN of the resource.
    #[arg(long)]
    pub resource_name: String,
    /// Filters narrowing the tags returned (`name=value[,value]`).
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    pub filters: Vec<filter::Filter>,
}

impl From<ListTagsForResource> for ListTagsForResourceInput {
    fn from(list: ListTagsForResource) -> Self {
        Self {
            resource_name: list.resource_name,
            filters: filter::into_sdk_filters(list.filters),
        }
    }
}

impl ListTagsForResource {
    /// Execute the list tags for resource operation.
    #[tracing::instrument(name = "rds_commands.list_tags_for_resource", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::list_tags_for_resource::ListTagsForResourceOutput,
        error::SdkError<operation::list_tags_for_resource::ListTagsForResourceError>,
    > {
        let list: ListTagsForResourceInput = self.into();
        client
            .list_tags_for_resource()
            .resource_name(list.resource_name)
            .set_filters(list.filters)
            .send()
            .await
    }
}

impl Command for ListTagsForResource {
    const OPERATION: &'static str = "ListTagsForResource";

    fn default_select() -> Select {
        Select::Field("TagList".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({ "TagList": output::tags(response.tag_list()) }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::resource(
        ListTagsForResource {
            resource_name: "arn:aws:rds:us-east-1:123456789012:db:a".to_string(),
            filters: Vec::new(),
        },
        ListTagsForResourceInput {
            resource_name: "arn:aws:rds:us-east-1:123456789012:db:a".to_string(),
            filters: None,
        }
    )]
    fn test_list_tags_for_resource(
        #[case] args: ListTagsForResource,
        #[case] expected: ListTagsForResourceInput,
    ) {
        let actual: ListTagsForResourceInput = args.into();
        assert_eq!(actual, expected);
    }
}
