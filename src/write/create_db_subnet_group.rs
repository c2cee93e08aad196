use crate::command::Command;
use crate::common::{select::Select, tag};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// create DB subnet group operation
#[derive(Clone, Debug, Default, PartialEq)]
struct CreateDbSubnetGroupInput {
    db_subnet_group_name: String,
    db_subnet_group_description: String,
    subnet_ids: Vec<String>,
    tags: Option<Vec<types::Tag>>,
}

/// Create a DB subnet group.
///
/// The subnets must cover at least two availability zones of one VPC.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDbSubnetGroup {
    /// Name of the new group.
    #[arg(long)]
    #[serde(rename = "DBSubnetGroupName")]
    pub db_subnet_group_name: String,
    /// Description of the group.
    #[arg(long)]
    #[serde(rename = "DBSubnetGroupDescription")]
    pub db_subnet_group_description: String,
    /// Subnets in the group.
    #[arg(long = "subnet-id", required = true)]
    pub subnet_ids: Vec<String>,
    /// Tags to attach (`Key=Value`).
    #[arg(long = "tag", value_name = "KEY=VALUE")]
    pub tags: Vec<tag::Tag>,
}

impl From<CreateDbSubnetGroup> for CreateDbSubnetGroupInput {
    fn from(create: CreateDbSubnetGroup) -> Self {
        Self {
            db_subnet_group_name: create.db_subnet_group_name,
            db_subnet_group_description: create.db_subnet_group_description,
            subnet_ids: create.subnet_ids,
            tags: tag::into_sdk_tags(create.tags),
        }
    }
}

impl CreateDbSubnetGroup {
    /// Execute the create DB subnet group operation.
    #[tracing::instrument(
        name = "rds_commands.create_db_subnet_group",
        skip_all,
        fields(resource = %self.db_subnet_group_name),
        err
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::create_db_subnet_group::CreateDbSubnetGroupOutput,
        error::SdkError<operation::create_db_subnet_group::CreateDBSubnetGroupError>,
    > {
        let create: CreateDbSubnetGroupInput = self.into();
        client
            .create_db_subnet_group()
            .db_subnet_group_name(create.db_subnet_group_name)
            .db_subnet_group_description(create.db_subnet_group_description)
            .set_subnet_ids(Some(create.subnet_ids))
            .set_tags(create.tags)
            .send()
            .await
    }
}

impl Command for CreateDbSubnetGroup {
    const OPERATION: &'static str = "CreateDBSubnetGroup";

    fn default_select() -> Select {
        Select::Field("DBSubnetGroup".to_string())
    }

    fn confirmation_target(&self) -> Option<String> {
        Some(self.db_subnet_group_name.clone())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBSubnetGroup": response
                .db_subnet_group()
                .map(output::subnet_group::db_subnet_group),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::two_zones(
        CreateDbSubnetGroup {
            db_subnet_group_name: "a".to_string(),
            db_subnet_group_description: "b".to_string(),
            subnet_ids: vec!["subnet-1".to_string(), "subnet-2".to_string()],
            tags: Vec::new(),
        },
        CreateDbSubnetGroupInput {
            db_subnet_group_name: "a".to_string(),
            db_subnet_group_description: "b".to_string(),
            subnet_ids: vec!["subnet-1".to_string(), "subnet-2".to_string()],
            tags: None,
        }
    )]
    fn test_create_db_subnet_group(
        #[case] args: CreateDbSubnetGroup,
        #[case] expected: CreateDbSubnetGroupInput,
    ) {
        let actual: CreateDbSubnetGroupInput = args.into();
        assert_eq!(actual, expected);
    }
}
