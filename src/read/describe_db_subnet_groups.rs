use crate::command::Command;
use crate::common::{filter, pagination, select::Select};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// describe DB subnet groups operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeDbSubnetGroupsInput {
    db_subnet_group_name: Option<String>,
    filters: Option<Vec<types::Filter>>,
    pagination: pagination::PaginationInput,
}

/// Describe DB subnet groups.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbSubnetGroups {
    /// Name of a single DB subnet group.
    #[arg(long)]
    #[serde(rename = "DBSubnetGroupName")]
    pub db_subnet_group_name: Option<String>,
    /// Filters narrowing the groups returned (`name=value[,value]`).
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    pub filters: Vec<filter::Filter>,
    /// Pagination controls.
    #[command(flatten)]
    #[serde(flatten)]
    pub pagination: pagination::Pagination,
}

impl From<DescribeDbSubnetGroups> for DescribeDbSubnetGroupsInput {
    fn from(describe: DescribeDbSubnetGroups) -> Self {
        Self {
            db_subnet_group_name: describe.db_subnet_group_name,
            filters: filter::into_sdk_filters(describe.filters),
            pagination: describe.pagination.into(),
        }
    }
}

impl DescribeDbSubnetGroups {
    /// Execute the describe DB subnet groups operation.
    #[tracing::instrument(name = "rds_commands.describe_db_subnet_groups", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::describe_db_subnet_groups::DescribeDbSubnetGroupsOutput,
        error::SdkError<operation::describe_db_subnet_groups::DescribeDBSubnetGroupsError>,
    > {
        let describe: DescribeDbSubnetGroupsInput = self.into();
        let builder = client
            .describe_db_subnet_groups()
            .set_db_subnet_group_name(describe.db_subnet_group_name)
            .set_filters(describe.filters);
        crate::get_paginated_output!(
            builder,
            describe.pagination,
            operation::describe_db_subnet_groups::DescribeDbSubnetGroupsOutput,
            db_subnet_groups,
            set_db_subnet_groups
        )
    }
}

impl Command for DescribeDbSubnetGroups {
    const OPERATION: &'static str = "DescribeDBSubnetGroups";

    fn default_select() -> Select {
        Select::Field("DBSubnetGroups".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBSubnetGroups": response
                .db_subnet_groups()
                .iter()
                .map(output::subnet_group::db_subnet_group)
                .collect::<Vec<_>>(),
            "Marker": response.marker(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty(
        DescribeDbSubnetGroups::default(),
        DescribeDbSubnetGroupsInput {
            pagination: pagination::PaginationInput {
                auto_iterate: true,
                ..Default::default()
            },
            ..Default::default()
        }
    )]
    #[case::name(
        DescribeDbSubnetGroups {
            db_subnet_group_name: Some("a".to_string()),
            ..Default::default()
        },
        DescribeDbSubnetGroupsInput {
            db_subnet_group_name: Some("a".to_string()),
            pagination: pagination::PaginationInput {
                auto_iterate: true,
                ..Default::default()
            },
            ..Default::default()
        }
    )]
    fn test_describe_db_subnet_groups(
        #[case] args: DescribeDbSubnetGroups,
        #[case] expected: DescribeDbSubnetGroupsInput,
    ) {
        let actual: DescribeDbSubnetGroupsInput = args.into();
        assert_eq!(actual, expected);
    }
}
