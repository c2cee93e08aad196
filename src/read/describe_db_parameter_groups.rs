use crate::command::Command;
use crate::common::{filter, pagination, select::Select};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// describe DB parameter groups operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeDbParameterGroupsInput {
    db_parameter_group_name: Option<String>,
    filters: Option<Vec<types::Filter>>,
    pagination: pagination::PaginationInput,
}

/// Describe DB parameter groups.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbParameterGroups {
    /// Name of a single DB parameter group.
    #[arg(long)]
    #[serde(rename = "DBParameterGroupName")]
    pub db_parameter_group_name: Option<String>,
    /// Filters narrowing the groups returned (`name=value[,value]`).
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    pub filters: Vec<filter::Filter>,
    /// Pagination controls.
    #[command(flatten)]
    #[serde(flatten)]
    pub pagination: pagination::Pagination,
}

impl From<DescribeDbParameterGroups> for DescribeDbParameterGroupsInput {
    fn from(describe: DescribeDbParameterGroups) -> Self {
        Self {
            db_parameter_group_name: describe.db_parameter_group_name,
            filters: filter::into_sdk_filters(describe.filters),
            pagination: describe.pagination.into(),
        }
    }
}

impl DescribeDbParameterGroups {
    /// Execute the describe DB parameter groups operation.
    #[tracing::instrument(name = "rds_commands.describe_db_parameter_groups", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::describe_db_parameter_groups::DescribeDbParameterGroupsOutput,
        error::SdkError<operation::describe_db_parameter_groups::DescribeDBParameterGroupsError>,
    > {
        let describe: DescribeDbParameterGroupsInput = self.into();
        let builder = client
            .describe_db_parameter_groups()
            .set_db_parameter_group_name(describe.db_parameter_group_name)
            .set_filters(describe.filters);
        crate::get_paginated_output!(
            builder,
            describe.pagination,
            operation::describe_db_parameter_groups::DescribeDbParameterGroupsOutput,
            db_parameter_groups,
            set_db_parameter_groups
        )
    }
}

impl Command for DescribeDbParameterGroups {
    const OPERATION: &'static str = "DescribeDBParameterGroups";

    fn default_select() -> Select {
        Select::Field("DBParameterGroups".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBParameterGroups": response
                .db_parameter_groups()
                .iter()
                .map(output::parameter_group::db_parameter_group)
                .collect::<Vec<_>>(),
            "Marker": response.marker(),
        }))
    }
}
