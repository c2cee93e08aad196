use crate::command::Command;
use crate::common::{filter, pagination, select::Select};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// describe DB parameters operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeDbParametersInput {
    db_parameter_group_name: String,
    source: Option<String>,
    filters: Option<Vec<types::Filter>>,
    pagination: pagination::PaginationInput,
}

/// List the parameters of one DB parameter group.
///
/// ```rust,no_run
/// use aws_sdk_rds::Client;
/// use rds_commands::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let describe = read::describe_db_parameters::DescribeDbParameters {
///     db_parameter_group_name: "orders-pg16".to_string(),
///     source: Some("user".to_string()),
///     ..Default::default()
/// };
/// let output = describe.send(client).await?;
/// for parameter in output.parameters() {
///     println!("{:?} = {:?}", parameter.parameter_name(), parameter.parameter_value());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbParameters {
    /// Name of the DB parameter group.
    #[arg(long)]
    #[serde(rename = "DBParameterGroupName")]
    pub db_parameter_group_name: String,
    /// Only return parameters from this source: `user`, `system` or `engine-default`.
    #[arg(long)]
    pub source: Option<String>,
    /// Filters narrowing the parameters returned (`name=value[,value]`).
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    pub filters: Vec<filter::Filter>,
    /// Pagination controls.
    #[command(flatten)]
    #[serde(flatten)]
    pub pagination: pagination::Pagination,
}

impl From<DescribeDbParameters> for DescribeDbParametersInput {
    fn from(describe: DescribeDbParameters) -> Self {
        Self {
            db_parameter_group_name: describe.db_parameter_group_name,
            source: describe.source,
            filters: filter::into_sdk_filters(describe.filters),
            pagination: describe.pagination.into(),
        }
    }
}

impl DescribeDbParameters {
    /// Execute the describe DB parameters operation.
    #[tracing::instrument(name = "rds_commands.describe_db_parameters", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::describe_db_parameters::DescribeDbParametersOutput,
        error::SdkError<operation::describe_db_parameters::DescribeDBParametersError>,
    > {
        let describe: DescribeDbParametersInput = self.into();
        let builder = client
            .describe_db_parameters()
            .db_parameter_group_name(describe.db_parameter_group_name)
            .set_source(describe.source)
            .set_filters(describe.filters);
        crate::get_paginated_output!(
            builder,
            describe.pagination,
            operation::describe_db_parameters::DescribeDbParametersOutput,
            parameters,
            set_parameters
        )
    }
}

impl Command for DescribeDbParameters {
    const OPERATION: &'static str = "DescribeDBParameters";

    fn default_select() -> Select {
        Select::Field("Parameters".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "Parameters": response
                .parameters()
                .iter()
                .map(output::parameter_group::parameter)
                .collect::<Vec<_>>(),
            "Marker": response.marker(),
        }))
    }
}
