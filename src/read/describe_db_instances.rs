use crate::command::Command;
use crate::common::{filter, pagination, select::Select};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// describe DB instances operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeDbInstancesInput {
    db_instance_identifier: Option<String>,
    filters: Option<Vec<types::Filter>>,
    pagination: pagination::PaginationInput,
}

/// Describe DB instances.
///
/// ```rust,no_run
/// use aws_sdk_rds::Client;
/// use rds_commands::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let describe = read::describe_db_instances::DescribeDbInstances {
///     db_instance_identifier: Some("orders-db".to_string()),
///     ..Default::default()
/// };
/// let output = describe.send(client).await?;
/// for instance in output.db_instances() {
///     println!("{:?}", instance.db_instance_status());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbInstances {
    /// Identifier or ARN of a single DB instance to describe.
    #[arg(long)]
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: Option<String>,
    /// Filters narrowing the instances returned (`name=value[,value]`).
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    pub filters: Vec<filter::Filter>,
    /// Pagination controls.
    #[command(flatten)]
    #[serde(flatten)]
    pub pagination: pagination::Pagination,
}

impl From<DescribeDbInstances> for DescribeDbInstancesInput {
    fn from(describe: DescribeDbInstances) -> Self {
        Self {
            db_instance_identifier: describe.db_instance_identifier,
            filters: filter::into_sdk_filters(describe.filters),
            pagination: describe.pagination.into(),
        }
    }
}

impl DescribeDbInstances {
    /// Execute the describe DB instances operation.
    #[tracing::instrument(name = "rds_commands.describe_db_instances", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::describe_db_instances::DescribeDbInstancesOutput,
        error::SdkError<operation::describe_db_instances::DescribeDBInstancesError>,
    > {
        let describe: DescribeDbInstancesInput = self.into();
        let builder = client
            .describe_db_instances()
            .set_db_instance_identifier(describe.db_instance_identifier)
            .set_filters(describe.filters);
        crate::get_paginated_output!(
            builder,
            describe.pagination,
            operation::describe_db_instances::DescribeDbInstancesOutput,
            db_instances,
            set_db_instances
        )
    }
}

impl Command for DescribeDbInstances {
    const OPERATION: &'static str = "DescribeDBInstances";

    fn default_select() -> Select {
        Select::Field("DBInstances".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBInstances": response
                .db_instances()
                .iter()
                .map(output::instance::db_instance)
                .collect::<Vec<_>>(),
            "Marker": response.marker(),
        }))
    }
}
