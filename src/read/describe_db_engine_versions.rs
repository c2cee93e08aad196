use crate::command::Command;
use crate::common::{filter, pagination, select::Select};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// describe DB engine versions operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeDbEngineVersionsInput {
    engine: Option<String>,
    engine_version: Option<String>,
    db_parameter_group_family: Option<String>,
    filters: Option<Vec<types::Filter>>,
    default_only: Option<bool>,
    include_all: Option<bool>,
    pagination: pagination::PaginationInput,
}

/// Describe the available database engines and their versions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbEngineVersions {
    /// Engine name, such as `postgres` or `aurora-mysql`.
    #[arg(long)]
    pub engine: Option<String>,
    /// Engine version, such as `16.3`.
    #[arg(long)]
    pub engine_version: Option<String>,
    /// Parameter group family, such as `postgres16`.
    #[arg(long)]
    #[serde(rename = "DBParameterGroupFamily")]
    pub db_parameter_group_family: Option<String>,
    /// Filters narrowing the versions returned (`name=value[,value]`).
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    pub filters: Vec<filter::Filter>,
    /// Only return the default version of each engine.
    #[arg(long)]
    pub default_only: bool,
    /// Include versions that are no longer available for new instances.
    #[arg(long)]
    pub include_all: bool,
    /// Pagination controls.
    #[command(flatten)]
    #[serde(flatten)]
    pub pagination: pagination::Pagination,
}

impl From<DescribeDbEngineVersions> for DescribeDbEngineVersionsInput {
    fn from(describe: DescribeDbEngineVersions) -> Self {
        Self {
            engine: describe.engine,
            engine_version: describe.engine_version,
            db_parameter_group_family: describe.db_parameter_group_family,
            filters: filter::into_sdk_filters(describe.filters),
            default_only: describe.default_only.then_some(true),
            include_all: describe.include_all.then_some(true),
            pagination: describe.pagination.into(),
        }
    }
}

impl DescribeDbEngineVersions {
    /// Execute the describe DB engine versions operation.
    #[tracing::instrument(name = "rds_commands.describe_db_engine_versions", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::describe_db_engine_versions::DescribeDbEngineVersionsOutput,
        error::SdkError<operation::describe_db_engine_versions::DescribeDBEngineVersionsError>,
    > {
        let describe: DescribeDbEngineVersionsInput = self.into();
        let builder = client
            .describe_db_engine_versions()
            .set_engine(describe.engine)
            .set_engine_version(describe.engine_version)
            .set_db_parameter_group_family(describe.db_parameter_group_family)
            .set_filters(describe.filters)
            .set_default_only(describe.default_only)
            .set_include_all(describe.include_all);
        crate::get_paginated_output!(
            builder,
            describe.pagination,
            operation::describe_db_engine_versions::DescribeDbEngineVersionsOutput,
            db_engine_versions,
            set_db_engine_versions
        )
    }
}

impl Command for DescribeDbEngineVersions {
    const OPERATION: &'static str = "DescribeDBEngineVersions";

    fn default_select() -> Select {
        Select::Field("DBEngineVersions".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBEngineVersions": response
                .db_engine_versions()
                .iter()
                .map(output::engine_version::db_engine_version)
                .collect::<Vec<_>>(),
            "Marker": response.marker(),
        }))
    }
}
