use crate::command::Command;
use crate::common::{filter, pagination, select::Select};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// describe DB clusters operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeDbClustersInput {
    db_cluster_identifier: Option<String>,
    filters: Option<Vec<types::Filter>>,
    include_shared: Option<bool>,
    pagination: pagination::PaginationInput,
}

/// Describe Aurora and Multi-AZ DB clusters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbClusters {
    /// Identifier or ARN of a single DB cluster to describe.
    #[arg(long)]
    #[serde(rename = "DBClusterIdentifier")]
    pub db_cluster_identifier: Option<String>,
    /// Filters narrowing the clusters returned (`name=value[,value]`).
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    pub filters: Vec<filter::Filter>,
    /// Also return clusters shared from other accounts.
    #[arg(long)]
    pub include_shared: Option<bool>,
    /// Pagination controls.
    #[command(flatten)]
    #[serde(flatten)]
    pub pagination: pagination::Pagination,
}

impl From<DescribeDbClusters> for DescribeDbClustersInput {
    fn from(describe: DescribeDbClusters) -> Self {
        Self {
            db_cluster_identifier: describe.db_cluster_identifier,
            filters: filter::into_sdk_filters(describe.filters),
            include_shared: describe.include_shared,
            pagination: describe.pagination.into(),
        }
    }
}

impl DescribeDbClusters {
    /// Execute the describe DB clusters operation.
    #[tracing::instrument(name = "rds_commands.describe_db_clusters", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::describe_db_clusters::DescribeDbClustersOutput,
        error::SdkError<operation::describe_db_clusters::DescribeDBClustersError>,
    > {
        let describe: DescribeDbClustersInput = self.into();
        let builder = client
            .describe_db_clusters()
            .set_db_cluster_identifier(describe.db_cluster_identifier)
            .set_filters(describe.filters)
            .set_include_shared(describe.include_shared);
        crate::get_paginated_output!(
            builder,
            describe.pagination,
            operation::describe_db_clusters::DescribeDbClustersOutput,
            db_clusters,
            set_db_clusters
        )
    }
}

impl Command for DescribeDbClusters {
    const OPERATION: &'static str = "DescribeDBClusters";

    fn default_select() -> Select {
        Select::Field("DBClusters".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBClusters": response
                .db_clusters()
                .iter()
                .map(output::cluster::db_cluster)
                .collect::<Vec<_>>(),
            "Marker": response.marker(),
        }))
    }
}
