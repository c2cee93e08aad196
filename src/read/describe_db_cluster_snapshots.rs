use crate::command::Command;
use crate::common::{filter, pagination, select::Select};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// describe DB cluster snapshots operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeDbClusterSnapshotsInput {
    db_cluster_identifier: Option<String>,
    db_cluster_snapshot_identifier: Option<String>,
    snapshot_type: Option<String>,
    filters: Option<Vec<types::Filter>>,
    include_shared: Option<bool>,
    include_public: Option<bool>,
    pagination: pagination::PaginationInput,
}

/// Describe DB cluster snapshots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbClusterSnapshots {
    /// Only return snapshots of this DB cluster.
    #[arg(long)]
    #[serde(rename = "DBClusterIdentifier")]
    pub db_cluster_identifier: Option<String>,
    /// Identifier or ARN of a single cluster snapshot.
    #[arg(long)]
    #[serde(rename = "DBClusterSnapshotIdentifier")]
    pub db_cluster_snapshot_identifier: Option<String>,
    /// `automated`, `manual`, `shared` or `public`.
    #[arg(long)]
    pub snapshot_type: Option<String>,
    /// Filters narrowing the snapshots returned (`name=value[,value]`).
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    pub filters: Vec<filter::Filter>,
    /// Include manual snapshots shared from other accounts.
    #[arg(long)]
    pub include_shared: Option<bool>,
    /// Include public manual snapshots.
    #[arg(long)]
    pub include_public: Option<bool>,
    /// Pagination controls.
    #[command(flatten)]
    #[serde(flatten)]
    pub pagination: pagination::Pagination,
}

impl From<DescribeDbClusterSnapshots> for DescribeDbClusterSnapshotsInput {
    fn from(describe: DescribeDbClusterSnapshots) -> Self {
        Self {
            db_cluster_identifier: describe.db_cluster_identifier,
            db_cluster_snapshot_identifier: describe.db_cluster_snapshot_identifier,
            snapshot_type: describe.snapshot_type,
            filters: filter::into_sdk_filters(describe.filters),
            include_shared: describe.include_shared,
            include_public: describe.include_public,
            pagination: describe.pagination.into(),
        }
    }
}

impl DescribeDbClusterSnapshots {
    /// Execute the describe DB cluster snapshots operation.
    #[tracing::instrument(name = "rds_commands.describe_db_cluster_snapshots", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::describe_db_cluster_snapshots::DescribeDbClusterSnapshotsOutput,
        error::SdkError<operation::describe_db_cluster_snapshots::DescribeDBClusterSnapshotsError>,
    > {
        let describe: DescribeDbClusterSnapshotsInput = self.into();
        let builder = client
            .describe_db_cluster_snapshots()
            .set_db_cluster_identifier(describe.db_cluster_identifier)
            .set_db_cluster_snapshot_identifier(describe.db_cluster_snapshot_identifier)
            .set_snapshot_type(describe.snapshot_type)
            .set_filters(describe.filters)
            .set_include_shared(describe.include_shared)
            .set_include_public(describe.include_public);
        crate::get_paginated_output!(
            builder,
            describe.pagination,
            operation::describe_db_cluster_snapshots::DescribeDbClusterSnapshotsOutput,
            db_cluster_snapshots,
            set_db_cluster_snapshots
        )
    }
}

impl Command for DescribeDbClusterSnapshots {
    const OPERATION: &'static str = "DescribeDBClusterSnapshots";

    fn default_select() -> Select {
        Select::Field("DBClusterSnapshots".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBClusterSnapshots": response
                .db_cluster_snapshots()
                .iter()
                .map(output::snapshot::db_cluster_snapshot)
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
        DescribeDbClusterSnapshots::default(),
        DescribeDbClusterSnapshotsInput {
            pagination: pagination::PaginationInput {
                auto_iterate: true,
                ..Default::default()
            },
            ..Default::default()
        }
    )]
    #[case::full(
        DescribeDbClusterSnapshots {
            db_cluster_identifier: Some("a".to_string()),
            db_cluster_snapshot_identifier: Some("b".to_string()),
            snapshot_type: Some("manual".to_string()),
            filters: vec![
                filter::Filter {
                    name: "db-cluster-id".to_string(),
                    values: vec!["a".to_string()],
                },
            ],
            include_shared: Some(true),
            include_public: Some(false),
            pagination: pagination::Pagination {
                no_auto_iteration: true,
                ..Default::default()
            },
        },
        DescribeDbClusterSnapshotsInput {
            db_cluster_identifier: Some("a".to_string()),
            db_cluster_snapshot_identifier: Some("b".to_string()),
            snapshot_type: Some("manual".to_string()),
            filters: Some(
                vec![
                    types::Filter::builder()
                        .name("db-cluster-id")
                        .values("a")
                        .build(),
                ]
            ),
            include_shared: Some(true),
            include_public: Some(false),
            pagination: pagination::PaginationInput::default(),
        }
    )]
    fn test_describe_db_cluster_snapshots(
        #[case] args: DescribeDbClusterSnapshots,
        #[case] expected: DescribeDbClusterSnapshotsInput,
    ) {
        let actual: DescribeDbClusterSnapshotsInput = args.into();
        assert_eq!(actual, expected);
    }
}
