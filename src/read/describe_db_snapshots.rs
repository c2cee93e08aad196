use crate::command::Command;
use crate::common::{filter, pagination, select::Select};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// describe DB snapshots operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeDbSnapshotsInput {
    db_instance_identifier: Option<String>,
    db_snapshot_identifier: Option<String>,
    snapshot_type: Option<String>,
    filters: Option<Vec<types::Filter>>,
    include_shared: Option<bool>,
    include_public: Option<bool>,
    pagination: pagination::PaginationInput,
}

/// Describe DB instance snapshots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbSnapshots {
    /// Only return snapshots of this DB instance.
    #[arg(long)]
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: Option<String>,
    /// Identifier or ARN of a single snapshot.
    #[arg(long)]
    #[serde(rename = "DBSnapshotIdentifier")]
    pub db_snapshot_identifier: Option<String>,
    /// `automated`, `manual`, `shared`, `public` or `awsbackup`.
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

impl From<DescribeDbSnapshots> for DescribeDbSnapshotsInput {
    fn from(describe: DescribeDbSnapshots) -> Self {
        Self {
            db_instance_identifier: describe.db_instance_identifier,
            db_snapshot_identifier: describe.db_snapshot_identifier,
            snapshot_type: describe.snapshot_type,
            filters: filter::into_sdk_filters(describe.filters),
            include_shared: describe.include_shared,
            include_public: describe.include_public,
            pagination: describe.pagination.into(),
        }
    }
}

impl DescribeDbSnapshots {
    /// Execute the describe DB snapshots operation.
    #[tracing::instrument(name = "rds_commands.describe_db_snapshots", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::describe_db_snapshots::DescribeDbSnapshotsOutput,
        error::SdkError<operation::describe_db_snapshots::DescribeDBSnapshotsError>,
    > {
        let describe: DescribeDbSnapshotsInput = self.into();
        let builder = client
            .describe_db_snapshots()
            .set_db_instance_identifier(describe.db_instance_identifier)
            .set_db_snapshot_identifier(describe.db_snapshot_identifier)
            .set_snapshot_type(describe.snapshot_type)
            .set_filters(describe.filters)
            .set_include_shared(describe.include_shared)
            .set_include_public(describe.include_public);
        crate::get_paginated_output!(
            builder,
            describe.pagination,
            operation::describe_db_snapshots::DescribeDbSnapshotsOutput,
            db_snapshots,
            set_db_snapshots
        )
    }
}

impl Command for DescribeDbSnapshots {
    const OPERATION: &'static str = "DescribeDBSnapshots";

    fn default_select() -> Select {
        Select::Field("DBSnapshots".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DBSnapshots": response
                .db_snapshots()
                .iter()
                .map(output::snapshot::db_snapshot)
                .collect::<Vec<_>>(),
            "Marker": response.marker(),
        }))
    }
}
