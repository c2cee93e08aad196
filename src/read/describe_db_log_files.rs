use crate::command::Command;
use crate::common::{filter, pagination, select::Select};
use crate::{Error, output};

use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// describe DB log files operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeDbLogFilesInput {
    db_instance_identifier: String,
    filename_contains: Option<String>,
    file_last_written: Option<i64>,
    file_size: Option<i64>,
    filters: Option<Vec<types::Filter>>,
    pagination: pagination::PaginationInput,
}

/// List the log files of a DB instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbLogFiles {
    /// Identifier of the DB instance.
    #[arg(long)]
    #[serde(rename = "DBInstanceIdentifier")]
    pub db_instance_identifier: String,
    /// Only return files whose name contains this string.
    #[arg(long)]
    pub filename_contains: Option<String>,
    /// Only return files written since this POSIX timestamp, in milliseconds.
    #[arg(long)]
    pub file_last_written: Option<i64>,
    /// Only return files larger than this many bytes.
    #[arg(long)]
    pub file_size: Option<i64>,
    /// Filters narrowing the files returned (`name=value[,value]`).
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    pub filters: Vec<filter::Filter>,
    /// Pagination controls.
    #[command(flatten)]
    #[serde(flatten)]
    pub pagination: pagination::Pagination,
}

impl From<DescribeDbLogFiles> for DescribeDbLogFilesInput {
    fn from(describe: DescribeDbLogFiles) -> Self {
        Self {
            db_instance_identifier: describe.db_instance_identifier,
            filename_contains: describe.filename_contains,
            file_last_written: describe.file_last_written,
            file_size: describe.file_size,
            filters: filter::into_sdk_filters(describe.filters),
            pagination: describe.pagination.into(),
        }
    }
}

impl DescribeDbLogFiles {
    /// Execute the describe DB log files operation.
    #[tracing::instrument(name = "rds_commands.describe_db_log_files", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::describe_db_log_files::DescribeDbLogFilesOutput,
        error::SdkError<operation::describe_db_log_files::DescribeDBLogFilesError>,
    > {
        let describe: DescribeDbLogFilesInput = self.into();
        let builder = client
            .describe_db_log_files()
            .db_instance_identifier(describe.db_instance_identifier)
            .set_filename_contains(describe.filename_contains)
            .set_file_last_written(describe.file_last_written)
            .set_file_size(describe.file_size)
            .set_filters(describe.filters);
        crate::get_paginated_output!(
            builder,
            describe.pagination,
            operation::describe_db_log_files::DescribeDbLogFilesOutput,
            describe_db_log_files,
            set_describe_db_log_files
        )
    }
}

impl Command for DescribeDbLogFiles {
    const OPERATION: &'static str = "DescribeDBLogFiles";

    fn default_select() -> Select {
        Select::Field("DescribeDBLogFiles".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "DescribeDBLogFiles": response
                .describe_db_log_files()
                .iter()
                .map(output::log_file::log_file)
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
    #[case::required(
        DescribeDbLogFiles {
            db_instance_identifier: "a".to_string(),
            ..Default::default()
        },
        DescribeDbLogFilesInput {
            db_instance_identifier: "a".to_string(),
            pagination: pagination::PaginationInput {
                auto_iterate: true,
                ..Default::default()
            },
            ..Default::default()
        }
    )]
    #[case::full(
        DescribeDbLogFiles {
            db_instance_identifier: "a".to_string(),
            filename_contains: Some("error".to_string()),
            file_last_written: Some(1_704_067_200_000),
            file_size: Some(1024),
            filters: Vec::new(),
            pagination: pagination::Pagination {
                marker: Some("b".to_string()),
                max_records: Some(50),
                no_auto_iteration: true,
            },
        },
        DescribeDbLogFilesInput {
            db_instance_identifier: "a".to_string(),
            filename_contains: Some("error".to_string()),
            file_last_written: Some(1_704_067_200_000),
            file_size: Some(1024),
            filters: None,
            pagination: pagination::PaginationInput {
                auto_iterate: false,
                marker: Some("b".to_string()),
                max_records: Some(50),
            },
        }
    )]
    fn test_describe_db_log_files(
        #[case] args: DescribeDbLogFiles,
        #[case] expected: DescribeDbLogFilesInput,
    ) {
        let actual: DescribeDbLogFilesInput = args.into();
        assert_eq!(actual, expected);
    }
}
