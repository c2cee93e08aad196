use crate::command::Command;
use crate::common::{self, filter, pagination, select::Select};
use crate::{Error, output};

use aws_sdk_rds::primitives::{DateTime, DateTimeFormat};
use aws_sdk_rds::{Client, error, operation, types};
use serde::Serialize;
use serde_json::{Value, json};

/// describe events operation
#[derive(Clone, Debug, Default, PartialEq)]
struct DescribeEventsInput {
    source_identifier: Option<String>,
    source_type: Option<types::SourceType>,
    start_time: Option<DateTime>,
    end_time: Option<DateTime>,
    duration: Option<i32>,
    event_categories: Option<Vec<String>>,
    filters: Option<Vec<types::Filter>>,
    pagination: pagination::PaginationInput,
}

/// Describe events for DB instances, clusters, snapshots and parameter groups.
///
/// Without a time window the service returns the last hour of events.
#[derive(Clone, Debug, Default, PartialEq, Serialize, clap::Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEvents {
    /// Identifier of the event source.
    #[arg(long)]
    pub source_identifier: Option<String>,
    /// Kind of event source, such as `db-instance` or `db-cluster`.
    #[arg(long)]
    pub source_type: Option<String>,
    /// Start of the window, as an RFC 3339 timestamp.
    #[arg(long)]
    pub start_time: Option<String>,
    /// End of the window, as an RFC 3339 timestamp.
    #[arg(long)]
    pub end_time: Option<String>,
    /// Window length in minutes.
    #[arg(long)]
    pub duration: Option<i32>,
    /// Event categories to return.
    #[arg(long = "event-category")]
    pub event_categories: Vec<String>,
    /// Filters narrowing the events returned (`name=value[,value]`).
    #[arg(long = "filter", value_name = "NAME=VALUES")]
    pub filters: Vec<filter::Filter>,
    /// Pagination controls.
    #[command(flatten)]
    #[serde(flatten)]
    pub pagination: pagination::Pagination,
}

fn parse_time(time: Option<String>) -> Result<Option<DateTime>, error::BuildError> {
    time.map(|time| DateTime::from_str(&time, DateTimeFormat::DateTime))
        .transpose()
        .map_err(error::BuildError::other)
}

impl TryFrom<DescribeEvents> for DescribeEventsInput {
    type Error = error::BuildError;

    fn try_from(describe: DescribeEvents) -> Result<Self, Self::Error> {
        let operation = Self {
            source_identifier: describe.source_identifier,
            source_type: describe
                .source_type
                .as_deref()
                .map(types::SourceType::from),
            start_time: parse_time(describe.start_time)?,
            end_time: parse_time(describe.end_time)?,
            duration: describe.duration,
            event_categories: common::non_empty(describe.event_categories),
            filters: filter::into_sdk_filters(describe.filters),
            pagination: describe.pagination.into(),
        };
        Ok(operation)
    }
}

impl DescribeEvents {
    /// Execute the describe events operation.
    #[tracing::instrument(name = "rds_commands.describe_events", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::describe_events::DescribeEventsOutput,
        error::SdkError<operation::describe_events::DescribeEventsError>,
    > {
        let describe: DescribeEventsInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client
            .describe_events()
            .set_source_identifier(describe.source_identifier)
            .set_source_type(describe.source_type)
            .set_start_time(describe.start_time)
            .set_end_time(describe.end_time)
            .set_duration(describe.duration)
            .set_event_categories(describe.event_categories)
            .set_filters(describe.filters);
        crate::get_paginated_output!(
            builder,
            describe.pagination,
            operation::describe_events::DescribeEventsOutput,
            events,
            set_events
        )
    }
}

impl Command for DescribeEvents {
    const OPERATION: &'static str = "DescribeEvents";

    fn default_select() -> Select {
        Select::Field("Events".to_string())
    }

    async fn invoke(self, client: &Client) -> crate::Result<Value> {
        let response = self
            .send(client)
            .await
            .map_err(|err| Error::from_sdk(Self::OPERATION, err))?;
        Ok(json!({
            "Events": response
                .events()
                .iter()
                .map(output::event::event)
                .collect::<Vec<_>>(),
            "Marker": response.marker(),
        }))
    }
}
