//! Projection of RDS response shapes to JSON.
//!
//! Field names follow the RDS API (`DBInstanceIdentifier`, `MultiAZ`, ...), so
//! `--select` takes the same names the service documentation uses. Timestamps are
//! rendered as RFC 3339 strings.

/// Account quotas.
pub mod account;

/// DB clusters and their members.
pub mod cluster;

/// Engine versions.
pub mod engine_version;

/// Events.
pub mod event;

/// DB instances.
pub mod instance;

/// Log file descriptions.
pub mod log_file;

/// Parameter groups and parameters.
pub mod parameter_group;

/// DB snapshots and DB cluster snapshots.
pub mod snapshot;

/// Subnet groups.
pub mod subnet_group;

use aws_sdk_rds::primitives::{DateTime, DateTimeFormat};
use aws_sdk_rds::types;
use serde_json::{Value, json};

pub(crate) fn timestamp(value: Option<&DateTime>) -> Option<String> {
    value.and_then(|value| value.fmt(DateTimeFormat::DateTime).ok())
}

/// A tag.
pub fn tag(tag: &types::Tag) -> Value {
    json!({
        "Key": tag.key,
        "Value": tag.value,
    })
}

/// A list of tags.
pub fn tags(tags: &[types::Tag]) -> Value {
    Value::Array(tags.iter().map(tag).collect())
}
