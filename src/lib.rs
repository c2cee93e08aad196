#![deny(missing_docs)]
#![recursion_limit = "256"]

//! # RDS Commands
//!
//! Typed, scriptable commands for Amazon RDS API operations.
//!
//! ## Overview
//!
//! Every RDS operation is one struct that:
//! - mirrors the request shape of the RDS API, with the API's own field names
//! - binds into an SDK request and sends it with [`aws_sdk_rds::Client`]
//! - projects the response to JSON with the API's field names
//!
//! Describe operations fetch every page by default. Mutating operations name
//! the resource they change so [`command::Invocation`] can ask for confirmation
//! first.
//!
//! ## Quick Example
//!
//! ```no_run
//! use aws_sdk_rds::Client;
//! use rds_commands::{common, read};
//!
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! let describe = read::describe_db_instances::DescribeDbInstances {
//!     filters: vec!["engine=postgres".parse()?],
//!     pagination: common::pagination::Pagination {
//!         max_records: Some(50),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! // every page is fetched and the instances are returned together
//! let output = describe.send(client).await?;
//! for instance in output.db_instances() {
//!     println!("{:?}", instance.db_instance_identifier());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Filters, tags, parameter changes, pagination and output selection
//! - [`mod@read`] - Describe and list operations
//! - [`mod@write`] - Create, modify, delete, start, stop and tag operations
//! - [`mod@command`] - The confirm, send and select pipeline
//! - [`mod@cli`] - The `rds` command tree

/// Command line surface of the `rds` binary.
pub mod cli;

/// The confirm, send and select pipeline shared by every operation.
pub mod command;

/// Shared parameter types, pagination and output selection.
pub mod common;

/// Layered settings and AWS SDK configuration.
pub mod config;

/// Crate error type and the error record.
pub mod error;

/// Projection of RDS response shapes to JSON.
pub mod output;

/// Describe and list operations.
pub mod read;

/// Tracing subscriber setup.
pub mod telemetry;

/// Create, modify, delete, start, stop and tag operations.
pub mod write;

pub use error::{Error, Result};
