//! Error type shared by every command, and the record it is rendered to.

use aws_sdk_rds::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use serde::Serialize;
use std::{error, fmt};

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Substrings the HTTP stack uses when a host name cannot be resolved.
const NAME_RESOLUTION_MARKERS: [&str; 5] = [
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname provided",
    "no such host is known",
];

/// Errors raised while binding, sending, or projecting a command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service (or the transport) rejected the call.
    #[error("{operation} failed: {message}")]
    Service {
        /// RDS API operation name.
        operation: &'static str,
        /// Service error code, when the service returned one.
        code: Option<String>,
        /// Human readable description.
        message: String,
    },
    /// The endpoint host name did not resolve.
    #[error(
        "{operation} could not resolve the RDS endpoint host name; check the configured region and endpoint URL ({message})"
    )]
    NameResolution {
        /// RDS API operation name.
        operation: &'static str,
        /// Underlying transport error.
        message: String,
    },
    /// The request could not be built from the bound parameters.
    #[error("{operation} request could not be built: {message}")]
    Construction {
        /// RDS API operation name.
        operation: &'static str,
        /// Underlying build error.
        message: String,
    },
    /// A command line value could not be parsed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// `--select` named a field the response does not have.
    #[error("response has no field named `{0}`")]
    UnknownField(String),
    /// `--select ^Name` named a parameter the command does not have.
    #[error("command has no parameter named `{0}`")]
    UnknownParameter(String),
    /// A mutating command needed confirmation but no terminal was attached.
    #[error("{operation} on `{target}` requires confirmation; pass --force to run it unattended")]
    ConfirmationRequired {
        /// RDS API operation name.
        operation: &'static str,
        /// Resource the operation would change.
        target: String,
    },
    /// The confirmation prompt itself failed.
    #[error("confirmation prompt failed: {0}")]
    Prompt(String),
    /// The command was stopped before the service answered.
    #[error("{0} was cancelled")]
    Cancelled(&'static str),
    /// Parameters or responses could not be turned into JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Rewrap an SDK error raised by `operation`.
    pub fn from_sdk<E, R>(operation: &'static str, err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + error::Error + 'static,
        R: fmt::Debug + 'static,
    {
        let message = DisplayErrorContext(&err).to_string();
        match &err {
            SdkError::ConstructionFailure(_) => Self::Construction { operation, message },
            SdkError::DispatchFailure(_) if is_name_resolution_failure(&err) => {
                Self::NameResolution { operation, message }
            }
            _ => {
                let service_error = err.as_service_error();
                Self::Service {
                    operation,
                    code: service_error
                        .and_then(|service_error| service_error.code())
                        .map(str::to_owned),
                    message: service_error
                        .and_then(|service_error| service_error.message())
                        .map_or(message, str::to_owned),
                }
            }
        }
    }

    /// Stable identifier written to the error record.
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service {
                code: Some(code), ..
            } => code.as_str(),
            Self::Service { code: None, .. } => "ServiceError",
            Self::NameResolution { .. } => "NameResolutionFailure",
            Self::Construction { .. } => "InvalidRequest",
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::UnknownField(_) => "UnknownField",
            Self::UnknownParameter(_) => "UnknownParameter",
            Self::ConfirmationRequired { .. } => "ConfirmationRequired",
            Self::Prompt(_) => "PromptFailed",
            Self::Cancelled(_) => "Cancelled",
            Self::Serialization(_) => "SerializationFailed",
        }
    }
}

/// Whether any error in the `source()` chain reports an unresolvable host.
pub fn is_name_resolution_failure(err: &(dyn error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        let message = err.to_string().to_ascii_lowercase();
        if NAME_RESOLUTION_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
        {
            return true;
        }
        current = err.source();
    }
    false
}

/// A failed command, rendered instead of crashing the host.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorRecord {
    /// RDS API operation that failed.
    pub operation: String,
    /// Stable error identifier.
    pub error_code: String,
    /// Human readable description.
    pub message: String,
}

impl ErrorRecord {
    /// Build the record for `err` raised by `operation`.
    pub fn new(operation: &str, err: &Error) -> Self {
        Self {
            operation: operation.to_string(),
            error_code: err.error_code().to_string(),
            message: err.to_string(),
        }
    }
}
