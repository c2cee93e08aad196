//! The uniform invocation pipeline every RDS command runs through.
//!
//! A command is bound parameters plus one SDK call. [`Invocation::run`] adds the
//! parts every command shares: the confirmation gate for mutating operations,
//! cancellation, and output selection.

use crate::common::select::Select;
use crate::{Error, Result};

use aws_sdk_rds::Client;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// A single RDS API operation with bound parameters.
pub trait Command: Serialize + Send + Sized {
    /// The RDS API operation name, e.g. `DescribeDBInstances`.
    const OPERATION: &'static str;

    /// The output emitted when the caller does not pass `--select`.
    fn default_select() -> Select;

    /// The resource a mutating operation changes. Non-mutating operations return `None`.
    fn confirmation_target(&self) -> Option<String> {
        None
    }

    /// Send the request and project the response to JSON.
    fn invoke(self, client: &Client) -> impl Future<Output = Result<Value>> + Send;
}

/// Asks the user whether a mutating operation should go ahead.
pub trait Prompt {
    /// Return `true` to proceed with `operation` on `target`.
    fn confirm(&self, operation: &'static str, target: &str) -> Result<bool>;
}

/// Prompts on the attached terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn confirm(&self, operation: &'static str, target: &str) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(format!("Perform {operation} on \"{target}\"?"))
            .default(false)
            .interact()
            .map_err(|err| Error::Prompt(err.to_string()))
    }
}

/// Refuses every mutating operation; used when no terminal is attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct NonInteractive;

impl Prompt for NonInteractive {
    fn confirm(&self, operation: &'static str, target: &str) -> Result<bool> {
        Err(Error::ConfirmationRequired {
            operation,
            target: target.to_string(),
        })
    }
}

/// Everything a command needs besides its own parameters.
pub struct Invocation<'a> {
    /// The RDS client calls are sent with.
    pub client: &'a Client,
    /// Output selection requested by the caller.
    pub select: Option<Select>,
    /// Skip the confirmation gate.
    pub force: bool,
    /// Confirmation prompt for mutating operations.
    pub prompt: &'a dyn Prompt,
    /// Cancelled when the host stops the command.
    pub cancellation: CancellationToken,
}

impl Invocation<'_> {
    /// Run `command`: confirm, send, and select.
    ///
    /// Returns `Ok(None)` when there is nothing to emit, either because the user
    /// declined the confirmation or because the selection is empty.
    pub async fn run<C: Command>(&self, command: C) -> Result<Option<Value>> {
        let parameters = serde_json::to_value(&command)?;
        if let Some(target) = command.confirmation_target() {
            if !self.force && !self.prompt.confirm(C::OPERATION, &target)? {
                tracing::info!(
                    operation = C::OPERATION,
                    resource = %target,
                    "operation not confirmed, skipping"
                );
                return Ok(None);
            }
        }
        tracing::debug!(operation = C::OPERATION, "sending request");
        let response = tokio::select! {
            response = command.invoke(self.client) => response?,
            () = self.cancellation.cancelled() => return Err(Error::Cancelled(C::OPERATION)),
        };
        let select = self.select.clone().unwrap_or_else(C::default_select);
        select.project(response, &parameters)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) fn client() -> Client {
        let config = aws_sdk_rds::Config::builder()
            .behavior_version(aws_sdk_rds::config::BehaviorVersion::latest())
            .region(aws_sdk_rds::config::Region::new("us-east-1"))
            .build();
        Client::from_conf(config)
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Fake {
        #[serde(rename = "DBInstanceIdentifier")]
        db_instance_identifier: String,
        #[serde(skip)]
        mutating: bool,
        #[serde(skip)]
        hang: bool,
    }

    impl Command for Fake {
        const OPERATION: &'static str = "FakeOperation";

        fn default_select() -> Select {
            Select::Field("DBInstance".to_string())
        }

        fn confirmation_target(&self) -> Option<String> {
            self.mutating.then(|| self.db_instance_identifier.clone())
        }

        async fn invoke(self, _client: &Client) -> Result<Value> {
            if self.hang {
                std::future::pending::<()>().await;
            }
            Ok(json!({
                "DBInstance": {"DBInstanceIdentifier": self.db_instance_identifier},
            }))
        }
    }

    struct Answer {
        answer: bool,
        asked: AtomicUsize,
    }

    impl Prompt for Answer {
        fn confirm(&self, _operation: &'static str, _target: &str) -> Result<bool> {
            self.asked.fetch_add(1, Ordering::SeqCst);
            Ok(self.answer)
        }
    }

    fn fake(mutating: bool) -> Fake {
        Fake {
            db_instance_identifier: "db-1".to_string(),
            mutating,
            hang: false,
        }
    }

    #[rstest]
    #[case::read_is_never_confirmed(false, false, false, 0, true)]
    #[case::confirmed(true, false, true, 1, true)]
    #[case::declined(true, false, false, 1, false)]
    #[case::forced(true, true, false, 0, true)]
    #[tokio::test]
    async fn test_confirmation_gate(
        #[case] mutating: bool,
        #[case] force: bool,
        #[case] answer: bool,
        #[case] expected_prompts: usize,
        #[case] expected_sent: bool,
    ) {
        let client = client();
        let prompt = Answer {
            answer,
            asked: AtomicUsize::new(0),
        };
        let invocation = Invocation {
            client: &client,
            select: None,
            force,
            prompt: &prompt,
            cancellation: CancellationToken::new(),
        };
        let actual = invocation.run(fake(mutating)).await.unwrap();
        assert_eq!(prompt.asked.load(Ordering::SeqCst), expected_prompts);
        let expected = expected_sent.then(|| json!({"DBInstanceIdentifier": "db-1"}));
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::default_select(None, Some(json!({"DBInstanceIdentifier": "db-1"})))]
    #[case::whole(
        Some(Select::Whole),
        Some(json!({"DBInstance": {"DBInstanceIdentifier": "db-1"}}))
    )]
    #[case::pass_through(
        Some(Select::Parameter("DBInstanceIdentifier".to_string())),
        Some(json!("db-1"))
    )]
    #[tokio::test]
    async fn test_select(#[case] select: Option<Select>, #[case] expected: Option<Value>) {
        let client = client();
        let invocation = Invocation {
            client: &client,
            select,
            force: false,
            prompt: &NonInteractive,
            cancellation: CancellationToken::new(),
        };
        let actual = invocation.run(fake(false)).await.unwrap();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_non_interactive_requires_force() {
        let client = client();
        let invocation = Invocation {
            client: &client,
            select: None,
            force: false,
            prompt: &NonInteractive,
            cancellation: CancellationToken::new(),
        };
        let actual = invocation.run(fake(true)).await;
        assert!(matches!(
            actual,
            Err(Error::ConfirmationRequired { operation: "FakeOperation", target }) if target == "db-1"
        ));
    }

    #[tokio::test]
    async fn test_cancellation() {
        let client = client();
        let cancellation = CancellationToken::new();
        cancellation.cancel();
        let invocation = Invocation {
            client: &client,
            select: None,
            force: true,
            prompt: &NonInteractive,
            cancellation,
        };
        let command = Fake {
            hang: true,
            ..fake(true)
        };
        let actual = invocation.run(command).await;
        assert!(matches!(actual, Err(Error::Cancelled("FakeOperation"))));
    }
}
