use anyhow::{Context, Result};
use clap::Parser;
use rds_commands::cli::Cli;
use rds_commands::command::{DialoguerPrompt, Invocation, NonInteractive, Prompt};
use rds_commands::config::{self, Settings, StdEnvSource};
use rds_commands::error::ErrorRecord;
use rds_commands::telemetry;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let operation = cli.operation.name();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(operation, error = ?err, "command failed");
            let record = error_record(operation, &err);
            match serde_json::to_string(&record) {
                Ok(line) => eprintln!("{line}"),
                Err(_) => eprintln!("{err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings =
        Settings::load(cli.config.as_deref(), &StdEnvSource).context("Failed to load settings")?;
    cli.apply_overrides(&mut settings);
    settings.validate().context("Invalid settings")?;
    telemetry::init_tracing(&settings);

    let sdk_config = config::load_sdk_config(&settings).await;
    tracing::debug!(region = ?sdk_config.region(), "resolved AWS configuration");
    let client = aws_sdk_rds::Client::new(&sdk_config);

    let cancellation = CancellationToken::new();
    tokio::spawn(cancel_on_signal(cancellation.clone()));

    let prompt: &dyn Prompt = if io::stdin().is_terminal() {
        &DialoguerPrompt
    } else {
        &NonInteractive
    };
    let invocation = Invocation {
        client: &client,
        select: cli.select,
        force: cli.force,
        prompt,
        cancellation,
    };

    if let Some(output) = cli.operation.run(&invocation).await? {
        let rendered = if settings.pretty {
            serde_json::to_string_pretty(&output)
        } else {
            serde_json::to_string(&output)
        }
        .context("Failed to render output")?;
        println!("{rendered}");
    }
    Ok(())
}

fn error_record(operation: &str, err: &anyhow::Error) -> ErrorRecord {
    match err.downcast_ref::<rds_commands::Error>() {
        Some(err) => ErrorRecord::new(operation, err),
        None => ErrorRecord {
            operation: operation.to_string(),
            error_code: "Configuration".to_string(),
            message: format!("{err:#}"),
        },
    }
}

/// Cancel `token` on Ctrl+C or SIGTERM.
async fn cancel_on_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, cancelling");
    token.cancel();
}
