//! CLI entrypoint for Epic Quotes
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use epic_quotes_application::{GenerateQuoteUseCase, SubscribeUseCase, SubscriptionConfig};
use epic_quotes_domain::{DomainError, QuoteCatalog, Severity, SubscriptionStatus};
use epic_quotes_infrastructure::{ConfigLoader, FileConfig, HttpSubscriptionGateway};
use epic_quotes_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, ProgressReporter, SimpleProgress, TuiApp,
    TuiConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{Builder, Rotation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources());
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration (before logging, which depends on [tui] settings)
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let command = cli.command_or_default();
    let is_tui = command == Command::Tui;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, is_tui, file_config.tui.log_file);

    info!("Starting Epic Quotes");

    for issue in file_config.validate() {
        match issue.severity {
            Severity::Error => error!("Config: {}", issue.message),
            Severity::Warning => warn!("Config: {}", issue.message),
        }
    }

    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }

    let output_config = OutputConfig {
        format: file_config.output.format.unwrap_or_default(),
    };
    let subscription_config = subscription_config(&file_config, cli.endpoint.as_deref());
    let quote_config = file_config.quote.to_quote_config();

    let mut quotes = GenerateQuoteUseCase::new(QuoteCatalog::builtin(), quote_config);

    match command {
        Command::Quote { format } => {
            let format = output_config.resolve_format(format.map(Into::into));
            println!("{}", ConsoleFormatter::format_quote(quotes.random_quote(), format));
            Ok(ExitCode::SUCCESS)
        }

        Command::List { format } => {
            let format = output_config.resolve_format(format.map(Into::into));
            println!("{}", ConsoleFormatter::format_catalog(quotes.catalog(), format));
            Ok(ExitCode::SUCCESS)
        }

        Command::Subscribe { email, quiet } => {
            let subscribe = build_subscribe_use_case(subscription_config)?;
            let mut form = subscribe.new_form();
            form.set_email(email);

            let result = if quiet {
                subscribe.execute(&mut form, &SimpleProgress).await
            } else {
                subscribe.execute(&mut form, &ProgressReporter::new()).await
            };

            match result {
                Ok(_) | Err(DomainError::InvalidEmail(_)) => {}
                Err(e) => debug!("Subscription not attempted: {}", e),
            }

            Ok(if form.status() == SubscriptionStatus::Success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Command::Tui => {
            let subscribe = build_subscribe_use_case(subscription_config)?;
            let tui_config =
                TuiConfig::default().with_tick(Duration::from_millis(file_config.tui.tick_ms));

            let mut app = TuiApp::new(quotes, subscribe, tui_config);
            app.run().await.context("Terminal UI failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// === Dependency Injection ===

fn build_subscribe_use_case(config: SubscriptionConfig) -> Result<SubscribeUseCase> {
    let gateway = HttpSubscriptionGateway::from_config(&config)
        .context("Failed to create the subscription client")?;
    info!("Subscription endpoint: {}", gateway.endpoint());
    Ok(SubscribeUseCase::new(Arc::new(gateway), config))
}

/// File config with the `--endpoint` override applied
fn subscription_config(file_config: &FileConfig, endpoint: Option<&str>) -> SubscriptionConfig {
    let config = file_config.subscription.to_subscription_config();
    match endpoint {
        Some(endpoint) if !endpoint.trim().is_empty() => config.with_endpoint(endpoint),
        _ => config,
    }
}

fn verbosity_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

/// Initialize logging based on verbosity level.
///
/// The TUI owns the terminal, so in that mode logs go to a file in the
/// platform data directory (or nowhere if that is unavailable).
fn init_logging(verbose: u8, is_tui: bool, log_file: bool) -> Option<WorkerGuard> {
    let filter = verbosity_filter(verbose);

    if !is_tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return None;
    }

    if !log_file {
        return None;
    }

    let log_dir = log_dir()?;
    if std::fs::create_dir_all(&log_dir).is_err() {
        return None;
    }

    let appender = Builder::new()
        .rotation(Rotation::NEVER)
        .filename_prefix("epic-quotes")
        .filename_suffix("log")
        .build(&log_dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Some(guard)
}

fn log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("epic-quotes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_override() {
        let file_config = FileConfig::default();
        let config = subscription_config(&file_config, Some("http://localhost:8080/subscribe"));
        assert_eq!(config.endpoint, "http://localhost:8080/subscribe");
        assert_eq!(config.list, "epic-quotes");
    }

    #[test]
    fn test_blank_endpoint_override_is_ignored() {
        let file_config = FileConfig::default();
        let config = subscription_config(&file_config, Some("  "));
        assert_eq!(config.endpoint, "https://api.subscribe.dev/subscribe");
        assert_eq!(subscription_config(&file_config, None), config);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_filter(0).to_string(), "warn");
        assert_eq!(verbosity_filter(1).to_string(), "info");
        assert_eq!(verbosity_filter(2).to_string(), "debug");
        assert_eq!(verbosity_filter(9).to_string(), "trace");
    }

    #[test]
    fn test_log_dir_is_app_specific() {
        if let Some(dir) = log_dir() {
            assert!(dir.ends_with("epic-quotes"));
        }
    }
}
