//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use epic_quotes_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for printed quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for epic-quotes
#[derive(Parser, Debug)]
#[command(name = "epic-quotes")]
#[command(author, version, about = "Epic Quote Generator - Fuel your inspiration with powerful quotes")]
#[command(long_about = r#"
Epic Quotes shows a random inspirational quote and lets you subscribe
to a daily quote email.

Without a subcommand the interactive terminal UI starts.

Configuration files are loaded from (in priority order):
1. EPIC_QUOTES_* environment variables
2. --config <path>        Explicit config file
3. ./epic-quotes.toml     Project-level config
4. ~/.config/epic-quotes/config.toml   Global config

Example:
  epic-quotes
  epic-quotes quote --format json
  epic-quotes subscribe user@example.com
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Override the subscription endpoint URL
    #[arg(long, value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive terminal UI (default)
    Tui,

    /// Print one random quote and exit
    Quote {
        /// Output format (defaults to the configured format, then text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print every quote in the catalog
    List {
        /// Output format (defaults to the configured format, then text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Subscribe an email address to the daily quote list
    Subscribe {
        /// Email address to subscribe
        email: String,

        /// Suppress the progress spinner
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Cli {
    /// The subcommand to run, with `Tui` as the default
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_tui() {
        let cli = Cli::parse_from(["epic-quotes"]);
        assert_eq!(cli.command_or_default(), Command::Tui);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_quote_with_format() {
        let cli = Cli::parse_from(["epic-quotes", "quote", "--format", "json"]);
        assert_eq!(
            cli.command_or_default(),
            Command::Quote {
                format: Some(OutputFormat::Json)
            }
        );
    }

    #[test]
    fn test_subscribe_with_global_flags() {
        let cli = Cli::parse_from([
            "epic-quotes",
            "subscribe",
            "user@example.com",
            "--endpoint",
            "http://localhost:8080/subscribe",
            "-vv",
        ]);
        assert_eq!(
            cli.command_or_default(),
            Command::Subscribe {
                email: "user@example.com".to_string(),
                quiet: false
            }
        );
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:8080/subscribe"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
