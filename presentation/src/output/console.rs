//! Console output formatter for quotes and subscription results

use colored::Colorize;
use epic_quotes_domain::{OutputFormat, Quote, QuoteCatalog, SubscriptionStatus};

/// Formats quotes and subscription results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single quote in the requested format
    pub fn format_quote(quote: &Quote, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::quote_text(quote),
            OutputFormat::Json => {
                serde_json::to_string_pretty(quote).unwrap_or_else(|_| "{}".to_string())
            }
        }
    }

    /// Format every quote in the catalog
    pub fn format_catalog(catalog: &QuoteCatalog, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => {
                let mut output = Self::header("Epic Quotes");
                output.push('\n');
                for (i, quote) in catalog.iter().enumerate() {
                    output.push_str(&format!("\n{}\n", format!("#{}", i + 1).dimmed()));
                    output.push_str(&Self::quote_text(quote));
                }
                output.push_str(&format!(
                    "\n{} {}\n",
                    catalog.len().to_string().bold(),
                    "quotes".dimmed()
                ));
                output
            }
            OutputFormat::Json => {
                let quotes: Vec<&Quote> = catalog.iter().collect();
                serde_json::to_string_pretty(&quotes).unwrap_or_else(|_| "[]".to_string())
            }
        }
    }

    /// Format the final status line of a subscription attempt
    pub fn format_subscription(status: SubscriptionStatus, message: &str) -> String {
        match status {
            SubscriptionStatus::Success => format!("{} {}", "v".green().bold(), message.green()),
            SubscriptionStatus::Error => format!("{} {}", "x".red().bold(), message.red()),
            SubscriptionStatus::Loading => format!("{} {}", "..".yellow(), "Subscribing..."),
            SubscriptionStatus::Idle => String::new(),
        }
    }

    fn quote_text(quote: &Quote) -> String {
        format!(
            "\n  {}\n\n{}\n  {}\n",
            format!("\"{}\"", quote.text).italic(),
            format!("      — {}", quote.author).cyan().bold(),
            format!("[{}]", quote.category).yellow()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
