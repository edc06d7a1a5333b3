//! Progress reporting for the `subscribe` subcommand

use crate::output::console::ConsoleFormatter;
use epic_quotes_application::SubscriptionProgress;
use epic_quotes_domain::SubscriptionStatus;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while the request is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionProgress for ProgressReporter {
    fn on_status_change(&self, status: SubscriptionStatus, message: &str) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };

        match status {
            SubscriptionStatus::Loading => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message("Subscribing...");
                pb.enable_steady_tick(Duration::from_millis(80));
                *slot = Some(pb);
            }
            SubscriptionStatus::Success | SubscriptionStatus::Error => {
                let line = ConsoleFormatter::format_subscription(status, message);
                match slot.take() {
                    Some(pb) => pb.finish_with_message(line),
                    None => println!("{}", line),
                }
            }
            SubscriptionStatus::Idle => {
                if let Some(pb) = slot.take() {
                    pb.finish_and_clear();
                }
            }
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl SubscriptionProgress for SimpleProgress {
    fn on_status_change(&self, status: SubscriptionStatus, message: &str) {
        if status.is_settled() {
            println!("{}", ConsoleFormatter::format_subscription(status, message));
        }
    }
}
