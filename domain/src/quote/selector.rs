//! Quote selection and the display transition
//!
//! [`QuoteDeck`] tracks which catalog entry is on screen. A new quote is
//! never swapped in directly: [`QuoteDeck::begin_transition`] starts a short
//! fade, and [`QuoteDeck::poll`] commits a freshly drawn quote once the fade
//! duration has elapsed.

use super::catalog::QuoteCatalog;
use super::entities::Quote;
use rand::Rng;
use std::time::{Duration, Instant};

/// Default fade duration between two quotes
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Pick an index uniformly at random from `0..catalog.len()`
pub fn select_index<R: Rng>(catalog: &QuoteCatalog, rng: &mut R) -> usize {
    rng.random_range(0..catalog.len())
}

/// Pick a quote uniformly at random
pub fn select_quote<R: Rng>(catalog: &QuoteCatalog, rng: &mut R) -> &'static Quote {
    let index = select_index(catalog, rng);
    catalog.get(index).unwrap_or_else(|| catalog.first())
}

/// Currently displayed quote plus the in-flight transition, if any
#[derive(Debug, Clone)]
pub struct QuoteDeck {
    catalog: QuoteCatalog,
    current: usize,
    transition: Duration,
    animating_since: Option<Instant>,
}

impl QuoteDeck {
    pub fn new(catalog: QuoteCatalog) -> Self {
        Self {
            catalog,
            current: 0,
            transition: DEFAULT_TRANSITION,
            animating_since: None,
        }
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    pub fn catalog(&self) -> &QuoteCatalog {
        &self.catalog
    }

    /// Index of the quote on screen
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The quote on screen
    pub fn current(&self) -> &'static Quote {
        self.catalog.get(self.current).unwrap_or_else(|| self.catalog.first())
    }

    pub fn is_animating(&self) -> bool {
        self.animating_since.is_some()
    }

    pub fn transition(&self) -> Duration {
        self.transition
    }

    /// When the running transition will commit, if one is running
    pub fn commits_at(&self) -> Option<Instant> {
        self.animating_since.map(|since| since + self.transition)
    }

    /// Start fading out the current quote.
    ///
    /// Returns false (and does nothing) if a transition is already running.
    pub fn begin_transition(&mut self, now: Instant) -> bool {
        if self.animating_since.is_some() {
            return false;
        }
        self.animating_since = Some(now);
        true
    }

    /// Commit a new random quote if the running transition has finished.
    ///
    /// Returns the newly displayed quote when a commit happened.
    pub fn poll<R: Rng>(&mut self, now: Instant, rng: &mut R) -> Option<&'static Quote> {
        let started = self.animating_since?;
        if now.saturating_duration_since(started) < self.transition {
            return None;
        }
        self.current = select_index(&self.catalog, rng);
        self.animating_since = None;
        Some(self.current())
    }
}

impl Default for QuoteDeck {
    fn default() -> Self {
        Self::new(QuoteCatalog::builtin())
    }
}
