//! Generate Quote use case.
//!
//! Owns the random source and hands out quotes, either directly
//! ([`GenerateQuoteUseCase::random_quote`]) or through a [`QuoteDeck`]
//! transition for the interactive view.

use crate::config::QuoteConfig;
use epic_quotes_domain::core::string::truncate;
use epic_quotes_domain::{Quote, QuoteCatalog, QuoteDeck, select_quote};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::debug;

/// Use case for picking quotes at random.
pub struct GenerateQuoteUseCase<R: Rng = StdRng> {
    catalog: QuoteCatalog,
    config: QuoteConfig,
    rng: R,
}

impl GenerateQuoteUseCase<StdRng> {
    /// Seeded from the operating system
    pub fn new(catalog: QuoteCatalog, config: QuoteConfig) -> Self {
        Self::with_rng(catalog, config, StdRng::from_os_rng())
    }
}

impl<R: Rng> GenerateQuoteUseCase<R> {
    pub fn with_rng(catalog: QuoteCatalog, config: QuoteConfig, rng: R) -> Self {
        Self {
            catalog,
            config,
            rng,
        }
    }

    pub fn catalog(&self) -> &QuoteCatalog {
        &self.catalog
    }

    /// A deck showing the first catalog entry, using the configured fade
    pub fn new_deck(&self) -> QuoteDeck {
        QuoteDeck::new(self.catalog).with_transition(self.config.transition)
    }

    /// Pick one quote immediately, with no transition
    pub fn random_quote(&mut self) -> &'static Quote {
        select_quote(&self.catalog, &mut self.rng)
    }

    /// Ask the deck for a new quote. Ignored while a fade is running.
    pub fn request(&self, deck: &mut QuoteDeck, now: Instant) -> bool {
        let started = deck.begin_transition(now);
        if !started {
            debug!("Quote transition already running; ignoring request");
        }
        started
    }

    /// Finish the running fade if it is due
    pub fn poll(&mut self, deck: &mut QuoteDeck, now: Instant) -> Option<&'static Quote> {
        let committed = deck.poll(now, &mut self.rng)?;
        debug!(
            "Showing quote #{}: {}",
            deck.current_index(),
            truncate(committed.text, 40)
        );
        Some(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn seeded() -> GenerateQuoteUseCase<StdRng> {
        GenerateQuoteUseCase::with_rng(
            QuoteCatalog::builtin(),
            QuoteConfig::default(),
            StdRng::seed_from_u64(2024),
        )
    }

    #[test]
    fn test_random_quote_in_catalog() {
        let mut uc = seeded();
        for _ in 0..50 {
            let quote = uc.random_quote();
            assert!(uc.catalog().contains(quote));
            assert!(quote.is_complete());
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut a = seeded();
        let mut b = seeded();
        for _ in 0..10 {
            assert_eq!(a.random_quote(), b.random_quote());
        }
    }

    #[test]
    fn test_new_deck_uses_configured_transition() {
        let uc = GenerateQuoteUseCase::with_rng(
            QuoteCatalog::builtin(),
            QuoteConfig::default().with_transition(Duration::from_millis(50)),
            StdRng::seed_from_u64(1),
        );
        assert_eq!(uc.new_deck().transition(), Duration::from_millis(50));
    }

    #[test]
    fn test_request_then_poll() {
        let mut uc = seeded();
        let mut deck = uc.new_deck();
        let start = Instant::now();

        assert!(uc.request(&mut deck, start));
        assert!(!uc.request(&mut deck, start));
        assert!(uc.poll(&mut deck, start).is_none());

        let committed = uc.poll(&mut deck, start + Duration::from_millis(300));
        assert!(committed.is_some());
        assert!(!deck.is_animating());
        assert_eq!(committed.unwrap(), deck.current());
    }
}
