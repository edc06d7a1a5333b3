//! The built-in quote catalog
//!
//! A fixed, ordered list embedded at build time. Indices into this list are
//! the only way the rest of the system refers to a quote.

use super::entities::Quote;

/// Every quote the application can show, in display order
pub static EPIC_QUOTES: [Quote; 20] = [
    Quote::new(
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
        "Inspiration",
    ),
    Quote::new(
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
        "Leadership",
    ),
    Quote::new(
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
        "Dreams",
    ),
    Quote::new(
        "It does not matter how slowly you go as long as you do not stop.",
        "Confucius",
        "Perseverance",
    ),
    Quote::new(
        "Everything you've ever wanted is on the other side of fear.",
        "George Addair",
        "Courage",
    ),
    Quote::new(
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
        "Success",
    ),
    Quote::new(
        "Believe you can and you're halfway there.",
        "Theodore Roosevelt",
        "Belief",
    ),
    Quote::new(
        "The only impossible journey is the one you never begin.",
        "Tony Robbins",
        "Action",
    ),
    Quote::new(
        "Your time is limited, don't waste it living someone else's life.",
        "Steve Jobs",
        "Life",
    ),
    Quote::new(
        "The way to get started is to quit talking and begin doing.",
        "Walt Disney",
        "Action",
    ),
    Quote::new(
        "Don't let yesterday take up too much of today.",
        "Will Rogers",
        "Wisdom",
    ),
    Quote::new(
        "You learn more from failure than from success. Don't let it stop you.",
        "Unknown",
        "Growth",
    ),
    Quote::new(
        "It's not whether you get knocked down, it's whether you get up.",
        "Vince Lombardi",
        "Resilience",
    ),
    Quote::new(
        "If you are working on something that you really care about, you don't have to be pushed.",
        "Steve Jobs",
        "Passion",
    ),
    Quote::new(
        "People who are crazy enough to think they can change the world, are the ones who do.",
        "Rob Siltanen",
        "Vision",
    ),
    Quote::new(
        "Failure will never overtake me if my determination to succeed is strong enough.",
        "Og Mandino",
        "Determination",
    ),
    Quote::new(
        "We may encounter many defeats but we must not be defeated.",
        "Maya Angelou",
        "Strength",
    ),
    Quote::new(
        "Knowing is not enough; we must apply. Wishing is not enough; we must do.",
        "Johann Wolfgang Von Goethe",
        "Action",
    ),
    Quote::new(
        "Whether you think you can or think you can't, you're right.",
        "Henry Ford",
        "Mindset",
    ),
    Quote::new(
        "The two most important days in your life are the day you are born and the day you find out why.",
        "Mark Twain",
        "Purpose",
    ),
];

/// Read-only view over a non-empty, ordered list of quotes
#[derive(Debug, Clone, Copy)]
pub struct QuoteCatalog {
    quotes: &'static [Quote],
}

impl QuoteCatalog {
    /// The built-in catalog
    pub fn builtin() -> Self {
        Self {
            quotes: &EPIC_QUOTES,
        }
    }

    /// Wrap an arbitrary static list, returning None if it is empty
    pub fn try_from_static(quotes: &'static [Quote]) -> Option<Self> {
        if quotes.is_empty() {
            None
        } else {
            Some(Self { quotes })
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Quote> {
        self.quotes.get(index)
    }

    /// The first quote, shown before anything has been selected
    pub fn first(&self) -> &'static Quote {
        &self.quotes[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Quote> {
        self.quotes.iter()
    }

    /// Returns true if `quote` is one of the catalog entries
    pub fn contains(&self, quote: &Quote) -> bool {
        self.quotes.contains(quote)
    }
}

impl Default for QuoteCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
