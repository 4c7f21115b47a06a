//! Card stat catalog.
//!
//! The `CardCatalog` maps card names to `CardStats`. Lookups never fail: a
//! name missing from the catalog resolves to `CardStats::FALLBACK`.
//!
//! The standard catalog is populated once per process and shared read-only.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::definition::CardStats;

/// Read-only mapping from card name to stats.
///
/// ## Example
///
/// ```
/// use clash_sim::cards::{CardCatalog, CardStats};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert("Bolt", CardStats::new(2, 150, 0, 0.1));
///
/// assert_eq!(catalog.lookup("Bolt").base_damage, 150);
/// assert_eq!(catalog.lookup("Unknown"), CardStats::FALLBACK);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, CardStats>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in card set.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.insert("Giant", CardStats::new(6, 140, 2500, 0.05));
        catalog.insert("Musketeer", CardStats::new(4, 100, 600, 0.15));
        catalog.insert("Fireball", CardStats::new(3, 200, 0, 0.10));
        catalog.insert("Archers", CardStats::new(3, 120, 350, 0.10));
        catalog.insert("Knight", CardStats::new(3, 200, 800, 0.10));
        catalog.insert("Arrows", CardStats::new(2, 100, 0, 0.05));
        catalog.insert("Goblin Barrel", CardStats::new(3, 60, 150, 0.20));
        catalog.insert("Minions", CardStats::new(3, 70, 200, 0.15));
        catalog
    }

    /// The process-wide standard catalog, built on first use.
    pub fn global() -> &'static CardCatalog {
        static GLOBAL: OnceLock<CardCatalog> = OnceLock::new();
        GLOBAL.get_or_init(CardCatalog::standard)
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, stats: CardStats) {
        self.cards.insert(name.into(), stats);
    }

    /// Exact lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardStats> {
        self.cards.get(name)
    }

    /// Lookup that substitutes the fallback entry on a miss.
    #[must_use]
    pub fn lookup(&self, name: &str) -> CardStats {
        match self.cards.get(name) {
            Some(stats) => *stats,
            None => {
                debug!(card = name, "card missing from catalog, using fallback stats");
                CardStats::FALLBACK
            }
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
