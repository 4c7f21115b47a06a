//! Cards and card stats.
//!
//! A `Card` is what a deck holds: a name and a level, as supplied by the
//! player data source. `CardStats` is the static catalog entry the name
//! resolves to.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A card in a deck. Immutable for the duration of a battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card name, used as the catalog key.
    pub name: String,

    /// Card level (1-based).
    pub level: u32,
}

impl Card {
    #[must_use]
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Level {})", self.name, self.level)
    }
}

/// A deck of cards.
/// SmallVec keeps the usual eight-card deck inline.
pub type Deck = SmallVec<[Card; 8]>;

/// Static stats for a card name.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardStats {
    /// Elixir cost to play the card.
    pub elixir_cost: u32,

    /// Damage before level bonus, jitter and crits.
    pub base_damage: i64,

    /// Nominal hit points (informational, unused by damage resolution).
    pub hit_points: i64,

    /// Chance that a play of this card is a card crit.
    pub crit_chance: f64,
}

impl CardStats {
    /// Entry substituted for card names missing from the catalog.
    pub const FALLBACK: CardStats = CardStats::new(3, 50, 100, 0.05);

    #[must_use]
    pub const fn new(elixir_cost: u32, base_damage: i64, hit_points: i64, crit_chance: f64) -> Self {
        Self {
            elixir_cost,
            base_damage,
            hit_points,
            crit_chance,
        }
    }

    /// Cost as an elixir amount.
    #[must_use]
    pub fn cost(&self) -> f64 {
        f64::from(self.elixir_cost)
    }
}
