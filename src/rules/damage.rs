//! Damage model.
//!
//! Damage for one play:
//!
//! 1. base = card base damage + (level - 1) * 10
//! 2. plus a uniform jitter in `[-10, 10]`
//! 3. times 1.5 on a card crit and 1.2 on a tower crit (1.8 for both)
//! 4. floored, never below 1
//!
//! The tower crit uses the crit chance of the defending side's first
//! standing tower. Multipliers are applied with integer arithmetic so a
//! double crit on 100 is exactly 180.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardStats};
use crate::core::{BattleRng, Side};

/// Jitter is drawn uniformly from `-JITTER_SPREAD..=JITTER_SPREAD`.
pub const JITTER_SPREAD: i64 = 10;

/// Extra base damage per card level above 1.
pub const DAMAGE_PER_LEVEL: i64 = 10;

/// The resolved damage of one play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Final damage, always at least 1.
    pub damage: i64,
    /// The attacking card rolled a crit.
    pub card_crit: bool,
    /// The defending tower rolled a crit.
    pub tower_crit: bool,
}

impl DamageRoll {
    /// Replay-log suffix describing the crits, empty when there were none.
    #[must_use]
    pub fn annotation(&self) -> &'static str {
        match (self.card_crit, self.tower_crit) {
            (false, false) => "",
            (true, false) => " [card crit]",
            (false, true) => " [tower crit]",
            (true, true) => " [double crit]",
        }
    }
}

/// Damage before jitter and crits.
#[must_use]
pub fn base_damage(card: &Card, stats: &CardStats) -> i64 {
    stats.base_damage + (i64::from(card.level) - 1) * DAMAGE_PER_LEVEL
}

/// Roll damage for `card` against the `defending` side.
///
/// Draw order is jitter, card crit, tower crit.
pub fn compute_damage(card: &Card, stats: &CardStats, defending: &Side, rng: &mut BattleRng) -> DamageRoll {
    let jitter = rng.gen_range(-JITTER_SPREAD..=JITTER_SPREAD);
    let card_crit = rng.gen_bool(stats.crit_chance);
    let tower_crit = rng.gen_bool(defending.defending_crit_chance());

    resolve_damage(base_damage(card, stats), jitter, card_crit, tower_crit)
}

/// Deterministic half of the model: combine already-drawn values.
#[must_use]
pub fn resolve_damage(base: i64, jitter: i64, card_crit: bool, tower_crit: bool) -> DamageRoll {
    // multiplier as a fraction: 3/2 for a card crit, 6/5 for a tower crit
    let (mut num, mut den) = (1i64, 1i64);
    if card_crit {
        num *= 3;
        den *= 2;
    }
    if tower_crit {
        num *= 6;
        den *= 5;
    }

    let scaled = (base + jitter).saturating_mul(num).div_euclid(den);

    DamageRoll {
        damage: scaled.max(1),
        card_crit,
        tower_crit,
    }
}
