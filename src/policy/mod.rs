//! Opponent policy: what the automated side plays on its turn.
//!
//! The policy is trait-based so the engine can be driven by other
//! strategies in tests. `RandomOpponent` is the stock behavior: play a
//! uniformly random card from the deck whenever at least 3 elixir is
//! available.
//!
//! The policy only computes the move. Applying the damage and paying the
//! elixir is the engine's job.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCatalog};
use crate::core::{BattleRng, Side};
use crate::rules::{compute_damage, DamageRoll};

/// Elixir the opponent needs before it will play anything.
pub const MIN_OPPONENT_ELIXIR: f64 = 3.0;

/// The result of one opponent turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpponentMove {
    /// Card played, `None` on a skipped turn.
    pub card: Option<Card>,
    /// Damage dealt, 0 on a skipped turn.
    pub damage: i64,
    pub card_crit: bool,
    pub tower_crit: bool,
    /// Human-readable description naming the opponent.
    pub description: String,
}

impl OpponentMove {
    /// A turn where nothing is played.
    #[must_use]
    pub fn skip(opponent_name: &str) -> Self {
        Self {
            card: None,
            damage: 0,
            card_crit: false,
            tower_crit: false,
            description: format!("{} skipped turn (not enough elixir)", opponent_name),
        }
    }

    /// A turn where `card` was played for `roll`.
    #[must_use]
    pub fn play(opponent_name: &str, card: Card, roll: DamageRoll) -> Self {
        let description = format!(
            "{} used {} dealing {} damage",
            opponent_name, card, roll.damage
        );
        Self {
            card: Some(card),
            damage: roll.damage,
            card_crit: roll.card_crit,
            tower_crit: roll.tower_crit,
            description,
        }
    }

    #[must_use]
    pub fn is_skip(&self) -> bool {
        self.damage <= 0
    }

    /// The damage and crit flags as a roll.
    #[must_use]
    pub fn roll(&self) -> DamageRoll {
        DamageRoll {
            damage: self.damage,
            card_crit: self.card_crit,
            tower_crit: self.tower_crit,
        }
    }
}

/// Decides the opponent's play on each opponent-action tick.
pub trait OpponentPolicy: Send + Sync {
    /// Choose and resolve a play against the `defending` side.
    ///
    /// Must not mutate anything; a skipped turn is reported with damage 0.
    fn decide_and_act(
        &self,
        deck: &[Card],
        elixir: f64,
        opponent_name: &str,
        defending: &Side,
        catalog: &CardCatalog,
        rng: &mut BattleRng,
    ) -> OpponentMove;
}

/// Uniform random card choice.
#[derive(Clone, Debug)]
pub struct RandomOpponent {
    /// Minimum elixir before the opponent plays.
    pub min_elixir: f64,
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self {
            min_elixir: MIN_OPPONENT_ELIXIR,
        }
    }
}

impl OpponentPolicy for RandomOpponent {
    fn decide_and_act(
        &self,
        deck: &[Card],
        elixir: f64,
        opponent_name: &str,
        defending: &Side,
        catalog: &CardCatalog,
        rng: &mut BattleRng,
    ) -> OpponentMove {
        if elixir < self.min_elixir || deck.is_empty() {
            return OpponentMove::skip(opponent_name);
        }

        let card = &deck[rng.gen_index(deck.len())];
        let stats = catalog.lookup(&card.name);
        let roll = compute_damage(card, &stats, defending, rng);

        OpponentMove::play(opponent_name, card.clone(), roll)
    }
}
