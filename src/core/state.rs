//! Combat state: both sides' towers and elixir pools.
//!
//! `BattleState` is owned by the battle engine for the lifetime of one
//! battle and is only ever mutated from the engine's loop.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::BattleConfig;
use super::side::{Combatant, Side, TowerHit};

/// The mutable record of a battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    pub player: Side,
    pub opponent: Side,
    regen_amount: f64,
}

impl BattleState {
    /// Both sides at full health and starting elixir.
    #[must_use]
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            player: Side::new(config),
            opponent: Side::new(config),
            regen_amount: config.regen_amount,
        }
    }

    #[must_use]
    pub fn side(&self, who: Combatant) -> &Side {
        match who {
            Combatant::Player => &self.player,
            Combatant::Opponent => &self.opponent,
        }
    }

    pub fn side_mut(&mut self, who: Combatant) -> &mut Side {
        match who {
            Combatant::Player => &mut self.player,
            Combatant::Opponent => &mut self.opponent,
        }
    }

    /// Apply damage to `who`'s first standing tower.
    pub fn apply_damage(&mut self, who: Combatant, amount: i64) -> TowerHit {
        self.side_mut(who).apply_damage(amount)
    }

    /// The sole win/loss trigger.
    #[must_use]
    pub fn is_king_tower_down(&self, who: Combatant) -> bool {
        self.side(who).is_king_tower_down()
    }

    /// One regeneration step for `who`.
    pub fn regenerate(&mut self, who: Combatant) {
        let amount = self.regen_amount;
        self.side_mut(who).regenerate(amount);
    }

    /// Pay `cost` elixir from `who`'s pool if it covers it.
    pub fn spend(&mut self, who: Combatant, cost: f64) -> bool {
        self.side_mut(who).spend(cost)
    }
}

impl Index<Combatant> for BattleState {
    type Output = Side;

    fn index(&self, who: Combatant) -> &Self::Output {
        self.side(who)
    }
}

impl IndexMut<Combatant> for BattleState {
    fn index_mut(&mut self, who: Combatant) -> &mut Self::Output {
        self.side_mut(who)
    }
}
