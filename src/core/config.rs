//! Battle configuration.
//!
//! Tower stats, elixir limits, tick periods and the time limit are data, not
//! logic. A battle is set up from a `BattleConfig`:
//!
//! ```
//! use std::time::Duration;
//! use clash_sim::core::{BattleConfig, TowerSpec};
//!
//! let config = BattleConfig::default()
//!     .with_guard_tower(TowerSpec::new(500))
//!     .with_time_limit(Duration::from_secs(60));
//!
//! assert_eq!(config.guard_tower.hit_points, 500);
//! assert_eq!(config.king_tower.hit_points, 2000);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Stats for one kind of tower.
///
/// Attack and defense are informational; only hit points and crit chance
/// take part in damage resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TowerSpec {
    /// Starting (and maximum) hit points.
    pub hit_points: i64,

    /// Base attack (informational).
    pub attack: i64,

    /// Base defense (informational).
    pub defense: i64,

    /// Chance that a hit on this tower becomes a tower crit.
    pub crit_chance: f64,
}

impl TowerSpec {
    /// Create a tower spec with the given hit points and no crit chance.
    #[must_use]
    pub const fn new(hit_points: i64) -> Self {
        Self {
            hit_points,
            attack: 0,
            defense: 0,
            crit_chance: 0.0,
        }
    }

    /// Set attack and defense.
    #[must_use]
    pub const fn with_stats(mut self, attack: i64, defense: i64) -> Self {
        self.attack = attack;
        self.defense = defense;
        self
    }

    /// Set the crit chance.
    #[must_use]
    pub const fn with_crit_chance(mut self, chance: f64) -> Self {
        self.crit_chance = chance;
        self
    }
}

/// Complete battle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Stats shared by both guard towers of a side.
    pub guard_tower: TowerSpec,

    /// Stats of the king tower.
    pub king_tower: TowerSpec,

    /// Elixir each side starts with.
    pub starting_elixir: f64,

    /// Elixir cap.
    pub max_elixir: f64,

    /// Elixir gained by each side per regeneration tick.
    pub regen_amount: f64,

    /// Wall-clock period of the regeneration tick.
    pub regen_period: Duration,

    /// Wall-clock period of the opponent-action tick.
    pub opponent_period: Duration,

    /// Battles running longer than this end in a draw.
    pub time_limit: Duration,

    /// Elixir the opponent pays per play, independent of the card played.
    pub opponent_play_cost: f64,

    /// Input line that surrenders the battle.
    pub surrender_token: String,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            guard_tower: TowerSpec::new(1000).with_stats(90, 40).with_crit_chance(0.10),
            king_tower: TowerSpec::new(2000).with_stats(120, 60).with_crit_chance(0.15),
            starting_elixir: 10.0,
            max_elixir: 10.0,
            regen_amount: 1.0,
            regen_period: Duration::from_secs(1),
            opponent_period: Duration::from_secs(5),
            time_limit: Duration::from_secs(180),
            opponent_play_cost: 3.0,
            surrender_token: "0".to_string(),
        }
    }
}

impl BattleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set guard tower stats.
    #[must_use]
    pub fn with_guard_tower(mut self, spec: TowerSpec) -> Self {
        self.guard_tower = spec;
        self
    }

    /// Set king tower stats.
    #[must_use]
    pub fn with_king_tower(mut self, spec: TowerSpec) -> Self {
        self.king_tower = spec;
        self
    }

    /// Set the starting elixir (clamped to the cap when the battle starts).
    #[must_use]
    pub fn with_starting_elixir(mut self, elixir: f64) -> Self {
        self.starting_elixir = elixir;
        self
    }

    /// Set the regeneration period.
    #[must_use]
    pub fn with_regen_period(mut self, period: Duration) -> Self {
        self.regen_period = period;
        self
    }

    /// Set the opponent-action period.
    #[must_use]
    pub fn with_opponent_period(mut self, period: Duration) -> Self {
        self.opponent_period = period;
        self
    }

    /// Set the time limit after which the battle is a draw.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Set the surrender token.
    #[must_use]
    pub fn with_surrender_token(mut self, token: impl Into<String>) -> Self {
        self.surrender_token = token.into();
        self
    }

    /// Set every tower's crit chance to zero.
    ///
    /// Handy for tests that need predictable damage.
    #[must_use]
    pub fn without_tower_crits(mut self) -> Self {
        self.guard_tower.crit_chance = 0.0;
        self.king_tower.crit_chance = 0.0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BattleConfig::default();

        assert_eq!(config.guard_tower.hit_points, 1000);
        assert_eq!(config.king_tower.hit_points, 2000);
        assert_eq!(config.starting_elixir, 10.0);
        assert_eq!(config.max_elixir, 10.0);
        assert_eq!(config.regen_period, Duration::from_secs(1));
        assert_eq!(config.opponent_period, Duration::from_secs(5));
        assert_eq!(config.time_limit, Duration::from_secs(180));
        assert_eq!(config.opponent_play_cost, 3.0);
        assert_eq!(config.surrender_token, "0");
    }

    #[test]
    fn test_builder() {
        let config = BattleConfig::new()
            .with_king_tower(TowerSpec::new(300).with_crit_chance(0.5))
            .with_starting_elixir(4.0)
            .with_regen_period(Duration::from_millis(250))
            .with_opponent_period(Duration::from_secs(2))
            .with_surrender_token("q");

        assert_eq!(config.king_tower.hit_points, 300);
        assert_eq!(config.king_tower.crit_chance, 0.5);
        assert_eq!(config.starting_elixir, 4.0);
        assert_eq!(config.regen_period, Duration::from_millis(250));
        assert_eq!(config.opponent_period, Duration::from_secs(2));
        assert_eq!(config.surrender_token, "q");
    }

    #[test]
    fn test_without_tower_crits() {
        let config = BattleConfig::default().without_tower_crits();

        assert_eq!(config.guard_tower.crit_chance, 0.0);
        assert_eq!(config.king_tower.crit_chance, 0.0);
        assert_eq!(config.guard_tower.attack, 90);
    }

    #[test]
    fn test_serialization() {
        let config = BattleConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BattleConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
