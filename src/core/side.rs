//! Sides, towers and per-side storage.
//!
//! ## Combatant
//!
//! The two opposing sides of a battle: the player and the opponent.
//!
//! ## Side
//!
//! Three towers in fixed order `[GuardTower1, GuardTower2, KingTower]` plus
//! one elixir pool. Damage always lands on the first tower still standing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{BattleConfig, TowerSpec};

/// One of the two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combatant {
    /// The human player.
    Player,
    /// The automated opponent.
    Opponent,
}

impl Combatant {
    /// The side this one fights against.
    #[must_use]
    pub const fn opposing(self) -> Self {
        match self {
            Combatant::Player => Combatant::Opponent,
            Combatant::Opponent => Combatant::Player,
        }
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combatant::Player => write!(f, "Player"),
            Combatant::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Tower identifier. The declaration order is the targeting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TowerId {
    GuardTower1,
    GuardTower2,
    KingTower,
}

impl TowerId {
    /// All towers in targeting order.
    pub const ALL: [TowerId; 3] = [TowerId::GuardTower1, TowerId::GuardTower2, TowerId::KingTower];

    /// Position in the side's tower array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name used in replay entries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TowerId::GuardTower1 => "Guard Tower 1",
            TowerId::GuardTower2 => "Guard Tower 2",
            TowerId::KingTower => "King Tower",
        }
    }
}

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A defensive tower. Invariant: `0 <= hit_points <= max_hit_points`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    hit_points: i64,
    max_hit_points: i64,
    /// Base attack (informational).
    pub attack: i64,
    /// Base defense (informational).
    pub defense: i64,
    /// Chance that a hit on this tower is a tower crit.
    pub crit_chance: f64,
}

impl Tower {
    /// Create a tower at full health from a spec.
    #[must_use]
    pub fn new(id: TowerId, spec: &TowerSpec) -> Self {
        let max = spec.hit_points.max(0);
        Self {
            id,
            hit_points: max,
            max_hit_points: max,
            attack: spec.attack,
            defense: spec.defense,
            crit_chance: spec.crit_chance,
        }
    }

    #[must_use]
    pub fn hit_points(&self) -> i64 {
        self.hit_points
    }

    #[must_use]
    pub fn max_hit_points(&self) -> i64 {
        self.max_hit_points
    }

    /// A tower is standing while it has hit points left.
    #[must_use]
    pub fn is_standing(&self) -> bool {
        self.hit_points > 0
    }

    /// Set hit points, clamped to `[0, max]`.
    pub fn set_hit_points(&mut self, hit_points: i64) {
        self.hit_points = hit_points.clamp(0, self.max_hit_points);
    }

    /// Absorb `amount` damage, never dropping below zero. Returns the new HP.
    pub fn absorb(&mut self, amount: i64) -> i64 {
        self.set_hit_points(self.hit_points.saturating_sub(amount.max(0)));
        self.hit_points
    }
}

/// Result of applying damage to a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerHit {
    /// The named tower absorbed the damage and now has `hit_points` left.
    Hit { tower: TowerId, hit_points: i64 },
    /// Every tower was already destroyed; nothing changed.
    NoTowersLeft,
}

impl fmt::Display for TowerHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TowerHit::Hit { tower, hit_points } => write!(f, "{} (HP now {})", tower, hit_points),
            TowerHit::NoTowersLeft => write!(f, "no towers left"),
        }
    }
}

/// One side's towers and elixir pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Side {
    towers: [Tower; 3],
    elixir: f64,
    max_elixir: f64,
}

impl Side {
    /// Create a side at full health with the configured starting elixir.
    #[must_use]
    pub fn new(config: &BattleConfig) -> Self {
        let max_elixir = config.max_elixir.max(0.0);
        Self {
            towers: [
                Tower::new(TowerId::GuardTower1, &config.guard_tower),
                Tower::new(TowerId::GuardTower2, &config.guard_tower),
                Tower::new(TowerId::KingTower, &config.king_tower),
            ],
            elixir: config.starting_elixir.clamp(0.0, max_elixir),
            max_elixir,
        }
    }

    /// Towers in targeting order.
    #[must_use]
    pub fn towers(&self) -> &[Tower; 3] {
        &self.towers
    }

    #[must_use]
    pub fn tower(&self, id: TowerId) -> &Tower {
        &self.towers[id.index()]
    }

    pub fn tower_mut(&mut self, id: TowerId) -> &mut Tower {
        &mut self.towers[id.index()]
    }

    /// The first tower in targeting order that is still standing.
    #[must_use]
    pub fn front_tower(&self) -> Option<&Tower> {
        self.towers.iter().find(|t| t.is_standing())
    }

    /// Crit chance of the tower that would absorb the next hit.
    ///
    /// Falls back to the king tower's chance once everything is down.
    #[must_use]
    pub fn defending_crit_chance(&self) -> f64 {
        self.front_tower()
            .unwrap_or(self.tower(TowerId::KingTower))
            .crit_chance
    }

    /// Apply damage to the first standing tower.
    pub fn apply_damage(&mut self, amount: i64) -> TowerHit {
        match self.towers.iter_mut().find(|t| t.is_standing()) {
            Some(tower) => TowerHit::Hit {
                tower: tower.id,
                hit_points: tower.absorb(amount),
            },
            None => TowerHit::NoTowersLeft,
        }
    }

    #[must_use]
    pub fn is_king_tower_down(&self) -> bool {
        !self.tower(TowerId::KingTower).is_standing()
    }

    #[must_use]
    pub fn elixir(&self) -> f64 {
        self.elixir
    }

    #[must_use]
    pub fn max_elixir(&self) -> f64 {
        self.max_elixir
    }

    /// Set elixir, clamped to `[0, max]`.
    pub fn set_elixir(&mut self, elixir: f64) {
        self.elixir = elixir.clamp(0.0, self.max_elixir);
    }

    /// Add elixir, capped at the maximum.
    pub fn regenerate(&mut self, amount: f64) {
        self.set_elixir(self.elixir + amount.max(0.0));
    }

    /// Pay `cost` if the pool covers it. Leaves the pool untouched otherwise.
    pub fn spend(&mut self, cost: f64) -> bool {
        if cost < 0.0 || self.elixir < cost {
            return false;
        }
        self.set_elixir(self.elixir - cost);
        true
    }
}
