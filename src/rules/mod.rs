//! Combat rules: the damage model and battle outcomes.

pub mod damage;
pub mod outcome;

pub use damage::{base_damage, compute_damage, resolve_damage, DamageRoll};
pub use outcome::BattleOutcome;
