//! Core battle types: sides, towers, combat state, RNG, configuration.
//!
//! Everything here is synchronous and free of I/O. The engine in
//! `crate::engine` drives these types from its event loop.

pub mod config;
pub mod rng;
pub mod side;
pub mod state;

pub use config::{BattleConfig, TowerSpec};
pub use rng::BattleRng;
pub use side::{Combatant, Side, Tower, TowerHit, TowerId};
pub use state::BattleState;
