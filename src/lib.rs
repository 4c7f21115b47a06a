//! # clash-sim
//!
//! A real-time, turn-paced tower battle simulator.
//!
//! Two sides each own three towers and an elixir pool. The player plays
//! cards from a deck; an automated opponent plays on a timer; elixir
//! regenerates on another timer. The battle ends when a king tower falls,
//! the player surrenders, or the time limit runs out, and hands back a
//! replay log of everything that happened.
//!
//! ## Design Principles
//!
//! 1. **One owner of state**: the engine's event loop is the only code that
//!    touches `BattleState`. Timers and the input reader only produce events.
//!
//! 2. **Explicit randomness**: every roll goes through a seeded `BattleRng`
//!    passed in by the caller, so battles are reproducible.
//!
//! 3. **Swappable event sources**: the engine consumes an `EventSource`, so
//!    its transitions can be tested with a scripted sequence instead of
//!    wall-clock timers.
//!
//! ## Modules
//!
//! - `core`: sides, towers, combat state, RNG, configuration
//! - `cards`: cards, decks and the stat catalog
//! - `rules`: damage model and battle outcomes
//! - `policy`: opponent decision making
//! - `engine`: event sources, the battle loop and the replay log
//! - `opponents`: player data sources and opponent selection

pub mod core;
pub mod cards;
pub mod rules;
pub mod policy;
pub mod engine;
pub mod opponents;

// Re-export commonly used types
pub use crate::core::{BattleConfig, BattleRng, BattleState, Combatant, Side, Tower, TowerHit, TowerId, TowerSpec};

pub use crate::cards::{Card, CardCatalog, CardStats, Deck};

pub use crate::rules::{compute_damage, resolve_damage, BattleOutcome, DamageRoll};

pub use crate::policy::{OpponentMove, OpponentPolicy, RandomOpponent};

pub use crate::engine::{
    Battle, BattleEvent, BattleReport, BattleView, EventSource, Notice, OpponentProfile,
    ReplayEntry, ReplayLog, ScriptedEvents, TimedEvents,
};

pub use crate::opponents::{
    find_opponent, mock_opponent, FixtureSource, GameMode, Opponent, PlayerProfile, PlayerSource,
    SourceError,
};
