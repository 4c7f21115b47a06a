//! Battle engine: event sources, the event loop and the replay log.
//!
//! ## Key Types
//!
//! - `Battle`: owns the combat state and resolves events
//! - `EventSource`: yields the next surrender, input or tick event
//! - `TimedEvents` / `ScriptedEvents`: wall-clock and synthetic sources
//! - `ReplayLog`: the ordered record handed back after the battle

pub mod battle;
pub mod events;
pub mod replay;

pub use battle::{Battle, BattleReport, BattleView, Notice, OpponentProfile};
pub use events::{spawn_line_reader, BattleEvent, EventSource, ScriptedEvents, TimedEvents};
pub use replay::{ReplayEntry, ReplayLog};
