//! Players and opponents: data source interface, offline fixtures and
//! opponent selection.
//!
//! ## Key Types
//!
//! - `PlayerSource`: queries answered by the remote API or by fixtures
//! - `FixtureSource`: offline source loaded from a JSON file
//! - `Opponent`: tagged variant over every kind of opponent record
//! - `GameMode` / `find_opponent`: choose an opponent, never failing

pub mod finder;
pub mod fixtures;
pub mod opponent;
pub mod records;
pub mod source;

pub use finder::{find_opponent, mock_opponent, GameMode};
pub use fixtures::{FixtureError, FixtureSource};
pub use opponent::Opponent;
pub use records::{ClanMember, CurrentWar, PlayerClan, PlayerProfile, PlayerRanking, Tournament, TournamentMember, WarParticipant};
pub use source::{normalize_tag, PlayerSource, SourceError};
