//! Player data source interface.
//!
//! The remote API client lives outside this crate; anything that can answer
//! these queries can supply players and opponents. `FixtureSource` answers
//! them from a local JSON file.

use async_trait::async_trait;
use thiserror::Error;

use super::records::{ClanMember, CurrentWar, PlayerProfile, PlayerRanking, Tournament};

pub type Result<T> = std::result::Result<T, SourceError>;

/// Why a source query failed.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{what} not found")]
    NotFound { what: String },

    #[error("unauthorized: check the API token")]
    Unauthorized,

    #[error("network error: {0}")]
    Network(String),
}

impl SourceError {
    pub fn not_found(what: impl Into<String>) -> Self {
        SourceError::NotFound { what: what.into() }
    }
}

/// Queries for players, clans, wars, tournaments and rankings.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    async fn fetch_player(&self, tag: &str) -> Result<PlayerProfile>;

    async fn fetch_clan_members(&self, clan_tag: &str) -> Result<Vec<ClanMember>>;

    async fn fetch_current_war(&self, clan_tag: &str) -> Result<CurrentWar>;

    /// Look a tournament up by tag, or search by name.
    async fn search_tournament(&self, name_or_tag: &str) -> Result<Tournament>;

    async fn fetch_location_player_rankings(&self, location_id: &str, limit: usize) -> Result<Vec<PlayerRanking>>;
}

/// Trim a tag and make sure it starts with `#`.
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim();
    if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{}", tag)
    }
}

/// Tags compare case-insensitively after normalization.
#[must_use]
pub fn same_tag(a: &str, b: &str) -> bool {
    normalize_tag(a).eq_ignore_ascii_case(&normalize_tag(b))
}
