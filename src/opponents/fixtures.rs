//! Offline player source backed by a JSON fixture file.
//!
//! The file holds an array of player records shaped like the remote API's
//! player payload. Failing to load it is fatal for the caller; there is no
//! partial fallback.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use super::records::{ClanMember, CurrentWar, PlayerProfile, PlayerRanking, Tournament};
use super::source::{same_tag, PlayerSource, Result, SourceError};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Players loaded from a fixture file.
#[derive(Clone, Debug, Default)]
pub struct FixtureSource {
    players: Vec<PlayerProfile>,
}

impl FixtureSource {
    /// Load and parse a fixture file.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, FixtureError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Self::from_json(&data).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), players = source.players.len(), "loaded player fixtures");
        Ok(source)
    }

    /// Parse a JSON array of players.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        Ok(Self::from_players(serde_json::from_str(json)?))
    }

    #[must_use]
    pub fn from_players(players: Vec<PlayerProfile>) -> Self {
        Self { players }
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerProfile] {
        &self.players
    }

    #[must_use]
    pub fn find(&self, tag: &str) -> Option<&PlayerProfile> {
        self.players.iter().find(|p| same_tag(&p.tag, tag))
    }
}

#[async_trait]
impl PlayerSource for FixtureSource {
    async fn fetch_player(&self, tag: &str) -> Result<PlayerProfile> {
        self.find(tag)
            .cloned()
            .ok_or_else(|| SourceError::not_found(format!("player {}", tag.trim())))
    }

    async fn fetch_clan_members(&self, clan_tag: &str) -> Result<Vec<ClanMember>> {
        let members: Vec<_> = self
            .players
            .iter()
            .filter(|p| p.clan_tag().is_some_and(|t| same_tag(t, clan_tag)))
            .map(|p| ClanMember {
                tag: p.tag.clone(),
                name: p.name.clone(),
                trophies: p.trophies,
            })
            .collect();

        if members.is_empty() {
            return Err(SourceError::not_found(format!("clan {}", clan_tag)));
        }
        Ok(members)
    }

    async fn fetch_current_war(&self, clan_tag: &str) -> Result<CurrentWar> {
        Err(SourceError::not_found(format!("current war for clan {}", clan_tag)))
    }

    async fn search_tournament(&self, name_or_tag: &str) -> Result<Tournament> {
        Err(SourceError::not_found(format!("tournament {}", name_or_tag)))
    }

    async fn fetch_location_player_rankings(&self, _location_id: &str, limit: usize) -> Result<Vec<PlayerRanking>> {
        let mut ranked: Vec<_> = self
            .players
            .iter()
            .map(|p| PlayerRanking {
                tag: p.tag.clone(),
                name: p.name.clone(),
                trophies: p.trophies,
            })
            .collect();
        ranked.sort_by(|a, b| b.trophies.cmp(&a.trophies));
        ranked.truncate(limit);
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYERS: &str = r##"[
        {"tag": "#PLAYER1", "name": "Alice", "expLevel": 10, "trophies": 3000,
         "currentDeck": [{"name": "Knight", "level": 9}], "clan": {"tag": "#CLAN", "name": "C"}},
        {"tag": "#PLAYER2", "name": "Bob", "expLevel": 8, "trophies": 4000,
         "currentDeck": [{"name": "Giant", "level": 7}], "clan": {"tag": "#CLAN", "name": "C"}},
        {"tag": "#PLAYER3", "name": "Cy", "expLevel": 5, "trophies": 1000, "currentDeck": []}
    ]"##;

    fn source() -> FixtureSource {
        FixtureSource::from_json(PLAYERS).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_player() {
        let source = source();

        let alice = source.fetch_player("player1").await.unwrap();
        assert_eq!(alice.name, "Alice");

        let err = source.fetch_player("#NOPE").await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_clan_members() {
        let source = source();

        let members = source.fetch_clan_members("#CLAN").await.unwrap();
        let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        assert!(source.fetch_clan_members("#OTHER").await.is_err());
    }

    #[tokio::test]
    async fn test_rankings_sorted_and_limited() {
        let source = source();

        let ranked = source.fetch_location_player_rankings("global", 2).await.unwrap();
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[tokio::test]
    async fn test_wars_and_tournaments_unavailable() {
        let source = source();

        assert!(source.fetch_current_war("#CLAN").await.is_err());
        assert!(source.search_tournament("Cup").await.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = FixtureSource::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FixtureSource::load(&path).unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }));
        assert!(err.to_string().contains("player.json"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.json");
        std::fs::write(&path, PLAYERS).unwrap();

        let source = FixtureSource::load(&path).unwrap();
        assert_eq!(source.players().len(), 3);
        assert!(source.find("#PLAYER3").is_some());
    }
}
