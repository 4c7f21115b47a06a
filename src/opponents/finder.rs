//! Opponent selection.
//!
//! Each game mode asks the source for a pool of candidates and picks one at
//! random. Any failure, or an empty pool, falls back to the default
//! opponent; source errors never reach the battle engine.

use tracing::{debug, warn};

use super::opponent::Opponent;
use super::records::PlayerProfile;
use super::source::{normalize_tag, same_tag, PlayerSource, Result};
use crate::core::BattleRng;

/// Rankings fetched for ranked mode.
pub const RANKED_POOL_SIZE: usize = 10;

/// Location used when ranked mode is given an empty location id.
pub const DEFAULT_LOCATION: &str = "global";

/// Where to look for an opponent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// A member of the player's clan.
    Normal,
    /// A member of the tournament matching a tag or name.
    Tournament { query: String },
    /// A top player of a location ranking.
    Ranked { location: String },
    /// A participant of the clan's current war.
    ClanWar,
}

impl GameMode {
    /// Short label for logs and prompts.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Normal => "normal",
            GameMode::Tournament { .. } => "tournament",
            GameMode::Ranked { .. } => "ranked",
            GameMode::ClanWar => "clan war",
        }
    }
}

/// Pick an opponent for `player` in `mode`, falling back to the default.
pub async fn find_opponent<S>(source: &S, player: &PlayerProfile, mode: &GameMode, rng: &mut BattleRng) -> Opponent
where
    S: PlayerSource + ?Sized,
{
    match candidate(source, player, mode, rng).await {
        Ok(Some(opponent)) => {
            debug!(mode = mode.label(), opponent = opponent.name(), "opponent found");
            opponent
        }
        Ok(None) => {
            warn!(mode = mode.label(), "no opponent available, using the default opponent");
            Opponent::Default
        }
        Err(err) => {
            warn!(mode = mode.label(), error = %err, "opponent lookup failed, using the default opponent");
            Opponent::Default
        }
    }
}

async fn candidate<S>(source: &S, player: &PlayerProfile, mode: &GameMode, rng: &mut BattleRng) -> Result<Option<Opponent>>
where
    S: PlayerSource + ?Sized,
{
    match mode {
        GameMode::Normal => {
            let Some(clan_tag) = player.clan_tag() else {
                return Ok(None);
            };
            let members = source.fetch_clan_members(clan_tag).await?;
            Ok(rng.choose(&members).cloned().map(Opponent::from))
        }
        GameMode::Tournament { query } => {
            let query = query.trim();
            if query.is_empty() {
                return Ok(None);
            }
            let tournament = source.search_tournament(query).await?;
            Ok(rng.choose(&tournament.members_list).cloned().map(Opponent::from))
        }
        GameMode::Ranked { location } => {
            let location = match location.trim() {
                "" => DEFAULT_LOCATION,
                id => id,
            };
            let rankings = source
                .fetch_location_player_rankings(location, RANKED_POOL_SIZE)
                .await?;
            Ok(rng.choose(&rankings).cloned().map(Opponent::from))
        }
        GameMode::ClanWar => {
            let Some(clan_tag) = player.clan_tag() else {
                return Ok(None);
            };
            let war = source.fetch_current_war(clan_tag).await?;
            Ok(rng.choose(&war.participants).cloned().map(Opponent::from))
        }
    }
}

/// Offline mode: a random fixture player other than `player_tag`, with
/// their own deck.
pub fn mock_opponent(players: &[PlayerProfile], player_tag: &str, rng: &mut BattleRng) -> Opponent {
    let player_tag = normalize_tag(player_tag);
    let others: Vec<_> = players
        .iter()
        .filter(|p| !same_tag(&p.tag, &player_tag))
        .collect();

    match rng.choose(&others) {
        Some(player) => Opponent::from((*player).clone()),
        None => {
            debug!("no other fixture players, using the default opponent");
            Opponent::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::opponents::records::PlayerClan;

    fn player(tag: &str, name: &str, clan: Option<&str>) -> PlayerProfile {
        PlayerProfile {
            tag: tag.into(),
            name: name.into(),
            exp_level: 1,
            trophies: 100,
            current_deck: [Card::new("Knight", 1)].into_iter().collect(),
            clan: clan.map(|tag| PlayerClan {
                tag: tag.into(),
                name: "Clan".into(),
            }),
        }
    }

    #[test]
    fn test_mock_opponent_excludes_self() {
        let players = vec![player("#A", "Alice", None), player("#B", "Bob", None)];
        let mut rng = BattleRng::new(1);

        for _ in 0..20 {
            let opponent = mock_opponent(&players, "a", &mut rng);
            assert_eq!(opponent.name(), "Bob");
            assert!(opponent.deck().is_some());
        }
    }

    #[test]
    fn test_mock_opponent_alone_is_default() {
        let players = vec![player("#A", "Alice", None)];
        let mut rng = BattleRng::new(1);

        assert!(mock_opponent(&players, "#A", &mut rng).is_default());
        assert!(mock_opponent(&[], "#A", &mut rng).is_default());
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(GameMode::Normal.label(), "normal");
        assert_eq!(GameMode::ClanWar.label(), "clan war");
    }
}
