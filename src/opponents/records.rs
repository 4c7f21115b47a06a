//! Records returned by player data sources.
//!
//! Field names follow the remote API's camelCase JSON. Unknown fields are
//! ignored so full API payloads and trimmed fixture files both parse.

use serde::{Deserialize, Serialize};

use crate::cards::Deck;

/// The clan a player belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerClan {
    pub tag: String,
    pub name: String,
}

/// A player as returned by `fetch_player`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub exp_level: u32,
    #[serde(default)]
    pub trophies: i64,
    #[serde(default)]
    pub current_deck: Deck,
    #[serde(default)]
    pub clan: Option<PlayerClan>,
}

impl PlayerProfile {
    /// The player's clan tag, if they are in a clan.
    #[must_use]
    pub fn clan_tag(&self) -> Option<&str> {
        self.clan
            .as_ref()
            .map(|c| c.tag.as_str())
            .filter(|tag| !tag.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanMember {
    #[serde(default)]
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub trophies: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarParticipant {
    #[serde(default)]
    pub tag: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWar {
    #[serde(default)]
    pub participants: Vec<WarParticipant>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentMember {
    #[serde(default)]
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub score: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members_list: Vec<TournamentMember>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    #[serde(default)]
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub trophies: i64,
}
