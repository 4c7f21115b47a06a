//! The opponent a battle is fought against.
//!
//! Opponents come from several differently shaped records. They are
//! narrowed to one tagged variant carrying a name, a rating (trophies or
//! tournament score) and, for fixture players only, a deck. The engine only
//! consumes the `OpponentProfile` projection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::records::{ClanMember, PlayerProfile, PlayerRanking, TournamentMember, WarParticipant};
use crate::cards::Deck;
use crate::engine::OpponentProfile;

pub const DEFAULT_OPPONENT_NAME: &str = "Default Enemy";
pub const DEFAULT_OPPONENT_TROPHIES: i64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    /// A member of the player's clan.
    ClanMember { name: String, trophies: i64 },
    /// A participant in the clan's current war. No rating is known.
    WarParticipant { name: String },
    /// A tournament member, rated by score.
    Tournament { name: String, score: i64 },
    /// A player from a location ranking.
    Ranking { name: String, trophies: i64 },
    /// A player loaded from the offline fixture file, with their deck.
    Mock { name: String, trophies: i64, deck: Deck },
    /// Substituted whenever no other opponent could be found.
    Default,
}

impl Opponent {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Opponent::ClanMember { name, .. }
            | Opponent::WarParticipant { name }
            | Opponent::Tournament { name, .. }
            | Opponent::Ranking { name, .. }
            | Opponent::Mock { name, .. } => name,
            Opponent::Default => DEFAULT_OPPONENT_NAME,
        }
    }

    /// Trophies, or score for tournament opponents.
    #[must_use]
    pub fn rating(&self) -> i64 {
        match self {
            Opponent::ClanMember { trophies, .. }
            | Opponent::Ranking { trophies, .. }
            | Opponent::Mock { trophies, .. } => *trophies,
            Opponent::Tournament { score, .. } => *score,
            Opponent::WarParticipant { .. } => 0,
            Opponent::Default => DEFAULT_OPPONENT_TROPHIES,
        }
    }

    /// The opponent's own deck, when known.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        match self {
            Opponent::Mock { deck, .. } => Some(deck),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Opponent::Default)
    }

    /// The common projection the battle engine consumes.
    #[must_use]
    pub fn profile(&self) -> OpponentProfile {
        OpponentProfile::new(self.name(), self.deck().cloned())
    }
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Trophies: {})", self.name(), self.rating())
    }
}

impl From<ClanMember> for Opponent {
    fn from(member: ClanMember) -> Self {
        Opponent::ClanMember {
            name: member.name,
            trophies: member.trophies,
        }
    }
}

impl From<WarParticipant> for Opponent {
    fn from(participant: WarParticipant) -> Self {
        Opponent::WarParticipant {
            name: participant.name,
        }
    }
}

impl From<TournamentMember> for Opponent {
    fn from(member: TournamentMember) -> Self {
        Opponent::Tournament {
            name: member.name,
            score: member.score,
        }
    }
}

impl From<PlayerRanking> for Opponent {
    fn from(ranking: PlayerRanking) -> Self {
        Opponent::Ranking {
            name: ranking.name,
            trophies: ranking.trophies,
        }
    }
}

impl From<PlayerProfile> for Opponent {
    fn from(player: PlayerProfile) -> Self {
        Opponent::Mock {
            name: player.name,
            trophies: player.trophies,
            deck: player.current_deck,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_default_opponent() {
        let opponent = Opponent::Default;

        assert_eq!(opponent.name(), "Default Enemy");
        assert_eq!(opponent.rating(), 1000);
        assert!(opponent.deck().is_none());
        assert!(opponent.is_default());
        assert_eq!(opponent.to_string(), "Default Enemy (Trophies: 1000)");
    }

    #[test]
    fn test_tournament_uses_score() {
        let opponent = Opponent::from(TournamentMember {
            tag: "#T".into(),
            name: "Cup Hero".into(),
            score: 42,
        });

        assert_eq!(opponent.rating(), 42);
        assert_eq!(opponent.name(), "Cup Hero");
    }

    #[test]
    fn test_war_participant_has_no_rating() {
        let opponent = Opponent::from(WarParticipant {
            tag: "#W".into(),
            name: "Sailor".into(),
        });

        assert_eq!(opponent.rating(), 0);
    }

    #[test]
    fn test_profile_projection() {
        let deck: Deck = [Card::new("Knight", 3)].into_iter().collect();
        let mock = Opponent::Mock {
            name: "Mock".into(),
            trophies: 10,
            deck: deck.clone(),
        };

        assert_eq!(mock.profile(), OpponentProfile::new("Mock", Some(deck)));

        let member = Opponent::from(ClanMember {
            tag: "#C".into(),
            name: "Mate".into(),
            trophies: 3000,
        });
        assert_eq!(member.profile(), OpponentProfile::new("Mate", None));
    }
}
