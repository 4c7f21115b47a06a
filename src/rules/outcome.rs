//! Battle outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::Combatant;

/// How a battle ended. Exactly one is produced per battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// The opponent's king tower fell.
    PlayerWin,
    /// The player's king tower fell.
    OpponentWin,
    /// The player gave up.
    Surrender,
    /// The time limit ran out with both king towers standing.
    Draw,
}

impl BattleOutcome {
    /// The replay entry recorded as the last fact of the battle.
    #[must_use]
    pub const fn log_line(self) -> &'static str {
        match self {
            BattleOutcome::PlayerWin => "Player won the match",
            BattleOutcome::OpponentWin => "Opponent won the match",
            BattleOutcome::Surrender => "Player surrendered",
            BattleOutcome::Draw => "Match ended in a draw",
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Combatant> {
        match self {
            BattleOutcome::PlayerWin => Some(Combatant::Player),
            BattleOutcome::OpponentWin | BattleOutcome::Surrender => Some(Combatant::Opponent),
            BattleOutcome::Draw => None,
        }
    }
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BattleOutcome::PlayerWin => "victory",
            BattleOutcome::OpponentWin => "defeat",
            BattleOutcome::Surrender => "surrender",
            BattleOutcome::Draw => "draw",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_lines() {
        assert_eq!(BattleOutcome::PlayerWin.log_line(), "Player won the match");
        assert_eq!(BattleOutcome::OpponentWin.log_line(), "Opponent won the match");
        assert_eq!(BattleOutcome::Surrender.log_line(), "Player surrendered");
        assert_eq!(BattleOutcome::Draw.log_line(), "Match ended in a draw");
    }

    #[test]
    fn test_winner() {
        assert_eq!(BattleOutcome::PlayerWin.winner(), Some(Combatant::Player));
        assert_eq!(BattleOutcome::OpponentWin.winner(), Some(Combatant::Opponent));
        assert_eq!(BattleOutcome::Surrender.winner(), Some(Combatant::Opponent));
        assert_eq!(BattleOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(BattleOutcome::Draw.to_string(), "draw");
        assert_eq!(BattleOutcome::PlayerWin.to_string(), "victory");
    }
}
