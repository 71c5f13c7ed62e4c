//! Players and the marks they stamp into cells.

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Cross (goes first, played by the human).
    #[display("X")]
    Cross,
    /// Circle (played by the engine).
    #[display("O")]
    Circle,
}

impl Player {
    /// The side the human plays.
    pub const HUMAN: Player = Player::Cross;

    /// The side the engine plays.
    pub const AI: Player = Player::Circle;

    /// Returns the opponent player.
    pub const fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Circle,
            Player::Circle => Player::Cross,
        }
    }
}

/// Occupancy of a single cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    #[display(" ")]
    Empty,
    /// Occupied by [`Player::Cross`].
    #[display("X")]
    Cross,
    /// Occupied by [`Player::Circle`].
    #[display("O")]
    Circle,
}

impl Mark {
    /// The player owning this mark, if any.
    pub const fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Cross => Some(Player::Cross),
            Mark::Circle => Some(Player::Circle),
        }
    }

    /// True for [`Mark::Empty`].
    pub const fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// True if `player` owns this mark.
    pub fn is(self, player: Player) -> bool {
        self.player() == Some(player)
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::Cross => Mark::Cross,
            Player::Circle => Mark::Circle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_an_involution() {
        assert_eq!(Player::Cross.opponent(), Player::Circle);
        assert_eq!(Player::Circle.opponent(), Player::Cross);
        for p in [Player::Cross, Player::Circle] {
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn test_mark_player_conversion() {
        assert_eq!(Mark::from(Player::Cross).player(), Some(Player::Cross));
        assert_eq!(Mark::from(Player::Circle).player(), Some(Player::Circle));
        assert_eq!(Mark::Empty.player(), None);
        assert!(Mark::Empty.is_empty());
        assert!(Mark::Circle.is(Player::Circle));
        assert!(!Mark::Circle.is(Player::Cross));
    }
}
