//! Move representation and the record of what a move did.

use serde::{Deserialize, Serialize};

use super::board::Pos;
use super::cell::Cell;
use super::direction::Direction;
use super::player::Player;

/// A push request: the marble to push and where to push it.
///
/// ```
/// use kuba::{Direction, Move, Pos};
///
/// let mv = Move::new((1, 0), Direction::Right);
/// assert_eq!(mv.origin, Pos::new(1, 0));
/// assert_eq!(mv.to_string(), "(1, 0) R");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell of the marble being pushed.
    pub origin: Pos,

    /// Direction of travel.
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub fn new(origin: impl Into<Pos>, direction: Direction) -> Self {
        Self {
            origin: origin.into(),
            direction,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.origin, self.direction)
    }
}

/// What a successful move did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Player who moved.
    pub player: Player,

    /// The move that was applied.
    pub mv: Move,

    /// Number of marbles that advanced one slot, the pushed-off one included.
    pub shifted: usize,

    /// Marble pushed off the board, if any.
    pub removed: Option<Cell>,

    /// Winner decided by this move.
    pub winner: Option<Player>,
}

impl MoveOutcome {
    /// A neutral marble was pushed off and scored.
    #[must_use]
    pub fn captured(&self) -> bool {
        self.removed == Some(Cell::Red)
    }

    /// An opposing marble was pushed off.
    #[must_use]
    pub fn eliminated(&self) -> bool {
        matches!(self.removed, Some(cell) if cell.owner().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(removed: Option<Cell>) -> MoveOutcome {
        MoveOutcome {
            player: Player::A,
            mv: Move::new((0, 0), Direction::Right),
            shifted: 3,
            removed,
            winner: None,
        }
    }

    #[test]
    fn test_outcome_flags() {
        assert!(!outcome(None).captured());
        assert!(!outcome(None).eliminated());
        assert!(outcome(Some(Cell::Red)).captured());
        assert!(!outcome(Some(Cell::Red)).eliminated());
        assert!(outcome(Some(Cell::Black)).eliminated());
        assert!(!outcome(Some(Cell::Black)).captured());
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new((4, 2), Direction::Backward);
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
