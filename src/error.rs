//! Error types.
//!
//! Every move rejection is recoverable: the state is untouched and the caller
//! may prompt the player again. The `Display` text is meant for the player.

use thiserror::Error;

use crate::core::{Player, Pos};

/// Why a cell cannot be moved by the acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum OwnershipIssue {
    #[error("the cell is empty")]
    EmptyCell,
    #[error("neutral marbles cannot be moved")]
    NeutralMarble,
    #[error("the marble belongs to the opponent")]
    OpponentMarble,
}

/// A rejected selection or move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cannot move that marble: {0}")]
    InvalidOwnership(OwnershipIssue),

    #[error("no room to push: the cell at {trailing} behind the marble is occupied")]
    Blocked { trailing: Pos },

    #[error("cannot push your own marble off the board at {at}")]
    CannotPushOwnMarble { at: Pos },

    #[error("the game is over: {winner} has won")]
    GameOver { winner: Player },

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: Player, actual: Player },

    #[error("no marble is selected")]
    NoSelection,
}

/// Failure parsing the text board format.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected 7 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 7")]
    RowLength { row: usize, len: usize },

    #[error("unknown cell symbol {symbol:?} at ({row}, {col})")]
    Symbol { row: usize, col: usize, symbol: char },
}

/// Failure parsing a direction letter.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown direction {0:?}, expected one of R, L, F, B")]
pub struct ParseDirectionError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MoveError::OutOfBounds { row: 7, col: 2 }.to_string(),
            "position (7, 2) is outside the board"
        );
        assert_eq!(
            MoveError::InvalidOwnership(OwnershipIssue::NeutralMarble).to_string(),
            "cannot move that marble: neutral marbles cannot be moved"
        );
        assert_eq!(
            MoveError::GameOver { winner: Player::A }.to_string(),
            "the game is over: PlayerA has won"
        );
        assert_eq!(
            MoveError::Blocked { trailing: Pos::new(1, 1) }.to_string(),
            "no room to push: the cell at (1, 1) behind the marble is occupied"
        );
    }
}
