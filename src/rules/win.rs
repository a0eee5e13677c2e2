//! Win conditions.
//!
//! Only the player who just moved can win: a push never removes the mover's
//! own marbles and only the mover scores captures.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player};

/// Neutral captures needed to win.
pub const CAPTURE_QUOTA: u32 = 7;

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// Every opposing marble was pushed off.
    Elimination,
    /// The capture quota of neutral marbles was reached.
    CaptureQuota,
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinReason::Elimination => write!(f, "pushed off all opposing marbles"),
            WinReason::CaptureQuota => write!(f, "captured {CAPTURE_QUOTA} neutral marbles"),
        }
    }
}

/// Check whether `player` has won in `state`.
#[must_use]
pub fn check_winner(state: &GameState, player: Player) -> Option<WinReason> {
    if state.marbles_on_board(player.opponent()) == 0 {
        Some(WinReason::Elimination)
    } else if state.captured(player) >= CAPTURE_QUOTA {
        Some(WinReason::CaptureQuota)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Cell, Pos};

    #[test]
    fn test_no_winner_at_start() {
        let state = GameState::standard();
        assert_eq!(check_winner(&state, Player::A), None);
        assert_eq!(check_winner(&state, Player::B), None);
    }

    #[test]
    fn test_elimination() {
        let mut state = GameState::standard();
        state.board = Board::empty().with(Pos::new(0, 0), Cell::White);

        assert_eq!(check_winner(&state, Player::A), Some(WinReason::Elimination));
        assert_eq!(check_winner(&state, Player::B), None);
    }

    #[test]
    fn test_capture_quota_boundary() {
        let mut state = GameState::standard();

        state.captures[Player::B] = CAPTURE_QUOTA - 1;
        assert_eq!(check_winner(&state, Player::B), None);

        state.captures[Player::B] = CAPTURE_QUOTA;
        assert_eq!(check_winner(&state, Player::B), Some(WinReason::CaptureQuota));
        assert_eq!(check_winner(&state, Player::A), None);
    }

    #[test]
    fn test_elimination_checked_first() {
        let mut state = GameState::standard();
        state.board = Board::empty().with(Pos::new(0, 0), Cell::Black);
        state.captures[Player::B] = CAPTURE_QUOTA;

        assert_eq!(check_winner(&state, Player::B), Some(WinReason::Elimination));
    }
}
