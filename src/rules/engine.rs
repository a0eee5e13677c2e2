//! Rules engine trait.
//!
//! Implementations define:
//! - Whether a move is legal, and what it would affect
//! - How a legal move changes the state
//! - When the game is over

use serde::{Deserialize, Serialize};

use super::push::PushPlan;
use super::win::WinReason;
use crate::core::{Board, Direction, GameState, Move, MoveOutcome, Player};
use crate::error::MoveError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Player,
    pub reason: WinReason,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} won: {}", self.winner, self.reason)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate_move`: Must not mutate anything
/// - `apply_move`: Must leave `state` untouched when it returns `Err`
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Check a move and plan its effect.
    ///
    /// The returned [`PushPlan`] lists the affected cells and the marble
    /// that would leave the board, so callers can preview a move.
    fn validate_move(&self, state: &GameState, player: Player, mv: &Move) -> Result<PushPlan, MoveError>;

    /// Apply a move, scoring and passing the turn.
    fn apply_move(&self, state: &mut GameState, player: Player, mv: &Move) -> Result<MoveOutcome, MoveError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check a move without planning details.
    fn is_legal(&self, state: &GameState, player: Player, mv: &Move) -> bool {
        self.validate_move(state, player, mv).is_ok()
    }

    /// Enumerate all legal moves for a player.
    ///
    /// Empty when the game is over or it is not `player`'s turn.
    fn legal_moves(&self, state: &GameState, player: Player) -> Vec<Move> {
        Board::positions()
            .filter(|&pos| state.board[pos].owner() == Some(player))
            .flat_map(|pos| Direction::ALL.into_iter().map(move |dir| Move::new(pos, dir)))
            .filter(|mv| self.is_legal(state, player, mv))
            .collect()
    }
}
