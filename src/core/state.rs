//! Game state and the read-only status snapshot.
//!
//! ## GameState
//!
//! Everything the rules need:
//! - Board
//! - Player to move
//! - Captures (neutral marbles pushed off, per scoring player)
//! - Eliminations (own marbles lost, per owning player)
//! - Result (winner and how they won), once decided
//!
//! ## GameStatus
//!
//! Snapshot handed to rendering and score display layers.

use serde::{Deserialize, Serialize};

use super::board::{Board, Pos};
use super::config::GameConfig;
use super::player::{Player, PlayerMap};
use crate::rules::GameResult;

/// Complete game state.
///
/// Mutated only through [`crate::rules::RulesEngine::apply_move`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current position.
    pub board: Board,

    /// Player to move.
    pub turn: Player,

    /// Neutral marbles captured by each player.
    pub captures: PlayerMap<u32>,

    /// Marbles each player has lost off the board.
    pub eliminated: PlayerMap<u32>,

    /// Winner and win reason, recorded by the winning move and never cleared.
    pub result: Option<GameResult>,
}

impl GameState {
    /// Create the initial state for a configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: config.board,
            turn: config.first_player,
            captures: PlayerMap::default(),
            eliminated: PlayerMap::default(),
            result: None,
        }
    }

    /// Standard opening position with PlayerA to move.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&GameConfig::default())
    }

    /// Check if a winner has been decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result.map(|result| result.winner)
    }

    /// Neutral marbles captured by `player`.
    #[must_use]
    pub fn captured(&self, player: Player) -> u32 {
        self.captures[player]
    }

    /// Marbles of `player`'s color still on the board.
    #[must_use]
    pub fn marbles_on_board(&self, player: Player) -> usize {
        self.board.count(player.marble())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}

/// Interaction phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to move to pick a marble.
    AwaitingSelection,
    /// A marble is picked; waiting for a direction.
    MarbleSelected(Pos),
    /// A winner exists. Terminal.
    GameOver(Player),
}

/// Read-only snapshot for redraw and score display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub board: Board,
    pub turn: Player,
    pub captures: PlayerMap<u32>,
    pub eliminated: PlayerMap<u32>,
    pub winner: Option<Player>,
    /// Winner and win reason, once the game is over.
    pub result: Option<GameResult>,
    pub phase: Phase,
}

impl GameStatus {
    /// Snapshot `state`, with `selection` as the pending marble choice.
    #[must_use]
    pub fn capture(state: &GameState, selection: Option<Pos>) -> Self {
        let phase = match (state.winner(), selection) {
            (Some(winner), _) => Phase::GameOver(winner),
            (None, Some(pos)) => Phase::MarbleSelected(pos),
            (None, None) => Phase::AwaitingSelection,
        };

        Self {
            board: state.board,
            turn: state.turn,
            captures: state.captures,
            eliminated: state.eliminated,
            winner: state.winner(),
            result: state.result,
            phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WinReason;

    #[test]
    fn test_initial_state() {
        let state = GameState::standard();
        assert_eq!(state.turn, Player::A);
        assert_eq!(state.captured(Player::A), 0);
        assert_eq!(state.captured(Player::B), 0);
        assert_eq!(state.marbles_on_board(Player::A), 8);
        assert_eq!(state.marbles_on_board(Player::B), 8);
        assert!(!state.is_over());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_state_from_config() {
        let config = GameConfig::new().with_first_player(Player::B);
        let state = GameState::new(&config);
        assert_eq!(state.turn, Player::B);
    }

    #[test]
    fn test_status_phase() {
        let mut state = GameState::standard();
        assert_eq!(GameStatus::capture(&state, None).phase, Phase::AwaitingSelection);

        let pos = Pos::new(0, 0);
        assert_eq!(
            GameStatus::capture(&state, Some(pos)).phase,
            Phase::MarbleSelected(pos)
        );

        let result = GameResult {
            winner: Player::B,
            reason: WinReason::Elimination,
        };
        state.result = Some(result);
        let status = GameStatus::capture(&state, Some(pos));
        assert_eq!(status.phase, Phase::GameOver(Player::B));
        assert_eq!(status.winner, Some(Player::B));
        assert_eq!(status.result, Some(result));
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::standard();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
