//! Game configuration.
//!
//! Board size, marble counts and the capture quota are fixed by the rules.
//! What a host can choose is who moves first and, for puzzles and tests,
//! the starting position.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Player;

/// Complete game configuration.
///
/// ```
/// use kuba::{Board, GameConfig, Player};
///
/// let config = GameConfig::new().with_first_player(Player::B);
/// assert_eq!(config.first_player, Player::B);
/// assert_eq!(config.board, Board::standard());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player who makes the first move.
    pub first_player: Player,

    /// Starting position.
    pub board: Board,
}

impl GameConfig {
    /// Standard game: standard layout, PlayerA to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            first_player: Player::A,
            board: Board::standard(),
        }
    }

    /// Set the player who moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Pick the first player from a seed. The same seed always picks the
    /// same player.
    #[must_use]
    pub fn with_seeded_first_player(mut self, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.first_player = if rng.gen_bool(0.5) { Player::A } else { Player::B };
        self
    }

    /// Start from a custom position.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
