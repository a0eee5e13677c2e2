//! Core engine types: players, cells, positions, board, moves, state, configuration.
//!
//! Everything here is plain data. The rules that act on it live in
//! [`crate::rules`].

pub mod player;
pub mod cell;
pub mod direction;
pub mod board;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerMap};
pub use cell::Cell;
pub use direction::Direction;
pub use board::{Board, Pos, BOARD_SIZE};
pub use config::GameConfig;
pub use action::{Move, MoveOutcome};
pub use state::{GameState, GameStatus, Phase};
