//! # kuba-engine
//!
//! Rules engine for Kuba, a two-player marble pushing game.
//!
//! ## The Game
//!
//! Played on a 7x7 board with White (PlayerA), Black (PlayerB) and neutral
//! Red marbles. On each turn a player pushes one of their own marbles one
//! slot along a row or column, shoving every contiguous marble ahead of it.
//! A marble shoved over the edge leaves the board for good.
//!
//! A player wins by pushing off every opposing marble, or by capturing
//! seven Red marbles.
//!
//! ## Architecture
//!
//! - **One push algorithm**: all four directions share a single scan and
//!   rotate, parameterized by a unit step.
//!
//! - **Pure rules, stateful session**: `KubaRules` validates and applies
//!   moves on a `GameState`; `BoardEngine` wraps it with the
//!   select-then-push flow a UI drives.
//!
//! - **Failures never mutate**: every rejected move is reported as a
//!   `MoveError` and leaves the state untouched.
//!
//! ## Modules
//!
//! - `core`: players, cells, positions, directions, board, state, config
//! - `rules`: `RulesEngine` trait, push algorithm, win detection
//! - `games`: the Kuba rule set and selection-driven engine
//! - `error`: caller-facing error taxonomy
//!
//! ## Example
//!
//! ```
//! use kuba::{BoardEngine, Direction, Player};
//!
//! let mut engine = BoardEngine::new();
//!
//! engine.select_marble(1, 0).unwrap();
//! let outcome = engine.attempt_move(Direction::Right).unwrap();
//!
//! assert!(outcome.removed.is_none());
//! assert_eq!(engine.query_status().turn, Player::B);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    Cell, Pos, Direction,
    Board, BOARD_SIZE,
    Move, MoveOutcome,
    GameState, GameStatus, Phase,
    GameConfig,
};

pub use crate::error::{MoveError, OwnershipIssue, ParseBoardError, ParseDirectionError};

pub use crate::rules::{GameResult, RulesEngine, WinReason, CAPTURE_QUOTA};

pub use crate::games::kuba::{BoardEngine, KubaRules};
