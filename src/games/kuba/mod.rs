//! Kuba.
//!
//! - 7x7 board, 8 White, 8 Black and 13 Red marbles
//! - On your turn: push one of your marbles one slot in any direction,
//!   shoving the contiguous line ahead of it
//! - A line can only be pushed from its trailing end
//! - You may never push your own marble off the board
//! - Win by pushing off all opposing marbles or capturing 7 Red marbles

mod game;
mod engine;

pub use engine::BoardEngine;
pub use game::KubaRules;
