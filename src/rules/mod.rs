//! Game rules.
//!
//! - `engine`: the `RulesEngine` trait and game results
//! - `push`: move validation and the shared push algorithm
//! - `win`: win conditions

pub mod engine;
pub mod push;
pub mod win;

pub use engine::{GameResult, RulesEngine};
pub use push::{apply_push, check_origin, plan_push, PushPlan};
pub use win::{check_winner, WinReason, CAPTURE_QUOTA};
