//! Game implementations.
//!
//! Each game provides a `RulesEngine` implementation.

pub mod kuba;
