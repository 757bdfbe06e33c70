//! Hrafn - rules engine for the tafl family of board games

pub mod cli;
pub mod core;

// Re-export commonly used items
pub use crate::core::{Board, Match, MatchResult};
