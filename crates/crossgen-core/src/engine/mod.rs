//! # Engine Module
//!
//! The stateful placement engine and the backtracking search that drives it.
//!
//! ## Overview
//!
//! A [`board::Board`] owns the letter grid together with two occupancy maps (one per
//! orientation) recording which word claims each cell. Words are scored, committed and
//! undone on the board; [`search::Searcher`] walks the word list depth-first, bracketing
//! every recursive step with a commit/undo pair so that each failed branch leaves the board
//! exactly as it found it.
//!
//! ## Architecture
//!
//! - **Board State** ([`board`]) - Grid, occupancy maps, used-word set, placement list
//! - **Search** ([`search`]) - Depth-first driver with a wall-clock deadline
//! - **Configuration** ([`config`]) - Grid dimensions and search parameters
//! - **Statistics** ([`state`]) - Counters collected while searching
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-level error types
//!
//! Placement itself never fails: a position that does not fit is simply rejected, and a
//! word with no legal position is skipped by the search.

pub mod board;
pub mod config;
pub mod error;
pub mod progress;
pub mod search;
pub mod state;
mod transaction;
