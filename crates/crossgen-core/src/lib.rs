//! # crossgen Core Library
//!
//! A backtracking crossword layout generator: given a list of words and a fixed grid size,
//! it seats as many words as possible so that every word crosses its neighbours on shared
//! letters and no two words run into each other without a separator.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Grid`, `Cell`, `Placement`,
//!   `Direction`) and I/O utilities for word lists and finished layouts.
//!
//! - **[`engine`]: The Logic Core.** The stateful placement engine (`Board`) with its
//!   occupancy maps and commit/undo discipline, and the depth-first `Searcher` that drives
//!   it under a wall-clock budget.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into a complete
//!   generation run with seeding, word-order shuffling, repeated attempts and progress
//!   reporting.

pub mod core;
pub mod engine;
pub mod workflows;
