//! # Core Module
//!
//! Fundamental data structures and I/O for crossword layouts.
//!
//! ## Architecture
//!
//! - **Layout Representation** ([`models`]) - Grid cells, orientations, and committed word placements
//! - **File I/O** ([`io`]) - Reading word lists and exporting finished layouts
//!
//! Nothing in this module holds search state; the mutable board lives in
//! [`crate::engine`].

pub mod io;
pub mod models;
