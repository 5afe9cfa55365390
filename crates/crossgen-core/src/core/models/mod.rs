//! # Core Models Module
//!
//! Plain data types shared by the engine, the workflows, and the I/O layer.
//!
//! ## Key Components
//!
//! - [`grid`] - The fixed-size matrix of blank, letter, and block cells
//! - [`placement`] - Word orientation, committed placements, and transient search candidates
//!
//! ## Usage
//!
//! ```
//! use crossgen::core::models::grid::{Cell, Grid};
//! use crossgen::core::models::placement::Direction;
//!
//! let mut grid = Grid::new(5, 5);
//! grid.set(0, 0, Cell::Letter('C'));
//! assert_eq!(Direction::Across.cell_at(0, 0, 2), (0, 2));
//! assert_eq!(grid.get(0, 0), Cell::Letter('C'));
//! ```

pub mod grid;
pub mod placement;
