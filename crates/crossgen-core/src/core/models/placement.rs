use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Search order used when enumerating candidate positions.
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// Unit step `(d_row, d_col)` along the word's own axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Coordinates of the letter at `offset` for a word starting at `(row, col)`.
    #[inline]
    pub fn cell_at(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Direction::Across => (row, col + offset),
            Direction::Down => (row + offset, col),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Across => "Across",
                Direction::Down => "Down",
            }
        )
    }
}

/// A word committed to the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize, // Number of letters, not bytes
}

impl Placement {
    pub fn new(word: &str, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            word: word.to_string(),
            row,
            col,
            direction,
            length: word.chars().count(),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|i| self.direction.cell_at(self.row, self.col, i))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({},{}) {}",
            self.word, self.row, self.col, self.direction
        )
    }
}

/// A scored-but-uncommitted origin produced while searching for a word's best position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}
