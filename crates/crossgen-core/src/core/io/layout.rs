use crate::core::models::grid::Grid;
use crate::core::models::placement::Placement;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A renderer-facing snapshot of a finished layout.
///
/// Rows are stored as strings, one character per cell, using the same blank and block
/// characters as [`crate::core::models::grid::Cell::to_char`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
    pub placements: Vec<Placement>,
    pub complete: bool,
}

impl Layout {
    pub fn new(grid: &Grid, placements: &[Placement], complete: bool) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            rows: (0..grid.height()).map(|row| grid.row_string(row)).collect(),
            placements: placements.to_vec(),
            complete,
        }
    }

    pub fn write_json_to(&self, writer: &mut impl Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)
    }

    pub fn write_json_to_path<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_json_to(&mut writer)?;
        writer.flush()
    }
}
