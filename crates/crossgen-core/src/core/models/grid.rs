use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Blank,
    Letter(char),
    Block,
}

impl Cell {
    pub const BLANK_CHAR: char = ' ';
    pub const BLOCK_CHAR: char = '*';

    pub fn to_char(self) -> char {
        match self {
            Cell::Blank => Self::BLANK_CHAR,
            Cell::Letter(c) => c,
            Cell::Block => Self::BLOCK_CHAR,
        }
    }

    pub fn is_letter(self) -> bool {
        matches!(self, Cell::Letter(_))
    }
}

/// A fixed `height × width` matrix of cells stored in row-major order.
///
/// The dimensions are set once at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Blank; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Returns the coordinates `(row + d_row, col + d_col)` if they lie inside the grid.
    #[inline]
    pub fn offset(
        &self,
        row: usize,
        col: usize,
        d_row: isize,
        d_col: isize,
    ) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(d_row)?;
        let c = col.checked_add_signed(d_col)?;
        self.contains(r, c).then_some((r, c))
    }

    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    pub fn row_string(&self, row: usize) -> String {
        (0..self.width).map(|col| self.get(row, col).to_char()).collect()
    }

    pub fn to_chars(&self) -> Vec<Vec<char>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.to_char()).collect())
            .collect()
    }

    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_letter()).count()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is outside a {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{}", self.get(row, col).to_char())?;
                if col != self.width - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
