use crate::core::models::grid::{Cell, Grid};
use crate::core::models::placement::{Candidate, Direction, Placement};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use tracing::trace;

/// Per-orientation record of which word claims each cell.
///
/// Entries are 1-based commit ordinals; `0` means the cell is unclaimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMap {
    width: usize,
    ordinals: Vec<usize>,
}

impl OccupancyMap {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            ordinals: vec![0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.ordinals[row * self.width + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, ordinal: usize) {
        self.ordinals[row * self.width + col] = ordinal;
    }

    #[inline]
    pub fn is_claimed(&self, row: usize, col: usize) -> bool {
        self.get(row, col) > 0
    }
}

/// The mutable state of one generation run: letter grid, occupancy maps, used words and the
/// placements in commit order.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    across: OccupancyMap,
    down: OccupancyMap,
    used_words: HashSet<String>,
    placements: Vec<Placement>,
    across_count: usize,
    down_count: usize,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            across: OccupancyMap::new(width, height),
            down: OccupancyMap::new(width, height),
            used_words: HashSet::new(),
            placements: Vec::new(),
            across_count: 0,
            down_count: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.contains(word)
    }

    pub fn occupancy(&self, direction: Direction) -> &OccupancyMap {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    fn occupancy_mut(&mut self, direction: Direction) -> &mut OccupancyMap {
        match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        }
    }

    pub fn into_parts(self) -> (Grid, Vec<Placement>) {
        (self.grid, self.placements)
    }

    /// Scores placing `word` with its first letter at `(row, col)`.
    ///
    /// Returns the number of cells where the word would cross an existing letter, or `None`
    /// if the placement is illegal: a cell falls outside the grid, a letter conflicts, a word
    /// of the same orientation runs alongside, or a letter sits directly before the start
    /// or after the end.
    pub fn can_place(&self, word: &str, row: usize, col: usize, direction: Direction) -> Option<usize> {
        let own = self.occupancy(direction);
        let (side_row, side_col) = direction.perpendicular().step();

        let mut intersections = 0;
        let mut length = 0;
        for (i, letter) in word.chars().enumerate() {
            let (r, c) = direction.cell_at(row, col, i);
            if !self.grid.contains(r, c) {
                return None;
            }

            match self.grid.get(r, c) {
                Cell::Blank => {}
                Cell::Letter(existing) if existing == letter => intersections += 1,
                _ => return None,
            }

            for sign in [-1, 1] {
                if let Some((nr, nc)) = self.grid.offset(r, c, sign * side_row, sign * side_col) {
                    if own.is_claimed(nr, nc) {
                        return None;
                    }
                }
            }
            length += 1;
        }

        if length == 0 {
            return None;
        }

        for (r, c) in self.boundary_cells(row, col, direction, length).into_iter().flatten() {
            if self.grid.get(r, c).is_letter() || own.is_claimed(r, c) {
                return None;
            }
        }

        Some(intersections)
    }

    /// Every legal position for `word` that achieves the highest intersection count,
    /// together with that count. Positions are enumerated row-major, across before down.
    pub fn best_positions(&self, word: &str) -> (Option<usize>, Vec<Candidate>) {
        let mut best_score = None;
        let mut best = Vec::new();

        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                for direction in Direction::ALL {
                    let Some(score) = self.can_place(word, row, col, direction) else {
                        continue;
                    };
                    match best_score {
                        Some(max) if score < max => continue,
                        Some(max) if score == max => {}
                        _ => {
                            best_score = Some(score);
                            best.clear();
                        }
                    }
                    best.push(Candidate {
                        row,
                        col,
                        direction,
                    });
                }
            }
        }

        (best_score, best)
    }

    /// Picks uniformly at random among the highest-scoring positions for `word`.
    pub fn find_best_position<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> Option<Candidate> {
        let (_, candidates) = self.best_positions(word);
        candidates.choose(rng).copied()
    }

    /// Writes `word` onto the board and stamps a fresh ordinal into its occupancy map.
    ///
    /// Returns `false` without touching the board when the word is empty, already placed,
    /// or would run outside the grid.
    pub fn commit(&mut self, word: &str, row: usize, col: usize, direction: Direction) -> bool {
        if word.is_empty() || self.used_words.contains(word) {
            return false;
        }
        if !self.fits_in_grid(row, col, direction, word.chars().count()) {
            return false;
        }

        let ordinal = match direction {
            Direction::Across => {
                self.across_count += 1;
                self.across_count
            }
            Direction::Down => {
                self.down_count += 1;
                self.down_count
            }
        };

        let placement = Placement::new(word, row, col, direction);
        for ((r, c), letter) in placement.cells().zip(word.chars()) {
            self.grid.set(r, c, Cell::Letter(letter));
            self.occupancy_mut(direction).set(r, c, ordinal);
        }
        for (r, c) in self
            .boundary_cells(row, col, direction, placement.length)
            .into_iter()
            .flatten()
        {
            self.grid.set(r, c, Cell::Block);
        }

        trace!(word, row, col, %direction, ordinal, "Committed word.");
        self.used_words.insert(word.to_string());
        self.placements.push(placement);
        true
    }

    /// Reverses a [`Board::commit`] of the same word at the same position.
    ///
    /// Letters shared with a crossing word stay on the grid, and a boundary block stays
    /// while another placed word still ends against it. Returns `false` without touching
    /// the board when no such placement exists.
    pub fn undo(&mut self, word: &str, row: usize, col: usize, direction: Direction) -> bool {
        let Some(idx) = self.placements.iter().rposition(|p| {
            p.word == word && p.row == row && p.col == col && p.direction == direction
        }) else {
            return false;
        };
        self.placements.remove(idx);
        self.used_words.remove(word);

        let other = direction.perpendicular();
        let mut length = 0;
        for i in 0..word.chars().count() {
            let (r, c) = direction.cell_at(row, col, i);
            self.occupancy_mut(direction).set(r, c, 0);
            if !self.occupancy(other).is_claimed(r, c) {
                self.grid.set(r, c, Cell::Blank);
            }
            length += 1;
        }

        for (r, c) in self
            .boundary_cells(row, col, direction, length)
            .into_iter()
            .flatten()
        {
            if self.grid.get(r, c) == Cell::Block && !self.separates_other_word(r, c) {
                self.grid.set(r, c, Cell::Blank);
            }
        }

        trace!(word, row, col, %direction, "Undid word.");
        true
    }

    fn fits_in_grid(&self, row: usize, col: usize, direction: Direction, length: usize) -> bool {
        if length == 0 || !self.grid.contains(row, col) {
            return false;
        }
        let (d_row, d_col) = direction.step();
        let steps = (length - 1) as isize;
        self.grid
            .offset(row, col, d_row * steps, d_col * steps)
            .is_some()
    }

    /// The cells directly before the first letter and after the last letter along the
    /// word's axis, when they lie inside the grid.
    fn boundary_cells(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        length: usize,
    ) -> [Option<(usize, usize)>; 2] {
        let (d_row, d_col) = direction.step();
        let (last_row, last_col) = direction.cell_at(row, col, length.saturating_sub(1));
        [
            self.grid.offset(row, col, -d_row, -d_col),
            self.grid.offset(last_row, last_col, d_row, d_col),
        ]
    }

    /// Whether a neighbouring letter belongs to a word that ends against `(row, col)`.
    fn separates_other_word(&self, row: usize, col: usize) -> bool {
        const NEIGHBOURS: [(isize, isize, Direction); 4] = [
            (0, -1, Direction::Across),
            (0, 1, Direction::Across),
            (-1, 0, Direction::Down),
            (1, 0, Direction::Down),
        ];

        NEIGHBOURS.iter().any(|&(d_row, d_col, direction)| {
            self.grid
                .offset(row, col, d_row, d_col)
                .is_some_and(|(r, c)| {
                    self.grid.get(r, c).is_letter() && self.occupancy(direction).is_claimed(r, c)
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Debug, PartialEq)]
    struct Snapshot {
        grid: Grid,
        across: OccupancyMap,
        down: OccupancyMap,
        used_words: HashSet<String>,
        placements: Vec<Placement>,
    }

    fn snapshot(board: &Board) -> Snapshot {
        Snapshot {
            grid: board.grid.clone(),
            across: board.across.clone(),
            down: board.down.clone(),
            used_words: board.used_words.clone(),
            placements: board.placements.clone(),
        }
    }

    fn assert_maps_consistent(board: &Board) {
        let grid = board.grid();
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let claimed = board.across.is_claimed(row, col) || board.down.is_claimed(row, col);
                let cell = grid.get(row, col);
                assert_eq!(
                    claimed,
                    cell.is_letter(),
                    "cell ({row}, {col}) is {cell:?} but claimed = {claimed}"
                );
            }
        }
    }

    #[test]
    fn placement_outside_the_grid_is_rejected() {
        let board = Board::new(5, 5);
        assert_eq!(board.can_place("CAT", 0, 3, Direction::Across), None);
        assert_eq!(board.can_place("CAT", 3, 0, Direction::Down), None);
        assert_eq!(board.can_place("CAT", 5, 0, Direction::Across), None);
        assert_eq!(board.can_place("CAT", 0, 2, Direction::Across), Some(0));
    }

    #[test]
    fn empty_word_is_rejected() {
        let mut board = Board::new(3, 3);
        assert_eq!(board.can_place("", 0, 0, Direction::Across), None);
        assert!(!board.commit("", 0, 0, Direction::Across));
    }

    #[test]
    fn crossing_on_a_matching_letter_counts_an_intersection() {
        let mut board = Board::new(5, 5);
        assert!(board.commit("CAT", 2, 0, Direction::Across));

        assert_eq!(board.can_place("BAD", 1, 1, Direction::Down), Some(1));
        assert_eq!(board.can_place("BED", 1, 1, Direction::Down), None);
    }

    #[test]
    fn block_markers_are_never_overwritten() {
        let mut board = Board::new(5, 1);
        assert!(board.commit("CAT", 0, 0, Direction::Across));
        assert_eq!(board.grid().get(0, 3), Cell::Block);

        assert_eq!(board.can_place("A", 0, 3, Direction::Across), None);
        assert_eq!(board.can_place("A", 0, 3, Direction::Down), None);
    }

    #[test]
    fn parallel_neighbours_of_the_same_orientation_are_rejected() {
        let mut board = Board::new(5, 5);
        assert!(board.commit("CAT", 1, 0, Direction::Across));
        assert_eq!(board.can_place("DOG", 2, 0, Direction::Across), None);
        assert_eq!(board.can_place("DOG", 0, 1, Direction::Across), None);
        assert_eq!(board.can_place("DOG", 3, 0, Direction::Across), Some(0));

        let mut board = Board::new(5, 5);
        assert!(board.commit("CAT", 0, 0, Direction::Down));
        assert_eq!(board.can_place("DOG", 0, 1, Direction::Down), None);
        assert_eq!(board.can_place("DOG", 0, 2, Direction::Down), Some(0));
    }

    #[test]
    fn letters_directly_before_or_after_a_word_are_rejected() {
        let mut board = Board::new(5, 5);
        assert!(board.commit("CAT", 3, 0, Direction::Across));

        // DOG would end directly on top of the 'A' in CAT.
        assert_eq!(board.can_place("DOG", 0, 1, Direction::Down), None);
        // AT overlaps CAT but starts right after its 'C'.
        assert_eq!(board.can_place("AT", 3, 1, Direction::Across), None);
    }

    #[test]
    fn collinear_words_may_share_a_block_separator() {
        let mut board = Board::new(7, 1);
        assert!(board.commit("CAT", 0, 0, Direction::Across));
        assert_eq!(board.can_place("DOG", 0, 4, Direction::Across), Some(0));
        assert_eq!(board.can_place("DOG", 0, 3, Direction::Across), None);
    }

    #[test]
    fn commit_writes_letters_ordinals_and_boundary_blocks() {
        let mut board = Board::new(6, 6);
        assert!(board.commit("CAT", 1, 1, Direction::Across));
        assert!(board.commit("BAT", 0, 2, Direction::Down));

        assert_eq!(board.grid().row_string(1), "*CAT* ");
        assert_eq!(board.grid().get(0, 2), Cell::Letter('B'));
        assert_eq!(board.grid().get(3, 2), Cell::Block);
        assert_eq!(board.occupancy(Direction::Across).get(1, 2), 1);
        assert_eq!(board.occupancy(Direction::Down).get(1, 2), 1);
        assert_eq!(board.placements().len(), 2);
        assert_maps_consistent(&board);
    }

    #[test]
    fn ordinals_are_never_reused_after_undo() {
        let mut board = Board::new(5, 5);
        assert!(board.commit("CAT", 0, 0, Direction::Across));
        assert!(board.undo("CAT", 0, 0, Direction::Across));
        assert!(board.commit("CAT", 0, 0, Direction::Across));
        assert_eq!(board.occupancy(Direction::Across).get(0, 0), 2);
    }

    #[test]
    fn duplicate_commit_is_a_no_op() {
        let mut board = Board::new(7, 7);
        assert!(board.commit("DOG", 0, 0, Direction::Across));
        let before = snapshot(&board);

        assert!(!board.commit("DOG", 3, 0, Direction::Across));
        assert_eq!(snapshot(&board), before);
        assert_eq!(board.placements().len(), 1);
    }

    #[test]
    fn lifo_commit_and_undo_restores_the_board_exactly() {
        let mut board = Board::new(9, 9);
        let mut rng = StdRng::seed_from_u64(11);
        let initial = snapshot(&board);

        let mut committed = Vec::new();
        for word in ["BANANA", "CABIN", "NAB", "ANT", "BIN"] {
            if let Some(at) = board.find_best_position(word, &mut rng) {
                assert!(board.commit(word, at.row, at.col, at.direction));
                committed.push((word, at));
                assert_maps_consistent(&board);
            }
        }
        assert!(committed.len() >= 3);

        for (word, at) in committed.into_iter().rev() {
            assert!(board.undo(word, at.row, at.col, at.direction));
            assert_maps_consistent(&board);
        }
        assert_eq!(snapshot(&board), initial);
    }

    #[test]
    fn undo_keeps_a_crossing_letter_and_a_shared_separator() {
        let mut board = Board::new(8, 5);
        assert!(board.commit("CAT", 2, 0, Direction::Across));
        assert!(board.commit("DOG", 2, 4, Direction::Across));
        assert!(board.commit("BAD", 1, 1, Direction::Down));
        assert_eq!(board.grid().get(2, 3), Cell::Block);

        assert!(board.undo("CAT", 2, 0, Direction::Across));

        assert_eq!(board.grid().get(2, 0), Cell::Blank);
        assert_eq!(board.grid().get(2, 1), Cell::Letter('A'));
        assert_eq!(board.grid().get(2, 2), Cell::Blank);
        // DOG still ends against the separator at (2, 3).
        assert_eq!(board.grid().get(2, 3), Cell::Block);
        assert_eq!(board.placements().len(), 2);
        assert!(!board.is_used("CAT"));
        assert_maps_consistent(&board);
    }

    #[test]
    fn undo_of_an_unplaced_word_does_nothing() {
        let mut board = Board::new(5, 5);
        assert!(board.commit("CAT", 0, 0, Direction::Across));
        let before = snapshot(&board);

        assert!(!board.undo("DOG", 2, 0, Direction::Across));
        assert_eq!(snapshot(&board), before);
    }

    #[test]
    fn commit_running_off_the_grid_is_refused_untouched() {
        let mut board = Board::new(5, 5);
        let before = snapshot(&board);

        assert!(!board.commit("CAT", 0, 4, Direction::Across));
        assert!(!board.commit("CAT", 3, 0, Direction::Down));
        assert!(!board.commit("CAT", 5, 0, Direction::Across));
        assert!(!board.commit("ELEPHANT", 0, 0, Direction::Across));
        assert_eq!(snapshot(&board), before);
        assert!(!board.is_used("CAT"));

        // No ordinal was spent on the refused commits.
        assert!(board.commit("CAT", 0, 2, Direction::Across));
        assert_eq!(board.occupancy(Direction::Across).get(0, 4), 1);
        assert_eq!(board.grid().get(0, 4), Cell::Letter('T'));
    }

    #[test]
    fn undo_at_the_wrong_origin_leaves_the_board_untouched() {
        let mut board = Board::new(7, 7);
        assert!(board.commit("CAT", 2, 1, Direction::Across));
        assert!(board.commit("BAD", 1, 2, Direction::Down));
        let before = snapshot(&board);

        assert!(!board.undo("CAT", 2, 0, Direction::Across));
        assert!(!board.undo("CAT", 2, 1, Direction::Down));
        assert!(!board.undo("CAT", 6, 6, Direction::Across));
        assert_eq!(snapshot(&board), before);
        assert!(board.is_used("CAT"));

        assert!(board.undo("BAD", 1, 2, Direction::Down));
        assert!(board.undo("CAT", 2, 1, Direction::Across));
        assert_maps_consistent(&board);
        assert!(board.placements().is_empty());
    }

    #[test]
    fn word_longer_than_the_grid_has_no_position() {
        let board = Board::new(3, 3);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(board.find_best_position("ELEPHANT", &mut rng), None);
        assert_eq!(board.best_positions("ELEPHANT"), (None, Vec::new()));
    }

    #[test]
    fn blank_grid_ties_every_legal_position() {
        let board = Board::new(3, 3);
        let (score, candidates) = board.best_positions("AB");
        assert_eq!(score, Some(0));
        // Two origins per row across and two per column down.
        assert_eq!(candidates.len(), 12);
    }

    #[test]
    fn best_position_always_achieves_the_maximum_score() {
        let mut board = Board::new(5, 5);
        assert!(board.commit("CAT", 2, 1, Direction::Across));

        let (score, candidates) = board.best_positions("CAR");
        assert_eq!(score, Some(1));
        assert!(!candidates.is_empty());

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let at = board.find_best_position("CAR", &mut rng).unwrap();
            assert_eq!(board.can_place("CAR", at.row, at.col, at.direction), Some(1));
            assert_eq!(at.direction, Direction::Down);
        }
    }

    #[test]
    fn crossing_words_agree_on_shared_letters() {
        let mut board = Board::new(5, 5);
        assert!(board.commit("CAT", 2, 1, Direction::Across));
        let mut rng = StdRng::seed_from_u64(5);
        let at = board.find_best_position("CAR", &mut rng).unwrap();
        assert!(board.commit("CAR", at.row, at.col, at.direction));

        let [cat, car] = [&board.placements()[0], &board.placements()[1]];
        let shared: Vec<_> = cat
            .cells()
            .zip(cat.word.chars())
            .filter_map(|(cell, letter)| {
                car.cells()
                    .zip(car.word.chars())
                    .find(|(other, _)| *other == cell)
                    .map(|(_, other_letter)| (letter, other_letter, cell))
            })
            .collect();

        assert_eq!(shared.len(), 1);
        let (a, b, (row, col)) = shared[0];
        assert_eq!(a, b);
        assert_eq!(board.grid().get(row, col), Cell::Letter(a));
        assert_eq!(
            board.used_words(),
            &HashSet::from(["CAT".to_string(), "CAR".to_string()])
        );
    }
}
