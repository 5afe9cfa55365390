use std::ops::AddAssign;

/// Counters collected by [`super::search::Searcher`] over one or more searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,   // Recursive calls that examined a word
    pub commits: u64, // Placements written to the board
    pub undos: u64,   // Placements rolled back after a failed branch
    pub skips: u64,   // Times the skip branch was taken
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.commits += other.commits;
        self.undos += other.undos;
        self.skips += other.skips;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_accumulate_field_by_field() {
        let mut total = SearchStats {
            nodes: 3,
            commits: 2,
            undos: 1,
            skips: 1,
        };
        total += SearchStats {
            nodes: 4,
            commits: 1,
            undos: 0,
            skips: 2,
        };
        assert_eq!(
            total,
            SearchStats {
                nodes: 7,
                commits: 3,
                undos: 1,
                skips: 3,
            }
        );
    }
}
