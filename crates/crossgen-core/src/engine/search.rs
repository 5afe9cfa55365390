use super::board::Board;
use super::state::SearchStats;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Depth-first placement search over one ordering of a word list.
///
/// Each word is tried at its best-scoring position; if the rest of the list cannot be
/// completed from there the placement is undone and the word is skipped instead. The search
/// returns on the first branch that reaches the end of the list.
pub struct Searcher<'a, R: Rng> {
    pub(super) board: &'a mut Board,
    rng: &'a mut R,
    time_budget: Duration,
    node_limit: Option<u64>,
    started: Instant,
    pub(super) expired: bool,
    pub(super) stats: SearchStats,
}

impl<'a, R: Rng> Searcher<'a, R> {
    pub fn new(board: &'a mut Board, rng: &'a mut R, time_budget: Duration) -> Self {
        Self {
            board,
            rng,
            time_budget,
            node_limit: None,
            started: Instant::now(),
            expired: false,
            stats: SearchStats::default(),
        }
    }

    /// Caps the number of search nodes visited; reaching the cap ends the search the same
    /// way the time budget does.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Runs the search over `words` in the given order.
    ///
    /// Returns `true` when the end of the list is reached (words may have been skipped along
    /// the way) and `false` when the time budget ran out first. After a timeout the board
    /// keeps whatever partial layout was committed at that moment.
    #[instrument(skip_all, name = "placement_search", fields(words = words.len()))]
    pub fn generate(&mut self, words: &[String]) -> bool {
        self.started = Instant::now();
        self.expired = false;

        let finished = self.search(words, 0);
        debug!(
            finished,
            timed_out = self.expired,
            placed = self.board.placements().len(),
            nodes = self.stats.nodes,
            "Search finished."
        );
        finished
    }

    pub fn timed_out(&self) -> bool {
        self.expired
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn search(&mut self, words: &[String], pos: usize) -> bool {
        if pos >= words.len() {
            return true;
        }
        if self.deadline_passed() {
            return false;
        }
        self.stats.nodes += 1;

        let word = words[pos].as_str();
        if !self.board.is_used(word) {
            if let Some(at) = self.board.find_best_position(word, &mut *self.rng) {
                if self.transaction(word, at, |s| s.search(words, pos + 1)) {
                    return true;
                }
                if self.expired {
                    return false;
                }
            }
        }

        self.stats.skips += 1;
        self.search(words, pos + 1)
    }

    fn deadline_passed(&mut self) -> bool {
        if self.expired {
            return true;
        }
        if self.started.elapsed() >= self.time_budget {
            debug!(
                budget_ms = self.time_budget.as_millis() as u64,
                "Time budget exhausted; unwinding search."
            );
            self.expired = true;
        } else if self.node_limit.is_some_and(|limit| self.stats.nodes >= limit) {
            debug!(nodes = self.stats.nodes, "Node limit reached; unwinding search.");
            self.expired = true;
        }
        self.expired
    }
}
