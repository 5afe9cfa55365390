use super::search::Searcher;
use crate::core::models::placement::Candidate;
use rand::Rng;

impl<R: Rng> Searcher<'_, R> {
    /// Commits `word` at `at`, runs `action`, and rolls the commit back if the action fails.
    ///
    /// Nothing is rolled back once the deadline has expired: the search unwinds and leaves
    /// the last committed layout on the board. A commit that was refused (the word is
    /// already placed) runs no action and reports failure.
    pub(crate) fn transaction<F>(&mut self, word: &str, at: Candidate, action: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        // 1. Commit the word.
        if !self.board.commit(word, at.row, at.col, at.direction) {
            return false;
        }
        self.stats.commits += 1;

        // 2. Execute the action.
        let accepted = action(self);

        // 3. Revert unless the branch succeeded or the search is unwinding on timeout.
        if !accepted && !self.expired {
            self.board.undo(word, at.row, at.col, at.direction);
            self.stats.undos += 1;
        }

        accepted
    }
}
