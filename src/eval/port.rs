use super::snapshot::BoardSnapshot;

/// Boundary to a move-search engine.
///
/// Implementations consume a [`BoardSnapshot`] plus a search budget and score
/// positions for the machine side to move. Score values are opaque: only
/// their relative order within one call means anything.
pub trait Evaluator {
    /// One desirability score per column, left to right, length
    /// `board.cols()`.
    fn score_columns(&mut self, board: &BoardSnapshot, budget: u32) -> Vec<i32>;

    /// Single best column for the machine side. The default takes the first
    /// maximum of [`Evaluator::score_columns`].
    fn recommend_column(&mut self, board: &BoardSnapshot, budget: u32) -> usize {
        let scores = self.score_columns(board, budget);
        let mut best_col = 0;
        let mut best_score = i32::MIN;
        for (col, &score) in scores.iter().enumerate() {
            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }
        best_col
    }

    /// Return the evaluator's display name.
    fn name(&self) -> &str;
}
