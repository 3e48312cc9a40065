use super::port::Evaluator;
use super::snapshot::BoardSnapshot;

/// Stub evaluator that always recommends the same column, so the core can
/// run and be tested with no real search engine behind the boundary.
pub struct FixedColumnEvaluator {
    column: usize,
}

impl FixedColumnEvaluator {
    pub fn new(column: usize) -> Self {
        FixedColumnEvaluator { column }
    }
}

impl Default for FixedColumnEvaluator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Evaluator for FixedColumnEvaluator {
    fn score_columns(&mut self, board: &BoardSnapshot, _budget: u32) -> Vec<i32> {
        let mut scores = vec![0; board.cols()];
        if self.column < board.cols() {
            scores[self.column] = 1;
        }
        scores
    }

    fn name(&self) -> &str {
        "Fixed"
    }
}
