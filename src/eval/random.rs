use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::port::Evaluator;
use super::snapshot::BoardSnapshot;

/// An evaluator that picks uniformly at random among open columns.
pub struct RandomEvaluator {
    rng: StdRng,
}

impl RandomEvaluator {
    pub fn new() -> Self {
        RandomEvaluator {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomEvaluator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for RandomEvaluator {
    fn score_columns(&mut self, board: &BoardSnapshot, _budget: u32) -> Vec<i32> {
        (0..board.cols())
            .map(|col| if board.is_column_open(col) { 0 } else { i32::MIN })
            .collect()
    }

    fn recommend_column(&mut self, board: &BoardSnapshot, _budget: u32) -> usize {
        let open: Vec<usize> = (0..board.cols())
            .filter(|&col| board.is_column_open(col))
            .collect();
        assert!(!open.is_empty(), "no open columns available");
        open[self.rng.random_range(0..open.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
