use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::error::EvalError;
use crate::game::Player;

use super::port::Evaluator;
use super::snapshot::{BoardSnapshot, HUMAN_SYMBOL, MACHINE_SYMBOL};

/// Widest board the per-side occupancy masks can hold.
const MAX_SEARCH_CELLS: usize = 128;

/// Depth-bounded minimax with alpha-beta pruning.
///
/// Each call rebuilds the position from the snapshot into two per-side
/// occupancy masks, explores center columns first, and memoizes fully
/// evaluated positions in a transposition table keyed by the mask pair.
/// Wins score `(cells - depth) / 2` toward the machine, so earlier wins
/// outrank later ones; a column that cannot take a token scores `i32::MIN`.
#[derive(Debug)]
pub struct MinimaxEvaluator {
    rows: usize,
    cols: usize,
    win: usize,
    col_order: Vec<usize>,
}

impl MinimaxEvaluator {
    pub fn new(config: &EngineConfig) -> Result<Self, EvalError> {
        let cells = config.cells();
        if cells > MAX_SEARCH_CELLS {
            return Err(EvalError::BoardTooLarge {
                cells,
                max: MAX_SEARCH_CELLS,
            });
        }

        // column exploration order, starting with center columns
        let cols = config.cols;
        let mut col_order = Vec::with_capacity(cols);
        for i in 0..cols as i32 {
            let col = (cols as i32 / 2) + (1 - 2 * (i % 2)) * (i + 1) / 2;
            col_order.push(col as usize);
        }

        Ok(MinimaxEvaluator {
            rows: config.rows,
            cols,
            win: config.win,
            col_order,
        })
    }
}

impl Evaluator for MinimaxEvaluator {
    fn score_columns(&mut self, board: &BoardSnapshot, budget: u32) -> Vec<i32> {
        let mut search = Search::from_snapshot(self.rows, self.cols, self.win, &self.col_order, board);
        let mut scores = vec![0; self.cols];
        for &col in &self.col_order {
            if search.insert(Player::Machine, col) {
                scores[col] = search.minimax(false, 1, budget, i32::MIN, i32::MAX);
                search.remove(Player::Machine, col);
            } else {
                scores[col] = i32::MIN;
            }
        }
        scores
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Mutable search position: one occupancy mask per side, bit `row * cols +
/// col`, plus the column heights needed for insert/remove.
struct Search<'a> {
    rows: usize,
    cols: usize,
    win: usize,
    col_order: &'a [usize],
    machine: u128,
    human: u128,
    heights: Vec<usize>,
    table: HashMap<(u128, u128), i32>,
}

impl<'a> Search<'a> {
    fn from_snapshot(
        rows: usize,
        cols: usize,
        win: usize,
        col_order: &'a [usize],
        board: &BoardSnapshot,
    ) -> Self {
        let mut machine = 0u128;
        let mut human = 0u128;
        let mut heights = vec![0; cols];

        for row in 0..rows {
            for col in 0..cols {
                let bit = 1u128 << (row * cols + col);
                match board.symbol_at(row, col) {
                    MACHINE_SYMBOL => {
                        machine |= bit;
                        heights[col] += 1;
                    }
                    HUMAN_SYMBOL => {
                        human |= bit;
                        heights[col] += 1;
                    }
                    _ => {}
                }
            }
        }

        Search {
            rows,
            cols,
            win,
            col_order,
            machine,
            human,
            heights,
            table: HashMap::new(),
        }
    }

    fn mask(&self, side: Player) -> u128 {
        match side {
            Player::Machine => self.machine,
            Player::Human => self.human,
        }
    }

    fn mask_mut(&mut self, side: Player) -> &mut u128 {
        match side {
            Player::Machine => &mut self.machine,
            Player::Human => &mut self.human,
        }
    }

    /// Drop a token for `side`; false if the column is full.
    fn insert(&mut self, side: Player, col: usize) -> bool {
        if self.heights[col] == self.rows {
            return false;
        }
        let row = self.rows - self.heights[col] - 1;
        *self.mask_mut(side) |= 1u128 << (row * self.cols + col);
        self.heights[col] += 1;
        true
    }

    /// Take back the top token of `side` in `col`.
    fn remove(&mut self, side: Player, col: usize) {
        self.heights[col] -= 1;
        let row = self.rows - self.heights[col] - 1;
        *self.mask_mut(side) &= !(1u128 << (row * self.cols + col));
    }

    /// Anchored run scan over one side's mask, same shape as the grid
    /// detector: a cell failing both bound gates cannot anchor a run.
    fn mask_wins(&self, mask: u128) -> bool {
        let bit = |r: usize, c: usize| mask >> (r * self.cols + c) & 1 == 1;
        let (rows, cols, win) = (self.rows, self.cols, self.win);

        for r in 0..rows {
            for c in 0..cols {
                if (r + win > rows && c + win > cols) || !bit(r, c) {
                    continue;
                }
                if c + win <= cols && (1..win).all(|i| bit(r, c + i)) {
                    return true;
                }
                if r + win <= rows && (1..win).all(|i| bit(r + i, c)) {
                    return true;
                }
                if r + win <= rows && c + win <= cols && (1..win).all(|i| bit(r + i, c + i)) {
                    return true;
                }
                if r + 1 >= win && c + win <= cols && (1..win).all(|i| bit(r - i, c + i)) {
                    return true;
                }
            }
        }
        false
    }

    fn minimax(
        &mut self,
        maximizer: bool,
        depth: u32,
        max_depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        let key = (self.machine, self.human);
        if let Some(&score) = self.table.get(&key) {
            return score;
        }

        let (mover, opponent) = if maximizer {
            (Player::Machine, Player::Human)
        } else {
            (Player::Human, Player::Machine)
        };

        // the opponent placed the previous token; a completed run ends the
        // line before the mover gets a turn
        if self.mask_wins(self.mask(opponent)) {
            let score = ((self.rows * self.cols - depth as usize) / 2) as i32;
            return if maximizer { -score } else { score };
        }

        if depth >= max_depth {
            return 0;
        }

        let order = self.col_order;
        let mut best = if maximizer { i32::MIN } else { i32::MAX };
        let mut moved = false;

        for &col in order {
            if !self.insert(mover, col) {
                continue;
            }
            moved = true;
            let score = self.minimax(!maximizer, depth + 1, max_depth, alpha, beta);
            self.remove(mover, col);

            if maximizer {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                return best;
            }
        }

        // board full with no winner
        if !moved {
            return 0;
        }

        self.table.insert(key, best);
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::RandomEvaluator;
    use crate::game::{GameState, Grid, Placement};

    fn classic_minimax() -> MinimaxEvaluator {
        MinimaxEvaluator::new(&EngineConfig::default()).unwrap()
    }

    fn snapshot_of(grid: &Grid) -> BoardSnapshot {
        BoardSnapshot::from_grid(grid)
    }

    #[test]
    fn rejects_oversized_board() {
        let config = EngineConfig {
            rows: 12,
            cols: 12,
            win: 4,
        };
        assert_eq!(
            MinimaxEvaluator::new(&config).unwrap_err(),
            EvalError::BoardTooLarge {
                cells: 144,
                max: 128
            }
        );
    }

    #[test]
    fn selects_legal_column_on_empty_board() {
        let mut eval = classic_minimax();
        let board = snapshot_of(&Grid::new(6, 7));
        let col = eval.recommend_column(&board, 4);
        assert!(col < 7);
    }

    #[test]
    fn takes_winning_move() {
        // machine holds 0,1,2 on the bottom row; col 3 completes the run
        let mut grid = Grid::new(6, 7);
        for col in 0..3 {
            grid.drop_token(col, Player::Machine.token()).unwrap();
            grid.drop_token(col, Player::Human.token()).unwrap();
        }
        let mut eval = classic_minimax();
        assert_eq!(eval.recommend_column(&snapshot_of(&grid), 4), 3);
    }

    #[test]
    fn blocks_opponent_win() {
        // human threatens 0,1,2 on the bottom row
        let mut grid = Grid::new(6, 7);
        for col in 0..3 {
            grid.drop_token(col, Player::Human.token()).unwrap();
        }
        grid.drop_token(6, Player::Machine.token()).unwrap();
        grid.drop_token(6, Player::Machine.token()).unwrap();

        let mut eval = classic_minimax();
        assert_eq!(eval.recommend_column(&snapshot_of(&grid), 4), 3);
    }

    #[test]
    fn prefers_win_over_block() {
        // both sides threaten col 3; taking the win beats blocking
        let mut grid = Grid::new(6, 7);
        for col in 0..3 {
            grid.drop_token(col, Player::Machine.token()).unwrap();
            grid.drop_token(col, Player::Human.token()).unwrap();
        }
        let mut eval = classic_minimax();
        assert_eq!(eval.recommend_column(&snapshot_of(&grid), 4), 3);
    }

    #[test]
    fn full_column_scores_minimum() {
        let mut grid = Grid::new(6, 7);
        for i in 0..6 {
            let token = if i % 2 == 0 {
                Player::Machine.token()
            } else {
                Player::Human.token()
            };
            grid.drop_token(0, token).unwrap();
        }
        let mut eval = classic_minimax();
        let scores = eval.score_columns(&snapshot_of(&grid), 2);
        assert_eq!(scores.len(), 7);
        assert_eq!(scores[0], i32::MIN);
        assert!(scores[1..].iter().all(|&s| s > i32::MIN));
    }

    #[test]
    fn immediate_win_detected_with_minimal_budget() {
        let mut grid = Grid::new(6, 7);
        for col in 0..3 {
            grid.drop_token(col, Player::Machine.token()).unwrap();
            grid.drop_token(col, Player::Human.token()).unwrap();
        }
        let mut eval = classic_minimax();
        let scores = eval.score_columns(&snapshot_of(&grid), 1);
        let winning = scores[3];
        assert!(winning > 0);
        assert!(scores.iter().enumerate().all(|(c, &s)| c == 3 || s <= winning));
    }

    /// Drive the full control loop: play, check, toggle, and query the
    /// evaluation boundary for the machine's move.
    fn play_one_game(minimax: &mut MinimaxEvaluator, random: &mut RandomEvaluator) -> Option<Player> {
        let mut state = GameState::new(EngineConfig::default());
        loop {
            let board = BoardSnapshot::from_grid(state.grid());
            let col = match state.current_player() {
                Player::Machine => minimax.recommend_column(&board, 5),
                Player::Human => random.recommend_column(&board, 0),
            };
            match state.play(col).unwrap() {
                Placement::Placed { .. } => {
                    if state.check_winner() {
                        return Some(state.current_player());
                    }
                    if state.grid().is_full() {
                        return None;
                    }
                    state.toggle_player();
                }
                Placement::ColumnFull => panic!("evaluator recommended a full column"),
            }
        }
    }

    #[test]
    fn beats_random_play() {
        let mut minimax = classic_minimax();
        let mut random = RandomEvaluator::seeded(0xc4);
        let games = 20;
        let mut machine_wins = 0;

        for _ in 0..games {
            if play_one_game(&mut minimax, &mut random) == Some(Player::Machine) {
                machine_wins += 1;
            }
        }

        assert!(
            machine_wins as f64 / games as f64 > 0.80,
            "minimax should beat random play most of the time, won {machine_wins}/{games}"
        );
    }

    #[test]
    fn name_is_minimax() {
        assert_eq!(classic_minimax().name(), "Minimax");
    }
}
