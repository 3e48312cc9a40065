use crate::config::EngineConfig;
use crate::error::GridError;

use super::grid::{Grid, Placement};
use super::player::Player;
use super::win;

/// Coordinates of the most recent successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub row: usize,
    pub column: usize,
}

/// The turn-taking state machine. Owns one [`Grid`] and the current role.
///
/// `play` drops the current player's token and records where it landed;
/// it does NOT advance the turn. After a successful non-winning move the
/// caller advances the game with [`GameState::toggle_player`]. The engine
/// never terminates a game itself: callers observe [`GameState::check_winner`]
/// and `grid().is_full()` and stop issuing moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: EngineConfig,
    grid: Grid,
    current: Player,
    last_move: Option<LastMove>,
}

impl GameState {
    /// Create a fresh game. The human moves first.
    pub fn new(config: EngineConfig) -> Self {
        GameState {
            config,
            grid: Grid::new(config.rows, config.cols),
            current: Player::Human,
            last_move: None,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Columns that can still take a token.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.config.cols)
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }

    /// Drop the current player's token into `column`.
    ///
    /// An out-of-range column fails with `InvalidColumn` and changes nothing;
    /// a full column yields `Placement::ColumnFull`, also changing nothing.
    /// The turn is not advanced here.
    pub fn play(&mut self, column: usize) -> Result<Placement, GridError> {
        let placed = self.grid.drop_token(column, self.current.token())?;
        if let Placement::Placed { row } = placed {
            self.last_move = Some(LastMove { row, column });
        }
        Ok(placed)
    }

    /// Did the current player's last placement complete a run? Pure query:
    /// repeated calls return the same answer and never touch the grid.
    pub fn check_winner(&self) -> bool {
        match self.last_move {
            Some(m) => win::run_through(
                &self.grid,
                self.current.token(),
                m.row,
                m.column,
                self.config.win,
            ),
            None => false,
        }
    }

    /// Swap the current role. Callers invoke this after a successful move
    /// that did not win.
    pub fn toggle_player(&mut self) {
        self.current = self.current.other();
    }
}
