//! Move evaluation boundary: owned board snapshots cross into search
//! engines, which hand back per-column scores or a recommended column.

mod fixed;
mod minimax;
mod port;
mod random;
pub mod snapshot;

pub use fixed::FixedColumnEvaluator;
pub use minimax::MinimaxEvaluator;
pub use port::Evaluator;
pub use random::RandomEvaluator;
pub use snapshot::BoardSnapshot;
