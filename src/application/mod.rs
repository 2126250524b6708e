// アプリケーション層 - ユースケースの実装

pub mod progress;
pub mod solver;

pub use progress::{ProgressManager, ProgressStats};
pub use solver::{SolveEvent, SolverService, SolverSession};
