// プレゼンテーション層 - 表示用の状態と変換

pub mod state;
pub mod view;

pub use state::{SolveStatus, SolverViewState};
pub use view::{BoardView, PathView};
