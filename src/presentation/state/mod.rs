// UI状態

pub mod solver;

pub use solver::{SolveStatus, SolverViewState};
