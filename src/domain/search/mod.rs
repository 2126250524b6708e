// 探索関連のドメインモデル

pub mod candidate;
pub mod config;
pub mod result;

pub use candidate::Candidate;
pub use config::{FrontierWidth, PathLength, SearchConfig, SolverConfig};
pub use result::{SearchOutcome, SearchSummary, Solution};
