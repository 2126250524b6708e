// スコア評価

pub mod evaluator;
pub mod weights;

pub use evaluator::{ScoreConfig, ScoreEvaluator};
pub use weights::TokenWeights;
