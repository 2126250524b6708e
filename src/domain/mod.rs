// ドメイン層 - 盤面・マッチ解決・スコア・探索モデル

pub mod board;
pub mod error;
pub mod matching;
pub mod score;
pub mod search;

pub use error::SolveError;
