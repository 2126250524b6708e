// パズル盤面ソルバー - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod presentation;   // プレゼンテーション層
pub mod search;
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};

// 主要な型を再エクスポート
pub use application::{ProgressManager, SolveEvent, SolverService, SolverSession};
pub use domain::board::{Coord, Direction, Grid, TokenType};
pub use domain::matching::{evaluate_board, Cascade, MatchRecord};
pub use domain::score::{ScoreConfig, ScoreEvaluator, TokenWeights};
pub use domain::search::{
    FrontierWidth, PathLength, SearchConfig, SearchOutcome, SearchSummary, Solution, SolverConfig,
};
pub use domain::SolveError;
pub use search::BeamSearch;
