// 探索結果の定義

use serde::{Deserialize, Serialize};

use crate::domain::board::{Coord, Direction, Grid};
use crate::domain::matching::{Cascade, MatchRecord};

/// 順位付けされた1つの解
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub origin: Coord,
    pub path: Vec<Direction>,
    pub score: f64,
    pub matches: Vec<MatchRecord>,
    /// 経路適用・連鎖解決後の盤面
    pub board: Grid,
}

impl Solution {
    /// 経路を "RRDL" 形式で
    pub fn path_string(&self) -> String {
        self.path.iter().map(|d| d.to_char()).collect()
    }

    /// コンボ数（マッチ数）
    pub fn combo_count(&self) -> usize {
        self.matches.len()
    }
}

/// 探索サマリー
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub steps: u32,
    pub evaluations: u64,
    pub frontier_size: usize,
    pub unique_solutions: usize,
    pub elapsed_seconds: f64,
}

/// 1回の求解の出力
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// 入力盤面を一度解決した結果（開始前のマッチを消した盤面）
    pub base: Cascade,
    /// スコア降順。先頭が推奨解
    pub solutions: Vec<Solution>,
    pub summary: SearchSummary,
}

impl SearchOutcome {
    pub fn best(&self) -> Option<&Solution> {
        self.solutions.first()
    }
}
