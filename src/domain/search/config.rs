// 探索設定のValue Objects

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    DEFAULT_COLS, DEFAULT_FRONTIER_WIDTH, DEFAULT_MAX_PATH_LENGTH, DEFAULT_MAX_SOLUTIONS,
    DEFAULT_ROWS, MAX_PATH_LENGTH_LIMIT,
};
use crate::domain::score::ScoreConfig;

/// 経路長（探索ステップ数）を表すValue Object
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PathLength(u32);

impl PathLength {
    pub fn new(steps: u32) -> Result<Self> {
        if steps == 0 {
            return Err(anyhow!("経路長は1以上である必要があります"));
        }
        if steps > MAX_PATH_LENGTH_LIMIT {
            return Err(anyhow!("経路長が大きすぎます: {}", steps));
        }
        Ok(Self(steps))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for PathLength {
    type Error = anyhow::Error;

    fn try_from(v: u32) -> Result<Self> {
        Self::new(v)
    }
}

impl From<PathLength> for u32 {
    fn from(v: PathLength) -> Self {
        v.0
    }
}

/// フロンティア幅（ビーム幅）。0 は無制限を表す
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub enum FrontierWidth {
    Bounded(usize),
    Unbounded,
}

impl FrontierWidth {
    pub fn new(width: usize) -> Self {
        if width == 0 {
            Self::Unbounded
        } else {
            Self::Bounded(width)
        }
    }

    /// 上限（無制限ならNone）
    pub fn limit(&self) -> Option<usize> {
        match *self {
            Self::Bounded(n) => Some(n),
            Self::Unbounded => None,
        }
    }
}

impl From<usize> for FrontierWidth {
    fn from(v: usize) -> Self {
        Self::new(v)
    }
}

impl From<FrontierWidth> for usize {
    fn from(v: FrontierWidth) -> Self {
        v.limit().unwrap_or(0)
    }
}

/// 探索設定のValue Object
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_path_length: PathLength,
    pub frontier_width: FrontierWidth,
    /// 出力する解の最大数（0 は全件）
    pub max_solutions: usize,
    /// ステップ内の展開を並列化する
    pub parallel: bool,
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        // Value Objectsで既に検証済み
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_path_length: PathLength(DEFAULT_MAX_PATH_LENGTH),
            frontier_width: FrontierWidth::Bounded(DEFAULT_FRONTIER_WIDTH),
            max_solutions: DEFAULT_MAX_SOLUTIONS,
            parallel: true,
        }
    }
}

/// 1回の求解で固定される設定一式
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub rows: usize,
    pub cols: usize,
    pub search: SearchConfig,
    pub score: ScoreConfig,
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(anyhow!("盤面サイズが不正です: {}x{}", self.rows, self.cols));
        }
        self.search.validate().context("探索設定が不正です")?;
        self.score.validate().context("スコア設定が不正です")?;
        Ok(())
    }

    /// JSONファイルから読み込み（未指定の項目は既定値）
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("設定ファイルを読めません: {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("設定ファイルの形式が不正です: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// JSONファイルへ保存
    pub fn save_json_file(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)
            .with_context(|| format!("設定ファイルを書けません: {}", path.display()))?;
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            search: SearchConfig::default(),
            score: ScoreConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_length_rejects_zero() {
        assert!(PathLength::new(0).is_err());
    }

    #[test]
    fn path_length_accepts_valid() {
        assert_eq!(PathLength::new(25).unwrap().get(), 25);
    }

    #[test]
    fn path_length_rejects_too_large() {
        assert!(PathLength::new(MAX_PATH_LENGTH_LIMIT + 1).is_err());
    }

    #[test]
    fn frontier_width_zero_is_unbounded() {
        assert_eq!(FrontierWidth::new(0), FrontierWidth::Unbounded);
        assert_eq!(FrontierWidth::new(0).limit(), None);
        assert_eq!(FrontierWidth::new(30).limit(), Some(30));
    }

    #[test]
    fn defaults_are_tuned_for_standard_board() {
        let cfg = SolverConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (5, 6));
        assert_eq!(cfg.search.max_path_length.get(), 25);
        assert_eq!(cfg.search.frontier_width, FrontierWidth::Bounded(30));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn json_uses_plain_numbers() {
        let json = r#"{"rows":3,"search":{"max_path_length":4,"frontier_width":0}}"#;
        let cfg: SolverConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.rows, 3);
        assert_eq!(cfg.cols, 6);
        assert_eq!(cfg.search.max_path_length.get(), 4);
        assert_eq!(cfg.search.frontier_width, FrontierWidth::Unbounded);
    }

    #[test]
    fn json_rejects_zero_path_length() {
        let json = r#"{"search":{"max_path_length":0}}"#;
        assert!(serde_json::from_str::<SolverConfig>(json).is_err());
    }

    #[test]
    fn json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solver.json");
        let mut cfg = SolverConfig::default();
        cfg.search.max_path_length = PathLength::new(8).unwrap();
        cfg.save_json_file(&path).unwrap();
        assert_eq!(SolverConfig::from_json_file(&path).unwrap(), cfg);
    }
}
