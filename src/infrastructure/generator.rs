// ランダム盤面生成（開始時点でマッチのない盤面）

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::board::{Coord, Grid, TokenType};
use crate::domain::matching::has_match;

const MAX_ATTEMPTS: usize = 10_000;

pub struct BoardGenerator {
    rows: usize,
    cols: usize,
    tokens: Vec<TokenType>,
}

impl BoardGenerator {
    /// 全6種を使う生成器
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            tokens: TokenType::CONCRETE.to_vec(),
        }
    }

    /// 使用する種別を限定（番兵は除外）
    pub fn with_tokens(mut self, tokens: &[TokenType]) -> Self {
        self.tokens = tokens.iter().copied().filter(|t| t.is_concrete()).collect();
        self
    }

    /// マッチが出来ていない盤面が得られるまで引き直す
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Grid> {
        if self.rows == 0 || self.cols == 0 {
            return Err(anyhow!("盤面サイズが不正です: {}x{}", self.rows, self.cols));
        }
        if self.tokens.is_empty() {
            return Err(anyhow!("使用するドロップ種別がありません"));
        }

        let mut grid = Grid::new(self.rows, self.cols);
        for _ in 0..MAX_ATTEMPTS {
            for r in 0..self.rows {
                for c in 0..self.cols {
                    let t = self.tokens[rng.gen_range(0..self.tokens.len())];
                    grid.set(Coord::new(r, c), t);
                }
            }
            if !has_match(&grid) {
                return Ok(grid);
            }
        }
        Err(anyhow!(
            "{}回試行してもマッチのない盤面を生成できませんでした",
            MAX_ATTEMPTS
        ))
    }

    /// シード指定で生成（再現用）
    pub fn generate_seeded(&self, seed: u64) -> Result<Grid> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}
