// 求解セッション（UIが話しかける状態を持つ窓口）

use anyhow::{anyhow, Result};
use crossbeam_channel::Sender;
use rand::Rng;
use rayon::ThreadPool;
use std::sync::Arc;

use super::event::SolveEvent;
use super::service::SolverService;
use crate::domain::board::{Coord, Direction, Grid, TokenType};
use crate::domain::search::{SearchSummary, Solution, SolverConfig};
use crate::domain::SolveError;
use crate::infrastructure::generator::BoardGenerator;

/// 現在の盤面、求解時点の盤面、順位付きの解、選択中の解を保持する
pub struct SolverSession {
    service: SolverService,
    board: Grid,
    initial: Option<Grid>,
    solutions: Vec<Solution>,
    selected: Option<usize>,
    last_summary: Option<SearchSummary>,
}

impl SolverSession {
    /// 全セル空の盤面で開始
    pub fn new(config: SolverConfig) -> Self {
        Self {
            board: Grid::new(config.rows, config.cols),
            service: SolverService::new(config),
            initial: None,
            solutions: Vec::new(),
            selected: None,
            last_summary: None,
        }
    }

    pub fn with_events(mut self, tx: Sender<SolveEvent>) -> Self {
        self.service = self.service.with_events(tx);
        self
    }

    pub fn with_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.service = self.service.with_pool(pool);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        self.service.config()
    }

    pub fn service(&self) -> &SolverService {
        &self.service
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// 盤面を差し替える。盤面サイズは設定と一致していること
    pub fn set_board(&mut self, board: Grid) -> Result<()> {
        let config = self.service.config();
        if board.rows() != config.rows || board.cols() != config.cols {
            return Err(SolveError::InvalidDimensions {
                rows: board.rows(),
                cols: board.cols(),
            }
            .into());
        }
        self.board = board;
        self.discard_solutions();
        Ok(())
    }

    fn check_coord(&self, coord: Coord) -> Result<()> {
        if !self.board.contains(coord) {
            return Err(anyhow!("盤面外の座標です: {}", coord));
        }
        Ok(())
    }

    /// 1セルを書き換える
    pub fn set_cell(&mut self, coord: Coord, token: TokenType) -> Result<()> {
        self.check_coord(coord)?;
        self.board.set(coord, token);
        self.discard_solutions();
        Ok(())
    }

    /// 1セルの種別を巡回させる（編集UIのクリック相当）
    pub fn cycle_cell(&mut self, coord: Coord) -> Result<TokenType> {
        self.check_coord(coord)?;
        let next = self.board.get(coord).cycle();
        self.board.set(coord, next);
        self.discard_solutions();
        Ok(next)
    }

    /// 現在の盤面で求解し、先頭の解を選択する
    pub fn solve(&mut self) -> Result<&SearchSummary> {
        let outcome = self.service.solve(&self.board)?;
        self.initial = Some(self.board.clone());
        self.solutions = outcome.solutions;
        self.selected = if self.solutions.is_empty() { None } else { Some(0) };
        Ok(self.last_summary.insert(outcome.summary))
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn last_summary(&self) -> Option<&SearchSummary> {
        self.last_summary.as_ref()
    }

    /// 順位 index の解を選択
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.solutions.len() {
            return Err(anyhow!(
                "解の番号が範囲外です: {} (解は{}件)",
                index,
                self.solutions.len()
            ));
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Solution> {
        self.selected.and_then(|i| self.solutions.get(i))
    }

    /// 選択中の解の起点と移動列
    pub fn selected_path(&self) -> Option<(Coord, &[Direction])> {
        self.selected().map(|s| (s.origin, s.path.as_slice()))
    }

    /// 選択中の解の最終盤面を表示盤面にする
    pub fn show_final_board(&mut self) -> Result<()> {
        let board = self
            .selected()
            .map(|s| s.board.clone())
            .ok_or_else(|| anyhow!("解が選択されていません"))?;
        self.board = board;
        Ok(())
    }

    /// 直近の求解時点の盤面へ戻す
    pub fn reset_board(&mut self) -> Result<()> {
        let initial = self
            .initial
            .clone()
            .ok_or_else(|| anyhow!("求解前のため戻す盤面がありません"))?;
        self.board = initial;
        Ok(())
    }

    /// 全セルを空にする（埋め直すまで求解できない）
    pub fn clear_board(&mut self) {
        let config = self.service.config();
        self.board = Grid::new(config.rows, config.cols);
        self.discard_solutions();
    }

    /// マッチのないランダム盤面にする
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let config = self.service.config();
        self.board = BoardGenerator::new(config.rows, config.cols).generate(rng)?;
        self.discard_solutions();
        Ok(())
    }

    // 盤面を編集したら以前の解は無効
    fn discard_solutions(&mut self) {
        self.solutions.clear();
        self.selected = None;
    }
}
