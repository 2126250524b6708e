// 求解サービス

use anyhow::{Context, Result};
use crossbeam_channel::Sender;
use rayon::ThreadPool;
use std::sync::Arc;

use super::event::{ChannelObserver, SolveEvent};
use crate::application::progress::ProgressManager;
use crate::domain::board::Grid;
use crate::domain::search::{SearchOutcome, SolverConfig};
use crate::domain::SolveError;
use crate::search::{BeamSearch, SearchObserver, StepReport};
use crate::vlog;

/// 進捗マネージャーとイベントチャネルの両方へ流す
struct FanOut<'a> {
    progress: &'a ProgressManager,
    channel: Option<ChannelObserver<'a>>,
}

impl SearchObserver for FanOut<'_> {
    fn on_seeded(&self, seeds: usize) {
        self.progress.on_seeded(seeds);
        if let Some(ch) = &self.channel {
            ch.on_seeded(seeds);
        }
    }

    fn on_step(&self, report: &StepReport) {
        self.progress.on_step(report);
        if let Some(ch) = &self.channel {
            ch.on_step(report);
        }
    }
}

/// 盤面を受け取りビーム探索を実行するサービス
pub struct SolverService {
    config: SolverConfig,
    progress: Arc<ProgressManager>,
    events: Option<Sender<SolveEvent>>,
    pool: Option<Arc<ThreadPool>>,
}

impl SolverService {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            progress: Arc::new(ProgressManager::new()),
            events: None,
            pool: None,
        }
    }

    /// イベントの送り先を設定
    pub fn with_events(mut self, tx: Sender<SolveEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    /// 探索に使うスレッドプールを設定
    pub fn with_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    /// 直近の求解の進捗
    pub fn progress(&self) -> Arc<ProgressManager> {
        Arc::clone(&self.progress)
    }

    fn emit(&self, event: SolveEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }

    /// 入力の検証（候補生成より前）
    fn validate_inputs(&self, board: &Grid) -> Result<()> {
        self.config.validate().context("求解設定が不正です")?;
        if board.rows() != self.config.rows || board.cols() != self.config.cols {
            return Err(SolveError::InvalidDimensions {
                rows: board.rows(),
                cols: board.cols(),
            }
            .into());
        }
        BeamSearch::check_board(board)?;
        Ok(())
    }

    /// 求解（メインユースケース）
    pub fn solve(&mut self, board: &Grid) -> Result<SearchOutcome> {
        // 呼び出しごとに進捗を新しくする（前回の共有分には触れない）
        self.progress = Arc::new(ProgressManager::new());

        if let Err(e) = self.validate_inputs(board) {
            vlog!("[求解] 開始前に拒否: {:#}", e);
            self.emit(SolveEvent::Error(format!("{:#}", e)));
            return Err(e);
        }

        self.emit(SolveEvent::Log(format!(
            "求解開始: {}x{} / 経路長={} / 幅={:?}",
            board.rows(),
            board.cols(),
            self.config.search.max_path_length.get(),
            self.config.search.frontier_width
        )));

        let mut engine = BeamSearch::new(self.config.search, self.config.score);
        if let Some(pool) = &self.pool {
            engine = engine.with_pool(Arc::clone(pool));
        }

        let observer = FanOut {
            progress: &self.progress,
            channel: self.events.as_ref().map(ChannelObserver::new),
        };
        match engine.run_observed(board, &observer) {
            Ok(outcome) => {
                vlog!(
                    "[求解] 完了: 解={}件 / 評価={}回 / {:.3}秒",
                    outcome.solutions.len(),
                    outcome.summary.evaluations,
                    outcome.summary.elapsed_seconds
                );
                self.emit(SolveEvent::Finished(outcome.summary.clone()));
                Ok(outcome)
            }
            Err(e) => {
                self.emit(SolveEvent::Error(e.to_string()));
                Err(e.into())
            }
        }
    }
}

impl Default for SolverService {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
