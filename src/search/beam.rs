// ビーム探索エンジン

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPool;

use super::dedup::dedup_candidates;
use super::observer::{SearchObserver, StepReport};
use crate::domain::board::Grid;
use crate::domain::matching::evaluate_board;
use crate::domain::score::{ScoreConfig, ScoreEvaluator};
use crate::domain::search::{Candidate, SearchConfig, SearchOutcome, SearchSummary, Solution};
use crate::domain::SolveError;
use crate::vlog;

/// (score 降順, 生成順 昇順)
fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.score.total_cmp(&a.score).then(a.id.cmp(&b.id))
}

/// 盤面と設定だけに依存する純粋な探索。呼び出し間で状態を持たない
pub struct BeamSearch {
    config: SearchConfig,
    evaluator: ScoreEvaluator,
    pool: Option<Arc<ThreadPool>>,
}

impl BeamSearch {
    pub fn new(config: SearchConfig, score: ScoreConfig) -> Self {
        Self {
            config,
            evaluator: ScoreEvaluator::new(score),
            pool: None,
        }
    }

    /// 並列展開に使うスレッドプール（未指定なら rayon のグローバルプール）
    pub fn with_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &ScoreEvaluator {
        &self.evaluator
    }

    /// 探索開始前の検証。失敗時は候補を1つも生成しない
    pub fn check_board(board: &Grid) -> Result<(), SolveError> {
        if board.rows() < 1 || board.cols() < 1 {
            return Err(SolveError::InvalidDimensions {
                rows: board.rows(),
                cols: board.cols(),
            });
        }
        if let Some(p) = board.first_unready() {
            return Err(SolveError::BoardNotReady {
                row: p.row,
                col: p.col,
            });
        }
        Ok(())
    }

    pub fn run(&self, board: &Grid) -> Result<SearchOutcome, SolveError> {
        self.run_observed(board, &())
    }

    pub fn run_observed(
        &self,
        board: &Grid,
        observer: &dyn SearchObserver,
    ) -> Result<SearchOutcome, SolveError> {
        Self::check_board(board)?;
        match &self.pool {
            Some(pool) => pool.install(|| Ok(self.search(board, observer))),
            None => Ok(self.search(board, observer)),
        }
    }

    fn search(&self, board: &Grid, observer: &dyn SearchObserver) -> SearchOutcome {
        let t0 = Instant::now();

        // 開始前に盤面上に既にあるマッチを消しておく
        let base = evaluate_board(board);
        let seed_eval = evaluate_board(&base.board);
        let seed_score = self.evaluator.score(&seed_eval.matches);
        vlog!(
            "[ビーム] 開始: 盤面={}x{} / 初期消去={}件 / 経路長={} / 幅={:?}",
            board.rows(),
            board.cols(),
            base.matches.len(),
            self.config.max_path_length.get(),
            self.config.frontier_width
        );

        let mut frontier: Vec<Candidate> = base
            .board
            .coords()
            .enumerate()
            .map(|(i, p)| {
                Candidate::seed(
                    i as u64,
                    base.board.clone(),
                    p,
                    seed_eval.matches.clone(),
                    seed_score,
                )
            })
            .collect();
        let mut next_id = frontier.len() as u64;
        let mut evaluations: u64 = 0;
        observer.on_seeded(frontier.len());

        let steps = self.config.max_path_length.get();
        for step in 1..=steps {
            let (expanded, mut pool) = self.expand(&mut frontier);
            for child in pool.iter_mut() {
                child.id = next_id;
                next_id += 1;
            }
            let generated = pool.len();
            evaluations += generated as u64;

            frontier.append(&mut pool);
            frontier.sort_by(rank);
            if let Some(limit) = self.config.frontier_width.limit() {
                frontier.truncate(limit);
            }

            let report = StepReport {
                step,
                expanded,
                generated,
                frontier: frontier.len(),
                best_score: frontier.first().map_or(0.0, |c| c.score),
            };
            vlog!(
                "[ビーム] 深さ={} / 展開={} / 生成={} / フロンティア={} / 最良={:.4}",
                report.step,
                report.expanded,
                report.generated,
                report.frontier,
                report.best_score
            );
            observer.on_step(&report);
        }

        let frontier_size = frontier.len();
        let unique = dedup_candidates(frontier);
        vlog!(
            "[ビーム] 重複除去: {} → {}",
            frontier_size,
            unique.len()
        );
        let unique_count = unique.len();

        let take = match self.config.max_solutions {
            0 => unique.len(),
            n => n.min(unique.len()),
        };
        let solutions: Vec<Solution> = unique
            .into_iter()
            .take(take)
            .map(|c| {
                let resolved = evaluate_board(&c.board).board;
                Solution {
                    origin: c.origin,
                    path: c.path,
                    score: c.score,
                    matches: c.matches,
                    board: resolved,
                }
            })
            .collect();

        SearchOutcome {
            base,
            solutions,
            summary: SearchSummary {
                steps,
                evaluations,
                frontier_size,
                unique_solutions: unique_count,
                elapsed_seconds: t0.elapsed().as_secs_f64(),
            },
        }
    }

    /// 未展開の候補をすべて展開し、子を生成順（フロンティア順 × Direction::ALL 順）で返す。
    /// 展開した親には expanded を立てる。
    fn expand(&self, frontier: &mut [Candidate]) -> (usize, Vec<Candidate>) {
        let evaluator = &self.evaluator;
        let children: Vec<Vec<Candidate>> = if self.config.parallel {
            // 親は読むだけ、子はそれぞれ独立した盤面を持つので同期は集約時の1回のみ
            frontier
                .par_iter()
                .filter(|c| !c.expanded)
                .map(|c| c.children(evaluator))
                .collect()
        } else {
            frontier
                .iter()
                .filter(|c| !c.expanded)
                .map(|c| c.children(evaluator))
                .collect()
        };

        let mut expanded = 0usize;
        for c in frontier.iter_mut().filter(|c| !c.expanded) {
            c.expanded = true;
            expanded += 1;
        }

        (expanded, children.into_iter().flatten().collect())
    }
}
