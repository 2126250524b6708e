// 進捗管理

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::search::{SearchObserver, StepReport};

/// 進捗統計
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressStats {
    pub seeds: u64,
    pub steps_done: u32,
    pub evaluations: u64,
    pub frontier: u64,
    pub best_score: f64,
}

/// 進捗マネージャー（探索エンジンの観測者として共有する）
pub struct ProgressManager {
    seeds: AtomicU64,
    steps_done: AtomicU32,
    evaluations: AtomicU64,
    frontier: AtomicU64,
    best_score_bits: AtomicU64,
    start_time: Instant,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            seeds: AtomicU64::new(0),
            steps_done: AtomicU32::new(0),
            evaluations: AtomicU64::new(0),
            frontier: AtomicU64::new(0),
            best_score_bits: AtomicU64::new(0f64.to_bits()),
            start_time: Instant::now(),
        }
    }

    /// 評価回数を追加
    pub fn add_evaluations(&self, count: u64) {
        self.evaluations.fetch_add(count, Ordering::Relaxed);
    }

    /// 現在の統計を取得
    pub fn get_stats(&self) -> ProgressStats {
        ProgressStats {
            seeds: self.seeds.load(Ordering::Relaxed),
            steps_done: self.steps_done.load(Ordering::Relaxed),
            evaluations: self.evaluations.load(Ordering::Relaxed),
            frontier: self.frontier.load(Ordering::Relaxed),
            best_score: f64::from_bits(self.best_score_bits.load(Ordering::Relaxed)),
        }
    }

    /// 経過時間を取得
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 評価速度（回/秒）を取得
    pub fn evaluations_per_second(&self) -> f64 {
        let n = self.evaluations.load(Ordering::Relaxed) as f64;
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            n / elapsed
        } else {
            0.0
        }
    }

    /// リセット
    pub fn reset(&mut self) {
        self.seeds.store(0, Ordering::Relaxed);
        self.steps_done.store(0, Ordering::Relaxed);
        self.evaluations.store(0, Ordering::Relaxed);
        self.frontier.store(0, Ordering::Relaxed);
        self.best_score_bits.store(0f64.to_bits(), Ordering::Relaxed);
        self.start_time = Instant::now();
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for ProgressManager {
    fn on_seeded(&self, seeds: usize) {
        self.seeds.store(seeds as u64, Ordering::Relaxed);
        self.frontier.store(seeds as u64, Ordering::Relaxed);
    }

    fn on_step(&self, report: &StepReport) {
        self.steps_done.store(report.step, Ordering::Relaxed);
        self.add_evaluations(report.generated as u64);
        self.frontier.store(report.frontier as u64, Ordering::Relaxed);
        self.best_score_bits
            .store(report.best_score.to_bits(), Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(step: u32, generated: usize, best: f64) -> StepReport {
        StepReport {
            step,
            expanded: 1,
            generated,
            frontier: 10,
            best_score: best,
        }
    }

    #[test]
    fn new_manager_starts_clean() {
        let mgr = ProgressManager::new();
        assert_eq!(mgr.get_stats(), ProgressStats::default());
    }

    #[test]
    fn observes_steps() {
        let mgr = ProgressManager::new();
        mgr.on_seeded(30);
        mgr.on_step(&report(1, 98, 1.0));
        mgr.on_step(&report(2, 40, 2.5));

        let stats = mgr.get_stats();
        assert_eq!(stats.seeds, 30);
        assert_eq!(stats.steps_done, 2);
        assert_eq!(stats.evaluations, 138);
        assert_eq!(stats.frontier, 10);
        assert_eq!(stats.best_score, 2.5);
    }

    #[test]
    fn reset_clears_state() {
        let mut mgr = ProgressManager::new();
        mgr.add_evaluations(100);
        mgr.reset();
        assert_eq!(mgr.get_stats().evaluations, 0);
    }

    #[test]
    fn evaluations_per_second_calculation() {
        let mgr = ProgressManager::new();
        mgr.add_evaluations(1000);
        std::thread::sleep(Duration::from_millis(20));
        assert!(mgr.evaluations_per_second() > 0.0);
    }
}
