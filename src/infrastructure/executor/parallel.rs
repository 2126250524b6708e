// 並列実行管理

use anyhow::{Context, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// 並列実行設定
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// ワーカースレッド数
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers: num_workers.max(1),
        }
    }
}

/// 探索の展開に使う rayon スレッドプールを保持する
pub struct ParallelExecutor {
    config: ParallelConfig,
    pool: Arc<ThreadPool>,
}

impl ParallelExecutor {
    pub fn new(config: ParallelConfig) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.num_workers)
            .thread_name(|i| format!("padsolver-worker-{}", i))
            .build()
            .context("スレッドプールの生成に失敗しました")?;
        Ok(Self {
            config,
            pool: Arc::new(pool),
        })
    }

    /// ワーカー数を取得
    pub fn num_workers(&self) -> usize {
        self.config.num_workers
    }

    /// 設定を取得
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// 共有プール
    pub fn pool(&self) -> Arc<ThreadPool> {
        Arc::clone(&self.pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn parallel_config_default() {
        let config = ParallelConfig::default();
        assert!(config.num_workers > 0);
    }

    #[test]
    fn parallel_config_clamps_zero() {
        assert_eq!(ParallelConfig::new(0).num_workers, 1);
    }

    #[test]
    fn executor_runs_in_its_pool() {
        let executor = ParallelExecutor::new(ParallelConfig::new(2)).unwrap();
        assert_eq!(executor.num_workers(), 2);

        let pool = executor.pool();
        let threads = pool.install(rayon::current_num_threads);
        assert_eq!(threads, 2);

        let sum: i32 = pool.install(|| (1..=10).into_par_iter().sum());
        assert_eq!(sum, 55);
    }
}
