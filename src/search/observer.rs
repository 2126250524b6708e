// 探索の進行通知

/// 1ステップ分の報告
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    /// 1始まり
    pub step: u32,
    /// このステップで展開した親の数
    pub expanded: usize,
    /// 生成した子の数（＝評価回数）
    pub generated: usize,
    /// 切り詰め後のフロンティアサイズ
    pub frontier: usize,
    pub best_score: f64,
}

/// 探索エンジンから進行を受け取る側
pub trait SearchObserver: Sync {
    /// 種候補の生成直後
    fn on_seeded(&self, _seeds: usize) {}

    /// 各ステップのソート・切り詰め後
    fn on_step(&self, _report: &StepReport) {}
}

/// 何もしない観測者
impl SearchObserver for () {}
