// 求解のUI状態管理

use crate::application::solver::SolveEvent;
use crate::domain::search::SearchSummary;
use crate::search::StepReport;

/// 求解の実行状態
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SolveStatus {
    /// 待機中
    #[default]
    Idle,
    /// 実行中
    Running,
    /// 完了
    Completed,
    /// エラー
    Error(String),
}

/// 求解イベントから組み立てる表示用の状態
#[derive(Clone, Debug, Default)]
pub struct SolverViewState {
    pub status: SolveStatus,
    /// 最後に受け取ったステップ
    pub last_step: Option<StepReport>,
    pub summary: Option<SearchSummary>,
    /// ログ（古い順）
    pub log: Vec<String>,
}

impl SolverViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 求解を開始
    pub fn start(&mut self) {
        self.status = SolveStatus::Running;
        self.last_step = None;
        self.summary = None;
    }

    /// イベントを1件反映
    pub fn apply(&mut self, event: &SolveEvent) {
        match event {
            SolveEvent::Log(msg) => self.log.push(msg.clone()),
            SolveEvent::Step(report) => {
                self.status = SolveStatus::Running;
                self.last_step = Some(*report);
            }
            SolveEvent::Finished(summary) => {
                self.status = SolveStatus::Completed;
                self.summary = Some(summary.clone());
            }
            SolveEvent::Error(msg) => {
                self.status = SolveStatus::Error(msg.clone());
                self.log.push(msg.clone());
            }
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status, SolveStatus::Running)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, SolveStatus::Completed)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, SolveStatus::Error(_))
    }

    /// 1行の進捗表示
    pub fn status_line(&self) -> String {
        match (&self.status, &self.last_step) {
            (SolveStatus::Idle, _) => "待機中".to_string(),
            (SolveStatus::Running, None) => "求解中".to_string(),
            (SolveStatus::Running, Some(r)) => format!(
                "求解中: 深さ={} / フロンティア={} / 最良={:.4}",
                r.step, r.frontier, r.best_score
            ),
            (SolveStatus::Completed, _) => match &self.summary {
                Some(s) => format!(
                    "完了: 解={}件 / 評価={}回 / {:.3}秒",
                    s.unique_solutions, s.evaluations, s.elapsed_seconds
                ),
                None => "完了".to_string(),
            },
            (SolveStatus::Error(msg), _) => format!("エラー: {}", msg),
        }
    }

    /// リセット
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
