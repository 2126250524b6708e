// 求解イベント定義（UI層に依存しない）

use crossbeam_channel::Sender;

use crate::domain::search::SearchSummary;
use crate::search::{SearchObserver, StepReport};

/// 求解サービスからのイベント
#[derive(Clone, Debug, PartialEq)]
pub enum SolveEvent {
    /// ログメッセージ
    Log(String),
    /// 1ステップ完了
    Step(StepReport),
    /// 求解完了
    Finished(SearchSummary),
    /// エラー発生
    Error(String),
}

/// イベントチャネルへ進行を流す観測者
pub struct ChannelObserver<'a> {
    tx: &'a Sender<SolveEvent>,
}

impl<'a> ChannelObserver<'a> {
    pub fn new(tx: &'a Sender<SolveEvent>) -> Self {
        Self { tx }
    }
}

impl SearchObserver for ChannelObserver<'_> {
    fn on_seeded(&self, seeds: usize) {
        let _ = self
            .tx
            .send(SolveEvent::Log(format!("種候補={}件", seeds)));
    }

    fn on_step(&self, report: &StepReport) {
        let _ = self.tx.send(SolveEvent::Step(*report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn forwards_step_reports() {
        let (tx, rx) = unbounded();
        let obs = ChannelObserver::new(&tx);
        obs.on_seeded(30);
        let report = StepReport {
            step: 1,
            expanded: 30,
            generated: 98,
            frontier: 30,
            best_score: 1.0,
        };
        obs.on_step(&report);

        assert!(matches!(rx.recv().unwrap(), SolveEvent::Log(_)));
        assert_eq!(rx.recv().unwrap(), SolveEvent::Step(report));
    }

    #[test]
    fn closed_channel_is_ignored() {
        let (tx, rx) = unbounded();
        drop(rx);
        let obs = ChannelObserver::new(&tx);
        obs.on_seeded(1);
    }
}
