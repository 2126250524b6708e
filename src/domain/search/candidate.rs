// 候補解（1本のドラッグ経路と、その結果の盤面・評価）

use crate::domain::board::{Coord, Direction, Grid};
use crate::domain::matching::{evaluate_board, MatchRecord};
use crate::domain::score::ScoreEvaluator;

/// 探索中の候補。
///
/// フロンティアに入った候補は以後変更しない（`expanded` の更新のみ探索側が行う）。
/// 子は常に盤面ごと複製して作る。
#[derive(Clone, Debug)]
pub struct Candidate {
    /// 生成順の通し番号（同点時の順位決定に使う）
    pub id: u64,
    /// 交換を適用した盤面（連鎖解決前）
    pub board: Grid,
    pub cursor: Coord,
    pub origin: Coord,
    pub path: Vec<Direction>,
    pub matches: Vec<MatchRecord>,
    pub score: f64,
    pub expanded: bool,
}

impl Candidate {
    /// 深さ0の種候補
    pub fn seed(id: u64, board: Grid, origin: Coord, matches: Vec<MatchRecord>, score: f64) -> Self {
        Self {
            id,
            board,
            cursor: origin,
            origin,
            path: Vec::new(),
            matches,
            score,
            expanded: false,
        }
    }

    /// 直前の移動
    pub fn last_move(&self) -> Option<Direction> {
        self.path.last().copied()
    }

    /// dir に動かせるなら移動先を返す（盤外・直前の逆戻りは不可）
    pub fn target(&self, dir: Direction) -> Option<Coord> {
        if self.last_move() == Some(dir.opposite()) {
            return None;
        }
        self.board.step(self.cursor, dir)
    }

    /// dir へ1歩動かした子候補を作る。評価は子の盤面から都度計算する
    pub fn child(&self, dir: Direction, evaluator: &ScoreEvaluator) -> Option<Candidate> {
        let next = self.target(dir)?;
        let mut board = self.board.clone();
        board.swap(self.cursor, next);

        let cascade = evaluate_board(&board);
        let score = evaluator.score(&cascade.matches);

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(dir);

        Some(Candidate {
            id: 0,
            board,
            cursor: next,
            origin: self.origin,
            path,
            matches: cascade.matches,
            score,
            expanded: false,
        })
    }

    /// 生成可能な全ての子（Direction::ALL 順）
    pub fn children(&self, evaluator: &ScoreEvaluator) -> Vec<Candidate> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.child(d, evaluator))
            .collect()
    }
}
