// 連鎖（カスケード）解決

use serde::{Deserialize, Serialize};

use super::detector::find_matches;
use super::gravity::{apply_gravity, remove_matches};
use super::record::MatchRecord;
use crate::domain::board::Grid;

/// evaluate_board の結果
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cascade {
    /// 連鎖終了後（落下済み）の盤面
    pub board: Grid,
    /// 全連鎖分のマッチ（検出順）
    pub matches: Vec<MatchRecord>,
    /// 消去が発生した回数
    pub iterations: usize,
}

/// 検出 → 消去 → 落下 を不動点まで繰り返す。
/// 非終端の各反復で3セル以上が消えるため、反復は高々 R*C 回で終わる。
pub fn evaluate_board(board: &Grid) -> Cascade {
    let mut current = board.clone();
    let mut all = Vec::new();
    let mut iterations = 0usize;
    let limit = board.rows() * board.cols();

    loop {
        let (overlay, found) = find_matches(&current);
        if found.is_empty() {
            break;
        }
        remove_matches(&mut current, &overlay);
        apply_gravity(&mut current);
        all.extend(found);
        iterations += 1;
        debug_assert!(iterations <= limit, "連鎖が停止しません");
    }

    Cascade {
        board: current,
        matches: all,
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::TokenType::*;

    #[test]
    fn stable_board_is_unchanged() {
        let b = Grid::parse("RBG/BGR/GRB").unwrap();
        let res = evaluate_board(&b);
        assert_eq!(res.board, b);
        assert!(res.matches.is_empty());
        assert_eq!(res.iterations, 0);
    }

    #[test]
    fn single_match_is_removed_and_collapsed() {
        let b = Grid::parse("BGL/RRR").unwrap();
        let res = evaluate_board(&b);
        assert_eq!(res.matches, vec![MatchRecord::new(Red, 3)]);
        assert_eq!(res.board.to_text(), ".../BGL");
        assert_eq!(res.iterations, 1);
    }

    #[test]
    fn cascade_accumulates_across_rounds() {
        // 1回目: 左列の縦 RRR が消え、上の G が落ちて最下段に G の横3連が成立
        let b = Grid::parse("GBL/RLB/RBL/RGG").unwrap();
        let res = evaluate_board(&b);
        assert_eq!(res.iterations, 2);
        assert_eq!(
            res.matches,
            vec![MatchRecord::new(Red, 3), MatchRecord::new(Green, 3)]
        );
        assert!(res.matches[1].full_row);
        assert_eq!(res.board.to_text(), ".../.BL/.LB/.BL");
    }

    #[test]
    fn evaluate_is_idempotent_on_resolved_board() {
        let b = Grid::parse("GBL/RLB/RBL/RGG").unwrap();
        let first = evaluate_board(&b);
        let second = evaluate_board(&first.board);
        assert_eq!(second.board, first.board);
        assert!(second.matches.is_empty());
    }

    #[test]
    fn full_clear_terminates() {
        let b = Grid::parse("RRR/RRR/RRR").unwrap();
        let res = evaluate_board(&b);
        assert_eq!(res.matches, vec![MatchRecord::new(Red, 9)]);
        assert!(res.board.cells().iter().all(|&t| t == Empty));
        assert!(res.iterations <= 9);
    }
}
