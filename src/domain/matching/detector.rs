// マッチ検出: 行/列の3連判定 → オーバーレイ → 塗りつぶしで連結成分化

use super::record::MatchRecord;
use crate::constants::MIN_RUN;
use crate::domain::board::{Coord, Grid, TokenType};

/// 直線の3連以上を検出し、同形のオーバーレイ盤面に種別を書き込む。
/// マッチに属さないセルは Undefined。行判定と列判定の印は累積する。
pub fn find_overlay(board: &Grid) -> Grid {
    let (rows, cols) = (board.rows(), board.cols());
    let mut overlay = Grid::filled(rows, cols, TokenType::Undefined);

    // 横方向: 左から右へ、直前2セルを保持
    for r in 0..rows {
        let mut prev1 = TokenType::Empty;
        let mut prev2 = TokenType::Empty;
        for c in 0..cols {
            let cur = board.get(Coord::new(r, c));
            if cur.is_concrete() && prev1 == cur && prev2 == cur {
                // c >= 2 は prev1/prev2 が実体である時点で保証される
                for k in 0..MIN_RUN {
                    overlay.set(Coord::new(r, c - k), cur);
                }
            }
            prev1 = prev2;
            prev2 = cur;
        }
    }

    // 縦方向: 上から下へ
    for c in 0..cols {
        let mut prev1 = TokenType::Empty;
        let mut prev2 = TokenType::Empty;
        for r in 0..rows {
            let cur = board.get(Coord::new(r, c));
            if cur.is_concrete() && prev1 == cur && prev2 == cur {
                for k in 0..MIN_RUN {
                    overlay.set(Coord::new(r - k, c), cur);
                }
            }
            prev1 = prev2;
            prev2 = cur;
        }
    }

    overlay
}

/// オーバーレイを走査し、未訪問の印付きセルから同種の4連結成分を塗りつぶす。
/// 各セルはちょうど1つの MatchRecord に属する（L/T/十字は1件にまとまる）。
pub fn extract_matches(overlay: &Grid) -> Vec<MatchRecord> {
    let (rows, cols) = (overlay.rows(), overlay.cols());
    let mut consumed = vec![false; rows * cols];
    let mut matches = Vec::new();
    let mut stack: Vec<Coord> = Vec::new();
    let mut per_row = vec![0usize; rows];

    for start in overlay.coords() {
        let token = overlay.get(start);
        if token == TokenType::Undefined || consumed[start.row * cols + start.col] {
            continue;
        }

        per_row.iter_mut().for_each(|n| *n = 0);
        let mut size = 0usize;
        consumed[start.row * cols + start.col] = true;
        stack.push(start);

        // 再帰ではなく明示的なワークリストで処理
        while let Some(p) = stack.pop() {
            size += 1;
            per_row[p.row] += 1;
            for n in overlay.neighbors(p) {
                let ni = n.row * cols + n.col;
                if !consumed[ni] && overlay.get(n) == token {
                    consumed[ni] = true;
                    stack.push(n);
                }
            }
        }

        let full_row = per_row.iter().any(|&n| n == cols);
        matches.push(MatchRecord::new(token, size).with_full_row(full_row));
    }

    matches
}

/// オーバーレイとマッチ一覧をまとめて取得
pub fn find_matches(board: &Grid) -> (Grid, Vec<MatchRecord>) {
    let overlay = find_overlay(board);
    let matches = extract_matches(&overlay);
    (overlay, matches)
}

/// 3連以上の直線が1つでもあるか
pub fn has_match(board: &Grid) -> bool {
    find_overlay(board)
        .cells()
        .iter()
        .any(|&t| t != TokenType::Undefined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenType::*;

    fn grid(s: &str) -> Grid {
        Grid::parse(s).unwrap()
    }

    #[test]
    fn no_runs_means_no_matches() {
        let b = grid("RBG/BGR/GRB");
        let (overlay, matches) = find_matches(&b);
        assert!(overlay.cells().iter().all(|&t| t == Undefined));
        assert!(matches.is_empty());
        assert!(!has_match(&b));
    }

    #[test]
    fn horizontal_run_of_three() {
        let b = grid("RRRB/BGLD");
        let matches = find_matches(&b).1;
        assert_eq!(matches, vec![MatchRecord::new(Red, 3)]);
    }

    #[test]
    fn longer_run_self_extends() {
        let b = grid("BBBBB/RGRGR");
        let (overlay, matches) = find_matches(&b);
        assert_eq!(matches, vec![MatchRecord::new(Blue, 5)]);
        assert!(matches[0].full_row);
        assert_eq!(overlay.row(0), &[Blue; 5]);
    }

    #[test]
    fn vertical_run_of_three() {
        let b = grid("GR/GB/GR");
        let matches = find_matches(&b).1;
        assert_eq!(matches, vec![MatchRecord::new(Green, 3)]);
        assert!(!matches[0].full_row);
    }

    #[test]
    fn l_shape_is_one_record_of_five() {
        // 左列の縦3連と下段の横3連が角 (2,0) を共有
        let b = grid("RBG/RGB/RRR");
        let matches = find_matches(&b).1;
        assert_eq!(matches, vec![MatchRecord::new(Red, 5)]);
    }

    #[test]
    fn cross_shape_is_one_record() {
        let b = grid("BRB/RRR/BRB");
        let matches = find_matches(&b).1;
        assert_eq!(matches, vec![MatchRecord::new(Red, 5)]);
    }

    #[test]
    fn adjacent_unflagged_same_color_is_not_absorbed() {
        // (1,0) の R は直線に属さないのでオーバーレイに載らない
        let b = grid("RRR/RBG/BGB");
        let matches = find_matches(&b).1;
        assert_eq!(matches, vec![MatchRecord::new(Red, 3)]);
    }

    #[test]
    fn separate_runs_are_separate_records_in_scan_order() {
        let b = grid("RRRG/BLDH/GGGB");
        let matches = find_matches(&b).1;
        assert_eq!(
            matches,
            vec![MatchRecord::new(Red, 3), MatchRecord::new(Green, 3)]
        );
    }

    #[test]
    fn empty_cells_never_match() {
        let b = grid(".../RGB");
        assert!(find_matches(&b).1.is_empty());
    }

    #[test]
    fn tiny_boards_never_match() {
        let b = grid("RR/RR");
        assert!(find_matches(&b).1.is_empty());
        let one = grid("R");
        assert!(find_matches(&one).1.is_empty());
    }
}
