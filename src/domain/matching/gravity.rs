// 消去と落下

use crate::domain::board::{Coord, Grid, TokenType};

/// オーバーレイで印の付いたセルを Empty にする
pub fn remove_matches(board: &mut Grid, overlay: &Grid) {
    debug_assert_eq!((board.rows(), board.cols()), (overlay.rows(), overlay.cols()));
    for p in overlay.coords() {
        if overlay.get(p) != TokenType::Undefined {
            board.set(p, TokenType::Empty);
        }
    }
}

/// 列ごとに非Emptyセルを下へ詰める（相対順序は保持、上は Empty で埋める）
pub fn apply_gravity(board: &mut Grid) {
    let rows = board.rows();
    for c in 0..board.cols() {
        // 下から上へ集め、下から上へ詰める
        let mut write = rows;
        for r in (0..rows).rev() {
            let t = board.get(Coord::new(r, c));
            if t != TokenType::Empty {
                write -= 1;
                board.set(Coord::new(write, c), t);
            }
        }
        for r in 0..write {
            board.set(Coord::new(r, c), TokenType::Empty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenType::*;

    fn column(board: &Grid, c: usize) -> Vec<TokenType> {
        (0..board.rows()).map(|r| board.get(Coord::new(r, c))).collect()
    }

    #[test]
    fn gravity_preserves_relative_order() {
        let mut b = Grid::parse("R/./B/./G").unwrap();
        apply_gravity(&mut b);
        assert_eq!(column(&b, 0), vec![Empty, Empty, Red, Blue, Green]);
    }

    #[test]
    fn gravity_is_per_column() {
        let mut b = Grid::parse("R./.B/G.").unwrap();
        apply_gravity(&mut b);
        assert_eq!(b.to_text(), "../R./GB");
    }

    #[test]
    fn gravity_on_full_column_is_noop() {
        let mut b = Grid::parse("RB/GL/DH").unwrap();
        let before = b.clone();
        apply_gravity(&mut b);
        assert_eq!(b, before);
    }

    #[test]
    fn remove_clears_flagged_cells_only() {
        let mut b = Grid::parse("RRR/BGL").unwrap();
        let mut overlay = Grid::filled(2, 3, Undefined);
        for c in 0..3 {
            overlay.set(Coord::new(0, c), Red);
        }
        remove_matches(&mut b, &overlay);
        assert_eq!(b.to_text(), ".../BGL");
    }
}
