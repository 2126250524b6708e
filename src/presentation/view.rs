// 表示用の変換（経路オーバーレイ・盤面テキスト）

use std::fmt;

use crate::domain::board::{Coord, Direction, Grid};
use crate::domain::search::Solution;

/// 解の経路を表示用に展開したもの
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathView {
    /// 起点を先頭に、通過したセルを順に
    pub cells: Vec<Coord>,
    pub moves: Vec<Direction>,
}

impl PathView {
    pub fn new(origin: Coord, moves: &[Direction]) -> Self {
        let mut cells = Vec::with_capacity(moves.len() + 1);
        cells.push(origin);
        let mut cur = origin;
        for &d in moves {
            let (dr, dc) = d.delta();
            match (cur.row.checked_add_signed(dr), cur.col.checked_add_signed(dc)) {
                (Some(row), Some(col)) => {
                    cur = Coord::new(row, col);
                    cells.push(cur);
                }
                // 盤面外に出る経路は探索が生成しない
                _ => break,
            }
        }
        Self {
            cells,
            moves: moves.to_vec(),
        }
    }

    pub fn from_solution(solution: &Solution) -> Self {
        Self::new(solution.origin, &solution.path)
    }

    pub fn origin(&self) -> Coord {
        self.cells[0]
    }

    /// 最後に指を離すセル
    pub fn end(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// "(2,3) R R D L" 形式
    pub fn compact(&self) -> String {
        let o = self.origin();
        let mut s = format!("({},{})", o.row, o.col);
        for d in &self.moves {
            s.push(' ');
            s.push(d.to_char());
        }
        s
    }

    /// 矢印表記 "↓→→"
    pub fn arrows(&self) -> String {
        self.moves.iter().map(|d| d.arrow()).collect()
    }
}

impl fmt::Display for PathView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact())
    }
}

/// 盤面のテキスト表示
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    lines: Vec<String>,
}

impl BoardView {
    pub fn new(grid: &Grid) -> Self {
        Self::render(grid, None)
    }

    /// 起点セルを [ ] で囲んで表示
    pub fn with_origin(grid: &Grid, origin: Coord) -> Self {
        Self::render(grid, Some(origin))
    }

    fn render(grid: &Grid, marker: Option<Coord>) -> Self {
        let lines = (0..grid.rows())
            .map(|r| {
                (0..grid.cols())
                    .map(|c| {
                        let p = Coord::new(r, c);
                        let ch = grid.get(p).to_char();
                        if marker == Some(p) {
                            format!("[{}]", ch)
                        } else {
                            format!(" {} ", ch)
                        }
                    })
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn path_view_walks_from_origin() {
        let v = PathView::new(Coord::new(2, 3), &[Right, Right, Down, Left]);
        assert_eq!(
            v.cells,
            vec![
                Coord::new(2, 3),
                Coord::new(2, 4),
                Coord::new(2, 5),
                Coord::new(3, 5),
                Coord::new(3, 4),
            ]
        );
        assert_eq!(v.end(), Coord::new(3, 4));
        assert_eq!(v.compact(), "(2,3) R R D L");
        assert_eq!(v.arrows(), "→→↓←");
    }

    #[test]
    fn empty_path_is_origin_only() {
        let v = PathView::new(Coord::new(0, 0), &[]);
        assert_eq!(v.cells, vec![Coord::new(0, 0)]);
        assert_eq!(v.to_string(), "(0,0)");
    }

    #[test]
    fn board_view_lines() {
        let g = Grid::parse("RB/.H").unwrap();
        let v = BoardView::new(&g);
        assert_eq!(v.lines(), &[" R  B".to_string(), " .  H".to_string()]);

        let marked = BoardView::with_origin(&g, Coord::new(1, 1));
        assert_eq!(marked.lines()[1], " . [H]");
    }
}
