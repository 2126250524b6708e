// Grid型 - R×C のドロップ盤面

use std::fmt;
use std::ops::{Index, IndexMut};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::direction::Direction;
use super::token::TokenType;
use crate::domain::error::SolveError;

/// R×C の盤面（行優先・値セマンティクス）
///
/// `clone()` は常に独立したコピーを作る。候補ごとに盤面を所有させるので、
/// 盤面ストレージを共有する経路は存在しない。
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<TokenType>,
}

impl Grid {
    /// 全セル Empty の盤面
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, TokenType::Empty)
    }

    /// 全セルを指定値で埋めた盤面（オーバーレイ生成にも使う）
    pub fn filled(rows: usize, cols: usize, value: TokenType) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// 行ごとの配列から構築
    pub fn from_rows(rows: Vec<Vec<TokenType>>) -> Result<Self, SolveError> {
        let r = rows.len();
        let c = rows.first().map_or(0, |row| row.len());
        if r == 0 || c == 0 || rows.iter().any(|row| row.len() != c) {
            return Err(SolveError::InvalidDimensions { rows: r, cols: c });
        }
        Ok(Self {
            rows: r,
            cols: c,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// 文字列表現から構築（行区切りは改行または '/'）
    pub fn parse(s: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in s.split(|ch| ch == '\n' || ch == '/') {
            let row = line
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .map(TokenType::from_char)
                .collect::<Result<Vec<_>>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(rows).map_err(|e| anyhow!(e))
    }

    /// 文字列表現に変換（1行1文字列）
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| self.row(r).iter().map(|t| t.to_char()).collect())
            .collect()
    }

    /// '/' 区切りの1行表現
    pub fn to_text(&self) -> String {
        self.to_lines().join("/")
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 盤面全体への直接アクセス（読み取り専用）
    pub fn cells(&self) -> &[TokenType] {
        &self.cells
    }

    /// 1行分のスライス
    pub fn row(&self, r: usize) -> &[TokenType] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    #[inline]
    fn index_of(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "座標が範囲外: {} (盤面 {}x{})",
            coord,
            self.rows,
            self.cols
        );
        coord.row * self.cols + coord.col
    }

    /// セルを取得（範囲外は不具合としてpanic）
    #[inline]
    pub fn get(&self, coord: Coord) -> TokenType {
        self.cells[self.index_of(coord)]
    }

    /// セルを設定（範囲外は不具合としてpanic）
    #[inline]
    pub fn set(&mut self, coord: Coord, value: TokenType) {
        let i = self.index_of(coord);
        self.cells[i] = value;
    }

    /// 2セルの値を交換
    pub fn swap(&mut self, a: Coord, b: Coord) {
        let ia = self.index_of(a);
        let ib = self.index_of(b);
        self.cells.swap(ia, ib);
    }

    /// 指定方向に1歩進んだ座標（盤外ならNone）
    pub fn step(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let row = coord.row.checked_add_signed(dr)?;
        let col = coord.col.checked_add_signed(dc)?;
        let next = Coord::new(row, col);
        self.contains(next).then_some(next)
    }

    /// 盤内の4近傍（端・角では減る）
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.step(coord, d))
    }

    /// 全座標（行優先）
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows * self.cols).map(move |i| Coord::new(i / cols, i % cols))
    }

    /// 最初の空・未定義セル（行優先）
    pub fn first_unready(&self) -> Option<Coord> {
        self.cells
            .iter()
            .position(|t| !t.is_concrete())
            .map(|i| Coord::new(i / self.cols, i % self.cols))
    }

    /// 探索可能な盤面か（空・未定義セルなし）
    pub fn is_ready(&self) -> bool {
        self.first_unready().is_none()
    }
}

impl Index<Coord> for Grid {
    type Output = TokenType;

    fn index(&self, coord: Coord) -> &TokenType {
        &self.cells[self.index_of(coord)]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut TokenType {
        let i = self.index_of(coord);
        &mut self.cells[i]
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({}x{} {})", self.rows, self.cols, self.to_text())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.to_lines()
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = anyhow::Error;

    fn try_from(lines: Vec<String>) -> Result<Self> {
        Self::parse(&lines.join("\n"))
    }
}
