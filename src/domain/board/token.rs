// ドロップ（トークン）型定義

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// 盤面上のドロップ種別
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenType {
    Red,       // 'R'
    Blue,      // 'B'
    Green,     // 'G'
    Light,     // 'L'
    Dark,      // 'D'
    Heart,     // 'H' (低価値)
    Empty,     // '.' 空セル（消去・落下の途中状態のみ）
    Undefined, // '?' オーバーレイ上の「どのマッチにも属さない」
}

impl TokenType {
    /// 実体のあるドロップ一覧（盤面生成用）
    pub const CONCRETE: [TokenType; 6] = [
        TokenType::Red,
        TokenType::Blue,
        TokenType::Green,
        TokenType::Light,
        TokenType::Dark,
        TokenType::Heart,
    ];

    /// 実体のあるドロップか
    pub fn is_concrete(self) -> bool {
        !matches!(self, TokenType::Empty | TokenType::Undefined)
    }

    /// 文字からTokenTypeに変換
    pub fn from_char(ch: char) -> Result<Self> {
        match ch {
            'R' | 'r' => Ok(TokenType::Red),
            'B' | 'b' => Ok(TokenType::Blue),
            'G' | 'g' => Ok(TokenType::Green),
            'L' | 'l' => Ok(TokenType::Light),
            'D' | 'd' => Ok(TokenType::Dark),
            'H' | 'h' => Ok(TokenType::Heart),
            '.' | '・' => Ok(TokenType::Empty),
            '?' => Ok(TokenType::Undefined),
            _ => Err(anyhow!("不正な文字: {}", ch)),
        }
    }

    /// TokenTypeを文字に変換
    pub fn to_char(self) -> char {
        match self {
            TokenType::Red => 'R',
            TokenType::Blue => 'B',
            TokenType::Green => 'G',
            TokenType::Light => 'L',
            TokenType::Dark => 'D',
            TokenType::Heart => 'H',
            TokenType::Empty => '.',
            TokenType::Undefined => '?',
        }
    }

    /// 表示名
    pub fn name(self) -> &'static str {
        match self {
            TokenType::Red => "火",
            TokenType::Blue => "水",
            TokenType::Green => "木",
            TokenType::Light => "光",
            TokenType::Dark => "闇",
            TokenType::Heart => "回復",
            TokenType::Empty => "空",
            TokenType::Undefined => "未定義",
        }
    }

    /// 盤面編集用の巡回（空・未定義は赤から始まる）
    pub fn cycle(self) -> Self {
        match self {
            TokenType::Red => TokenType::Blue,
            TokenType::Blue => TokenType::Green,
            TokenType::Green => TokenType::Light,
            TokenType::Light => TokenType::Dark,
            TokenType::Dark => TokenType::Heart,
            TokenType::Heart | TokenType::Empty | TokenType::Undefined => TokenType::Red,
        }
    }
}
