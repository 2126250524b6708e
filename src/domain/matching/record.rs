// マッチ記録

use serde::{Deserialize, Serialize};

use crate::domain::board::TokenType;

/// 1つのマッチ（同色4連結の最大クラスタ）
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    pub token: TokenType,
    pub size: usize,
    /// いずれかの行を端から端まで埋めている
    #[serde(default)]
    pub full_row: bool,
}

impl MatchRecord {
    pub fn new(token: TokenType, size: usize) -> Self {
        Self {
            token,
            size,
            full_row: false,
        }
    }

    pub fn with_full_row(mut self, full_row: bool) -> Self {
        self.full_row = full_row;
        self
    }
}

// 同値判定は (種別, 個数) のみ。full_row は盤面から導出される付随情報
impl PartialEq for MatchRecord {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token && self.size == other.size
    }
}

impl Eq for MatchRecord {}

impl std::hash::Hash for MatchRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.token.hash(state);
        self.size.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_full_row_flag() {
        let a = MatchRecord::new(TokenType::Red, 6);
        let b = MatchRecord::new(TokenType::Red, 6).with_full_row(true);
        assert_eq!(a, b);
        assert_ne!(a, MatchRecord::new(TokenType::Red, 5));
        assert_ne!(a, MatchRecord::new(TokenType::Blue, 6));
    }
}
