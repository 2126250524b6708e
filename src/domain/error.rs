// 探索要求の棄却理由

use thiserror::Error;

/// 探索開始前に検出される棄却（部分結果は返さない）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// 空セル（または未定義セル）を含む盤面
    #[error("盤面が未完成です: ({row}, {col}) が空です")]
    BoardNotReady { row: usize, col: usize },

    /// 行数・列数が不正
    #[error("盤面サイズが不正です: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_location() {
        let e = SolveError::BoardNotReady { row: 2, col: 4 };
        assert!(e.to_string().contains("(2, 4)"));

        let e = SolveError::InvalidDimensions { rows: 0, cols: 6 };
        assert!(e.to_string().contains("0x6"));
    }
}
