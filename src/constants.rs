// 盤面・探索の既定値とユーティリティ型定義

use nohash_hasher::BuildNoHashHasher;

/// ====== 盤面定数 ======
pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 6;

/// 成立に必要な直線の長さ
pub const MIN_RUN: usize = 3;

/// ====== スコア定数 ======
pub const SIZE_BONUS_RATE: f64 = 0.25;
pub const COMBO_BONUS_RATE: f64 = 0.25;
pub const DEFAULT_WEIGHT: f64 = 1.0;
pub const LOW_VALUE_WEIGHT: f64 = 0.3;

/// ====== 探索定数 ======
pub const DEFAULT_MAX_PATH_LENGTH: u32 = 25;
pub const MAX_PATH_LENGTH_LIMIT: u32 = 64;
pub const DEFAULT_FRONTIER_WIDTH: usize = 30;
pub const DEFAULT_MAX_SOLUTIONS: usize = 30;

// u64 キー専用のノーハッシュ（高速化）
pub type U64Map<V> = std::collections::HashMap<u64, V, BuildNoHashHasher<u64>>;
