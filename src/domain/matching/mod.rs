// マッチ検出・消去・落下・連鎖解決

pub mod cascade;
pub mod detector;
pub mod gravity;
pub mod record;

pub use cascade::{evaluate_board, Cascade};
pub use detector::{extract_matches, find_matches, find_overlay, has_match};
pub use gravity::{apply_gravity, remove_matches};
pub use record::MatchRecord;
