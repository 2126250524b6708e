// 探索モジュール

pub mod beam;
pub mod dedup;
pub mod observer;

pub use beam::BeamSearch;
pub use dedup::{dedup_candidates, equivalence_hash};
pub use observer::{SearchObserver, StepReport};
