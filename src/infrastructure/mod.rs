// インフラ層 - 並列実行、結果の保存、盤面生成

pub mod executor;
pub mod generator;
pub mod storage;

pub use executor::{ParallelConfig, ParallelExecutor};
pub use generator::BoardGenerator;
pub use storage::{FileResultWriter, MemoryResultWriter, ResultWriter};
