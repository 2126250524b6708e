pub mod writer;

pub use writer::{FileResultWriter, MemoryResultWriter, OutputFormat, ResultWriter};
