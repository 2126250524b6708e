// 解の書き込み

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::board::{Coord, Direction, Grid};
use crate::domain::matching::MatchRecord;
use crate::domain::search::Solution;

/// 出力1行分（順位付き）
#[derive(Serialize)]
struct RankedRecord<'a> {
    rank: usize,
    origin: Coord,
    path: &'a [Direction],
    score: f64,
    matches: &'a [MatchRecord],
    board: &'a Grid,
}

/// 解を書き込むためのtrait
pub trait ResultWriter: Send {
    /// 単一の解を書き込む
    fn write_solution(&mut self, solution: &Solution) -> Result<()>;

    /// 複数の解をバッチで書き込む
    fn write_batch(&mut self, solutions: &[Solution]) -> Result<()> {
        for s in solutions {
            self.write_solution(s)?;
        }
        Ok(())
    }

    /// 書き込みを完了（フラッシュ）
    fn flush(&mut self) -> Result<()>;

    /// 書き込んだ件数を取得
    fn count(&self) -> u64;
}

/// 出力フォーマット
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON Lines形式（1行1解）
    JsonLines,
    /// JSON配列形式
    JsonArray,
}

/// ファイルへの書き込み実装
pub struct FileResultWriter {
    writer: BufWriter<File>,
    count: u64,
    format: OutputFormat,
    finished: bool,
}

impl FileResultWriter {
    /// 新しいファイルライターを作成
    pub fn new(path: &Path, format: OutputFormat) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("出力ファイルを作成できません: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        if format == OutputFormat::JsonArray {
            writer.write_all(b"[\n")?;
        }
        Ok(Self {
            writer,
            count: 0,
            format,
            finished: false,
        })
    }

    /// JSON Lines形式で作成
    pub fn json_lines(path: &Path) -> Result<Self> {
        Self::new(path, OutputFormat::JsonLines)
    }

    /// JSON配列形式で作成
    pub fn json_array(path: &Path) -> Result<Self> {
        Self::new(path, OutputFormat::JsonArray)
    }
}

impl ResultWriter for FileResultWriter {
    fn write_solution(&mut self, solution: &Solution) -> Result<()> {
        let record = RankedRecord {
            rank: self.count as usize,
            origin: solution.origin,
            path: &solution.path,
            score: solution.score,
            matches: &solution.matches,
            board: &solution.board,
        };
        let json = serde_json::to_string(&record)?;
        match self.format {
            OutputFormat::JsonLines => {
                writeln!(self.writer, "{}", json)?;
            }
            OutputFormat::JsonArray => {
                if self.count > 0 {
                    writeln!(self.writer, ",")?;
                }
                write!(self.writer, "  {}", json)?;
            }
        }
        self.count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.format == OutputFormat::JsonArray && !self.finished {
            writeln!(self.writer, "\n]")?;
            self.finished = true;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Drop for FileResultWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// メモリ内書き込み実装（テスト用）
#[derive(Default)]
pub struct MemoryResultWriter {
    solutions: Vec<Solution>,
}

impl MemoryResultWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }
}

impl ResultWriter for MemoryResultWriter {
    fn write_solution(&mut self, solution: &Solution) -> Result<()> {
        self.solutions.push(solution.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn count(&self) -> u64 {
        self.solutions.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::TokenType;

    fn test_solution() -> Solution {
        Solution {
            origin: Coord::new(1, 0),
            path: vec![Direction::Up, Direction::Right],
            score: 1.25,
            matches: vec![MatchRecord::new(TokenType::Red, 4)],
            board: Grid::parse("RB/GL").unwrap(),
        }
    }

    #[test]
    fn memory_writer_stores_solutions() {
        let mut writer = MemoryResultWriter::new();
        writer.write_solution(&test_solution()).unwrap();
        writer.write_solution(&test_solution()).unwrap();
        assert_eq!(writer.count(), 2);
        assert_eq!(writer.solutions().len(), 2);
    }

    #[test]
    fn memory_writer_batch_write() {
        let mut writer = MemoryResultWriter::new();
        writer
            .write_batch(&[test_solution(), test_solution(), test_solution()])
            .unwrap();
        assert_eq!(writer.count(), 3);
    }

    #[test]
    fn json_lines_file_has_one_record_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        {
            let mut writer = FileResultWriter::json_lines(&path).unwrap();
            writer.write_batch(&[test_solution(), test_solution()]).unwrap();
            writer.flush().unwrap();
        }
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let v: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(v["rank"], 1);
        assert_eq!(v["path"], serde_json::json!(["Up", "Right"]));
        assert_eq!(v["board"], serde_json::json!(["RB", "GL"]));
    }

    #[test]
    fn json_array_file_is_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        {
            let mut writer = FileResultWriter::json_array(&path).unwrap();
            writer.write_solution(&test_solution()).unwrap();
            writer.write_solution(&test_solution()).unwrap();
        }
        let text = std::fs::read_to_string(&path).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v.as_array().unwrap().len(), 2);
    }
}
