use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// グローバルな詳細ログフラグ
pub static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

/// ログファイルのグローバルハンドル
static LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// ログファイルを初期化する
pub fn init_log_file(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    match LOG_FILE.lock() {
        Ok(mut log_file) => {
            *log_file = Some(file);
            Ok(())
        }
        Err(_) => Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "ログファイルのロックが破損しています",
        )),
    }
}

/// ログを書き込む（ファイル未設定時は標準エラーへ）
pub fn write_log(message: String) {
    if let Ok(mut log_file) = LOG_FILE.lock() {
        match *log_file {
            Some(ref mut file) => {
                let _ = writeln!(file, "{}", message);
                let _ = file.flush();
            }
            None => eprintln!("{}", message),
        }
    }
}

/// 詳細ログを有効にする
pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

/// 詳細ログを無効にする
pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

/// 詳細ログが有効かチェック
pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// 詳細ログ出力マクロ
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            let message = format!($($arg)*);
            $crate::logging::write_log(message);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_log_goes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solver.log");
        init_log_file(&path).unwrap();

        enable_verbose_logging();
        assert!(is_verbose());
        crate::vlog!("深さ={} / 最良={:.2}", 3, 1.5);
        disable_verbose_logging();
        crate::vlog!("出力されない");

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("深さ=3 / 最良=1.50"));
        assert!(!text.contains("出力されない"));
    }
}
