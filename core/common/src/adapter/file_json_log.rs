//! Log 実装群
//!
//! - FileJsonLog: ファイルへ JSONL 追記（常時）
//! - StderrLog: 人間向けに stderr へ 1 行出力（--verbose 時のみ配線）
//! - CompositeLog: 複数の Log へ同じレコードを流す
//! - NoopLog: テスト用

use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogRecord};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: std::path::PathBuf,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let mut w = self.fs.open_append(&self.path)?;
        let line = serde_json::to_string(record).map_err(|e| Error::json(e.to_string()))?;
        w.write_all(line.as_bytes())
            .map_err(|e| Error::io_msg(e.to_string()))?;
        w.write_all(b"\n")
            .map_err(|e| Error::io_msg(e.to_string()))?;
        w.flush().map_err(|e| Error::io_msg(e.to_string()))?;
        Ok(())
    }
}

/// stderr へ要点だけを出力する Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

/// `[level] layer/kind: message {fields}` 形式の 1 行にする
fn format_human(record: &LogRecord) -> String {
    let mut line = format!("[{}]", record.level.as_str());
    match (&record.layer, &record.kind) {
        (Some(l), Some(k)) => line.push_str(&format!(" {}/{}:", l, k)),
        (Some(l), None) => line.push_str(&format!(" {}:", l)),
        (None, Some(k)) => line.push_str(&format!(" {}:", k)),
        (None, None) => {}
    }
    line.push(' ');
    line.push_str(&record.message);
    if let Some(fields) = &record.fields {
        if let Ok(s) = serde_json::to_string(fields) {
            line.push(' ');
            line.push_str(&s);
        }
    }
    line
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_human(record));
        Ok(())
    }
}

/// 複数の Log に同じレコードを書き出す
///
/// 1 つが失敗しても残りには書き出し、最初のエラーを返す。
pub struct CompositeLog {
    logs: Vec<Arc<dyn Log>>,
}

impl CompositeLog {
    pub fn new(logs: Vec<Arc<dyn Log>>) -> Self {
        Self { logs }
    }
}

impl Log for CompositeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for log in &self.logs {
            if let Err(e) = log.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}
