//! JSONL file writer for query settlements.
//!
//! Each settlement is serialized as a single JSON line with session,
//! elapsed time, file references, and a `timestamp`, appended to the file
//! via a buffered writer.

use promptgate_application::ResultSink;
use promptgate_domain::{FileReference, SessionId};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing::warn;

/// JSONL settlement log that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlSettlementLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlSettlementLog {
    /// Create a new log writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create settlement log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not create settlement log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for JsonlSettlementLog {
    fn record_settlement(
        &self,
        session: &SessionId,
        elapsed: Duration,
        file_references: &[FileReference],
    ) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = serde_json::json!({
            "type": "settlement",
            "timestamp": timestamp,
            "session": session,
            "elapsed_ms": elapsed.as_millis() as u64,
            "file_references": file_references,
        });

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush per record for crash safety — JSONL is append-only
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlSettlementLog {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_settlement_log_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.settlements.jsonl");
        let log = JsonlSettlementLog::new(&path).unwrap();

        log.record_settlement(
            &SessionId::new("s1"),
            Duration::from_millis(1234),
            &[FileReference::new("src/main.rs")],
        );
        log.record_settlement(&SessionId::new("s2"), Duration::from_millis(10), &[]);

        // Flush
        drop(log);

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "settlement");
        assert!(first.get("timestamp").is_some());
        assert_eq!(first["session"], "s1");
        assert_eq!(first["elapsed_ms"], 1234);
        assert_eq!(first["file_references"][0]["path"], "src/main.rs");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["session"], "s2");
        assert!(second["file_references"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_settlement_log_returns_none_for_unwritable_path() {
        let result = JsonlSettlementLog::new("/proc/definitely/not/writable.jsonl");
        assert!(result.is_none());
    }
}
