//! Append-only change history, kept in two formats: a CSV row log and a
//! JSON array rewritten wholesale on every append.

use crate::error::Result;
use crate::io;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// LogEntry
// ---------------------------------------------------------------------------

/// One recorded sensitivity change. `autoexec_content` is the full patched
/// config text, so a past autoexec can be restored from either log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub sensitivity: f64,
    pub autoexec_content: String,
}

/// Current local time in the format used for log entries.
pub fn change_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S %z").to_string()
}

// ---------------------------------------------------------------------------
// Logbook
// ---------------------------------------------------------------------------

const CSV_HEADER: [&str; 3] = ["timestamp", "sensitivity", "autoexec_content"];

/// The pair of physical logs. `append` keeps them in lockstep: every call
/// adds exactly one row and one JSON record, in the same order.
#[derive(Debug, Clone)]
pub struct Logbook {
    csv_path: PathBuf,
    json_path: PathBuf,
}

impl Logbook {
    pub fn new(csv_path: PathBuf, json_path: PathBuf) -> Self {
        Self {
            csv_path,
            json_path,
        }
    }

    /// Standard log locations under a tool root.
    pub fn at_root(root: &Path) -> Self {
        Self::new(
            crate::paths::csv_log_path(root),
            crate::paths::json_log_path(root),
        )
    }

    /// Append `entry` to both logs. The containing directory must already
    /// exist; a missing directory surfaces as an I/O error.
    pub fn append(&self, entry: &LogEntry) -> Result<()> {
        self.append_csv(entry)?;
        self.append_json(entry)
    }

    /// Row log: header row on first write, then one row per change.
    fn append_csv(&self, entry: &LogEntry) -> Result<()> {
        let write_header = !self.csv_path.exists();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if write_header {
            wtr.write_record(CSV_HEADER)?;
        }
        wtr.serialize(entry)?;
        wtr.flush()?;
        Ok(())
    }

    /// Structured log: read the whole array, push, rewrite pretty-printed.
    /// O(n) in history size — fine at interactive invocation rates.
    fn append_json(&self, entry: &LogEntry) -> Result<()> {
        let mut entries = self.read_json()?;
        entries.push(entry.clone());
        let data = serde_json::to_string_pretty(&entries)?;
        io::atomic_write(&self.json_path, data.as_bytes())
    }

    /// All recorded entries, oldest first. Empty when no log exists yet.
    pub fn read_json(&self) -> Result<Vec<LogEntry>> {
        if !self.json_path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.json_path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn logbook(dir: &TempDir) -> Logbook {
        Logbook::new(dir.path().join("log.csv"), dir.path().join("log.json"))
    }

    fn entry(timestamp: &str, sensitivity: f64, content: &str) -> LogEntry {
        LogEntry {
            timestamp: timestamp.to_string(),
            sensitivity,
            autoexec_content: content.to_string(),
        }
    }

    #[test]
    fn json_appends_in_call_order() {
        let dir = TempDir::new().unwrap();
        let log = logbook(&dir);
        log.append(&entry("t1", 1.0, "a")).unwrap();
        log.append(&entry("t2", 2.0, "b")).unwrap();

        let entries = log.read_json().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, "t1");
        assert_eq!(entries[0].sensitivity, 1.0);
        assert_eq!(entries[0].autoexec_content, "a");
        assert_eq!(entries[1].timestamp, "t2");
        assert_eq!(entries[1].sensitivity, 2.0);
        assert_eq!(entries[1].autoexec_content, "b");
    }

    #[test]
    fn csv_header_written_exactly_once() {
        let dir = TempDir::new().unwrap();
        let log = logbook(&dir);
        log.append(&entry("t1", 1.0, "a")).unwrap();
        log.append(&entry("t2", 2.0, "b")).unwrap();
        log.append(&entry("t3", 3.0, "c")).unwrap();

        let content = std::fs::read_to_string(dir.path().join("log.csv")).unwrap();
        assert_eq!(
            content
                .lines()
                .filter(|l| l.starts_with("timestamp,"))
                .count(),
            1
        );

        let mut rdr = csv::Reader::from_path(dir.path().join("log.csv")).unwrap();
        let rows: Vec<LogEntry> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].sensitivity, 3.0);
    }

    #[test]
    fn csv_quotes_embedded_commas_and_newlines() {
        let dir = TempDir::new().unwrap();
        let log = logbook(&dir);
        let content = "// header\nsensitivity \"1.2\"\nbind \"a\", \"b\"";
        log.append(&entry("t1", 1.2, content)).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("log.csv")).unwrap();
        let rows: Vec<LogEntry> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].autoexec_content, content);
    }

    #[test]
    fn json_is_pretty_printed_array() {
        let dir = TempDir::new().unwrap();
        let log = logbook(&dir);
        log.append(&entry("t1", 0.9, "x")).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("log.json")).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\n  "));
        assert!(raw.contains("\"sensitivity\": 0.9"));
    }

    #[test]
    fn append_fails_when_directory_missing() {
        let dir = TempDir::new().unwrap();
        let log = Logbook::new(
            dir.path().join("missing/log.csv"),
            dir.path().join("missing/log.json"),
        );
        assert!(log.append(&entry("t1", 1.0, "a")).is_err());
    }

    #[test]
    fn read_json_empty_when_absent() {
        let dir = TempDir::new().unwrap();
        assert!(logbook(&dir).read_json().unwrap().is_empty());
    }

    #[test]
    fn timestamp_has_date_and_offset() {
        let ts = change_timestamp();
        // "2026-08-06 14:03:11 +0000" — date, time, numeric offset.
        assert_eq!(ts.len(), "2026-08-06 14:03:11 +0000".len());
        assert!(ts.contains(' '));
    }
}
