//! JSON report persistence.
//!
//! ## Report Format
//!
//! ```text
//! {
//!     "timestamp": "2024-03-07 09:05:02",
//!     "length": 4,
//!     "gc_percentage": 100.0,
//!     "counts": {
//!         "A": 0,
//!         "C": 2,
//!         "G": 2,
//!         "T": 0,
//!         "U": 0,
//!         "N": 0
//!     }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use crate::stats::StatsReport;

/// Default file name used by the interactive save.
pub const DEFAULT_REPORT_PATH: &str = "report.json";

/// Errors that can occur while saving or loading a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to access report file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid report JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Serializes a report as pretty JSON indented with 4 spaces.
pub fn to_json(report: &StatsReport) -> ReportResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    report.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Parses a report from JSON text.
pub fn from_json(content: &str) -> ReportResult<StatsReport> {
    Ok(serde_json::from_str(content)?)
}

/// Writes a report to `path`, replacing any existing file.
pub fn save_report<P: AsRef<Path>>(report: &StatsReport, path: P) -> ReportResult<()> {
    let json = to_json(report)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads a report previously written by [`save_report`].
pub fn load_report<P: AsRef<Path>>(path: P) -> ReportResult<StatsReport> {
    let content = fs::read_to_string(path)?;
    from_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    use crate::model::BaseCounts;
    use crate::stats::compute_stats;

    fn sample() -> StatsReport {
        StatsReport {
            timestamp: "2024-03-07 09:05:02".to_string(),
            length: 4,
            gc_percentage: 100.0,
            counts: BaseCounts {
                a: 0,
                c: 2,
                g: 2,
                t: 0,
                u: 0,
                n: 0,
            },
        }
    }

    #[test]
    fn test_exact_layout() {
        let expected = concat!(
            "{\n",
            "    \"timestamp\": \"2024-03-07 09:05:02\",\n",
            "    \"length\": 4,\n",
            "    \"gc_percentage\": 100.0,\n",
            "    \"counts\": {\n",
            "        \"A\": 0,\n",
            "        \"C\": 2,\n",
            "        \"G\": 2,\n",
            "        \"T\": 0,\n",
            "        \"U\": 0,\n",
            "        \"N\": 0\n",
            "    }\n",
            "}",
        );
        assert_eq!(to_json(&sample()).unwrap(), expected);
    }

    #[test]
    fn test_to_json_keeps_non_ascii_timestamp() {
        let mut report = sample();
        report.timestamp = "2024-03-07 09:05:02 \u{e9}t\u{e9}".to_string();
        let json = to_json(&report).unwrap();
        assert!(json.contains("\"timestamp\": \"2024-03-07 09:05:02 \u{e9}t\u{e9}\","));
        assert_eq!(from_json(&json).unwrap(), report);
    }

    #[test]
    fn test_fractional_percentage() {
        let mut report = sample();
        report.gc_percentage = 33.33;
        assert!(to_json(&report).unwrap().contains("\"gc_percentage\": 33.33,"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        save_report(&sample(), &path).unwrap();
        let loaded = load_report(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        fs::write(&path, "stale content that is much longer than nothing").unwrap();

        save_report(&sample(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), to_json(&sample()).unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_report(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ReportError::Io(_))));
    }

    #[test]
    fn test_load_missing_count_key() {
        let content = r#"{"timestamp": "x", "length": 1, "gc_percentage": 0.0,
            "counts": {"A": 1, "C": 0, "G": 0, "T": 0, "U": 0}}"#;
        assert!(matches!(from_json(content), Err(ReportError::Json(_))));
    }

    proptest! {
        #[test]
        fn report_round_trip(seq in "[ACGTUN]{1,100}") {
            let report = compute_stats(&seq).unwrap();
            let parsed = from_json(&to_json(&report).unwrap()).unwrap();
            prop_assert_eq!(parsed.length, report.length);
            prop_assert_eq!(parsed.gc_percentage, report.gc_percentage);
            prop_assert_eq!(parsed.counts, report.counts);
        }
    }
}
