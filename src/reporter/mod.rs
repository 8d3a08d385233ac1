//! Report rendering and persistence.

pub mod json;
pub mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::aggregate::{ScanResult, SeverityBuckets};
use crate::error::{Result, ScanError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default file name for the persisted report, under the project root.
pub const DEFAULT_REPORT_FILE: &str = "security-scan-report.json";

pub trait Reporter {
    fn report(&self, result: &ScanResult) -> String;
}

/// The persisted report schema. Findings are untruncated; building a report
/// never mutates the `ScanResult` it snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub findings: SeverityBuckets,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub scan_time: String,
    pub total_findings: usize,
    pub scanned_files: usize,
    pub scan_duration: u64,
}

impl Report {
    pub fn new(result: &ScanResult) -> Self {
        Self {
            summary: ReportSummary {
                scan_time: Utc::now().to_rfc3339(),
                total_findings: result.total_findings,
                scanned_files: result.scanned_file_count,
                scan_duration: result.scan_duration_ms,
            },
            findings: result.findings.clone(),
        }
    }
}

/// Write the full report to `output`, or to the default location under the
/// project root.
pub fn persist_report(
    result: &ScanResult,
    root: &Path,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(DEFAULT_REPORT_FILE));

    let report = Report::new(result);
    let body = serde_json::to_string_pretty(&report)?;
    fs::write(&path, body).map_err(|source| ScanError::ReportWrite {
        path: path.display().to_string(),
        source,
    })?;

    info!(path = %path.display(), "scan report written");
    Ok(path)
}
