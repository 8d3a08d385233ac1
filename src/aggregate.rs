//! Merges phase outputs into the final, immutable scan result.

use crate::rules::types::{Finding, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

/// Findings grouped into the five fixed severity tiers. Buckets are never
/// absent, only empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBuckets {
    #[serde(default)]
    pub critical: Vec<Finding>,
    #[serde(default)]
    pub high: Vec<Finding>,
    #[serde(default)]
    pub medium: Vec<Finding>,
    #[serde(default)]
    pub low: Vec<Finding>,
    #[serde(default)]
    pub info: Vec<Finding>,
}

impl SeverityBuckets {
    pub fn push(&mut self, finding: Finding) {
        self.bucket_mut(finding.severity).push(finding);
    }

    pub fn bucket(&self, severity: Severity) -> &[Finding] {
        match severity {
            Severity::Critical => &self.critical,
            Severity::High => &self.high,
            Severity::Medium => &self.medium,
            Severity::Low => &self.low,
            Severity::Info => &self.info,
        }
    }

    fn bucket_mut(&mut self, severity: Severity) -> &mut Vec<Finding> {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::High => &mut self.high,
            Severity::Medium => &mut self.medium,
            Severity::Low => &mut self.low,
            Severity::Info => &mut self.info,
        }
    }

    pub fn total(&self) -> usize {
        Severity::DESCENDING
            .iter()
            .map(|s| self.bucket(*s).len())
            .sum()
    }
}

/// The single artifact a scan produces. `total_findings` is computed from the
/// buckets, so the sum invariant holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub total_findings: usize,
    pub findings: SeverityBuckets,
    pub scanned_file_count: usize,
    pub scan_duration_ms: u64,
}

/// Concatenate the phase streams and bucket by severity.
///
/// With `dedupe` enabled, findings sharing file, line, and category collapse
/// to the first one seen, so a generic rule and a named rule firing on the
/// same line report once. Off by default: maximal recall.
pub fn aggregate(
    streams: Vec<Vec<Finding>>,
    scanned_file_count: usize,
    duration: Duration,
    dedupe: bool,
) -> ScanResult {
    let mut buckets = SeverityBuckets::default();
    let mut seen = HashSet::new();

    for finding in streams.into_iter().flatten() {
        if dedupe {
            let key = (finding.file.clone(), finding.line, finding.category);
            if !seen.insert(key) {
                continue;
            }
        }
        buckets.push(finding);
    }

    let total_findings = buckets.total();
    ScanResult {
        total_findings,
        findings: buckets,
        scanned_file_count,
        scan_duration_ms: duration.as_millis() as u64,
    }
}
