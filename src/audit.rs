//! Dependency advisory lookup via `npm audit`.
//!
//! Best-effort enrichment: every failure mode (tool missing, timeout,
//! non-zero exit without parseable output, malformed JSON) degrades to an
//! empty finding list and never blocks the rest of the scan.

use crate::rules::types::{Category, Finding, Severity};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Manifest whose presence enables the audit phase.
pub const DEPENDENCY_MANIFEST: &str = "package.json";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct DependencyAuditor {
    timeout: Duration,
}

impl DependencyAuditor {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run the advisory lookup for the project, if it declares dependencies.
    pub fn audit(&self, root: &Path) -> Vec<Finding> {
        if !root.join(DEPENDENCY_MANIFEST).is_file() {
            debug!("no dependency manifest, skipping audit phase");
            return Vec::new();
        }

        let Some(raw) = self.run_npm_audit(root) else {
            return Vec::new();
        };

        match parse_audit_report(&raw) {
            Ok(findings) => {
                debug!(count = findings.len(), "dependency audit complete");
                findings
            }
            Err(err) => {
                warn!(error = %err, "failed to parse npm audit output, ignoring");
                Vec::new()
            }
        }
    }

    /// Spawn `npm audit --json` with a hard deadline. A hung tool is killed
    /// and treated like any other audit failure.
    fn run_npm_audit(&self, root: &Path) -> Option<String> {
        let mut child = match Command::new("npm")
            .args(["audit", "--json"])
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(err) => {
                warn!(error = %err, "npm not available, skipping dependency audit");
                return None;
            }
        };

        // Drain stdout on a separate thread so a large report cannot fill the
        // pipe and deadlock the wait loop.
        let mut stdout = child.stdout.take()?;
        let reader = thread::spawn(move || {
            let mut buf = String::new();
            let _ = stdout.read_to_string(&mut buf);
            buf
        });

        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                // npm audit exits non-zero when advisories exist; the JSON on
                // stdout is still the report, so the exit status is ignored.
                Ok(Some(_)) => break,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        warn!("npm audit timed out, discarding results");
                        let _ = child.kill();
                        let _ = child.wait();
                        return None;
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(err) => {
                    warn!(error = %err, "failed to wait for npm audit");
                    let _ = child.kill();
                    return None;
                }
            }
        }

        reader.join().ok()
    }
}

impl Default for DependencyAuditor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct AuditReport {
    #[serde(default)]
    vulnerabilities: BTreeMap<String, Advisory>,
}

#[derive(Debug, Deserialize)]
struct Advisory {
    severity: String,
    #[serde(default)]
    via: Vec<serde_json::Value>,
}

impl Advisory {
    /// First advisory title, if npm reported structured cause data.
    fn title(&self) -> Option<&str> {
        self.via
            .iter()
            .find_map(|v| v.get("title").and_then(|t| t.as_str()))
    }

    fn cwe(&self) -> Option<String> {
        self.via.iter().find_map(|v| {
            v.get("cwe")
                .and_then(|c| c.as_array())
                .and_then(|arr| arr.first())
                .and_then(|c| c.as_str())
                .map(str::to_string)
        })
    }
}

fn parse_audit_report(raw: &str) -> serde_json::Result<Vec<Finding>> {
    let report: AuditReport = serde_json::from_str(raw)?;

    let findings = report
        .vulnerabilities
        .into_iter()
        .map(|(package, advisory)| {
            let description = match advisory.title() {
                Some(title) => format!("Vulnerable dependency: {package} ({title})"),
                None => format!("Vulnerable dependency: {package}"),
            };
            Finding {
                severity: map_severity(&advisory.severity),
                category: Category::Vulnerability,
                file: DEPENDENCY_MANIFEST.to_string(),
                line: None,
                description,
                recommendation: format!(
                    "Run npm audit fix or upgrade {package} to a patched version"
                ),
                cwe: advisory.cwe(),
                owasp: Some("A06:2021 Vulnerable and Outdated Components".to_string()),
            }
        })
        .collect();

    Ok(findings)
}

/// Map npm's severity vocabulary onto the internal taxonomy. Unrecognized
/// values default to medium.
fn map_severity(raw: &str) -> Severity {
    match raw.to_ascii_lowercase().as_str() {
        "critical" => Severity::Critical,
        "high" => Severity::High,
        "moderate" | "medium" => Severity::Medium,
        "low" => Severity::Low,
        "info" => Severity::Info,
        _ => Severity::Medium,
    }
}
