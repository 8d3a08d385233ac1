use crate::aggregate::ScanResult;
use crate::reporter::Reporter;
use crate::rules::types::{Finding, Severity};
use colored::Colorize;

const MAX_EXAMPLES_PER_BUCKET: usize = 3;

/// Human console summary: per-bucket counts in severity order with a few
/// example findings each. The persisted report stays complete regardless of
/// what is shown here.
pub struct TerminalReporter {
    min_severity: Severity,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self {
            min_severity: Severity::Info,
        }
    }

    pub fn with_min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = min_severity;
        self
    }

    fn severity_label(&self, severity: Severity) -> colored::ColoredString {
        let label = format!("[{}]", severity);
        match severity {
            Severity::Critical => label.red().bold(),
            Severity::High => label.yellow().bold(),
            Severity::Medium => label.cyan(),
            Severity::Low => label.white(),
            Severity::Info => label.dimmed(),
        }
    }

    fn format_finding(&self, finding: &Finding) -> String {
        match finding.line {
            Some(line) => format!("  {}:{} {}\n", finding.file, line, finding.description),
            None => format!("  {} {}\n", finding.file, finding.description),
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &ScanResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Scanned {} file(s) in {} ms\n",
            result.scanned_file_count, result.scan_duration_ms
        ));

        if result.total_findings == 0 {
            output.push_str(&format!("{}\n", "No security issues found.".green().bold()));
            return output;
        }

        output.push('\n');
        for severity in Severity::DESCENDING {
            if severity < self.min_severity {
                continue;
            }
            let bucket = result.findings.bucket(severity);
            if bucket.is_empty() {
                continue;
            }

            output.push_str(&format!(
                "{} {} finding(s)\n",
                self.severity_label(severity),
                bucket.len()
            ));
            for finding in bucket.iter().take(MAX_EXAMPLES_PER_BUCKET) {
                output.push_str(&self.format_finding(finding));
            }
            if bucket.len() > MAX_EXAMPLES_PER_BUCKET {
                output.push_str(&format!(
                    "  {}\n",
                    format!("+{} more", bucket.len() - MAX_EXAMPLES_PER_BUCKET).dimmed()
                ));
            }
        }

        output.push_str(&format!("\nTotal: {} finding(s)\n", result.total_findings));
        output
    }
}
