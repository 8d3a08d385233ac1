//! Line-oriented rule matching over a set of files.

use crate::rules::types::{Finding, Rule};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// Applies one category's rules to every line of every file.
///
/// Reported file paths are relative to the project root; line numbers are
/// 1-based. A file that cannot be read is logged and skipped, never failing
/// the scan.
pub struct LineMatcher<'a> {
    rules: &'a [Rule],
    root: &'a Path,
}

impl<'a> LineMatcher<'a> {
    pub fn new(rules: &'a [Rule], root: &'a Path) -> Self {
        Self { rules, root }
    }

    /// Scan the given files, preserving file order in the output.
    pub fn scan_files(&self, files: &[PathBuf]) -> Vec<Finding> {
        files
            .par_iter()
            .flat_map_iter(|path| self.scan_file(path))
            .collect()
    }

    fn scan_file(&self, path: &Path) -> Vec<Finding> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(file = %path.display(), error = %err, "failed to read file, skipping");
                return Vec::new();
            }
        };

        let rel = path.strip_prefix(self.root).unwrap_or(path);
        let file = rel.to_string_lossy().replace('\\', "/");

        let mut findings = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            for rule in self.rules {
                if rule.matches(line) {
                    findings.push(Finding::from_rule(rule, &file, idx + 1));
                }
            }
        }

        trace!(file = %file, findings = findings.len(), "file scanned");
        findings
    }
}
