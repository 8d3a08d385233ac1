//! Scan orchestration: enumerate once, fan out the detection phases, join,
//! aggregate.

use crate::aggregate::{ScanResult, aggregate};
use crate::audit::DependencyAuditor;
use crate::discovery::FileEnumerator;
use crate::error::{Result, ScanError};
use crate::exclude::ExclusionPolicy;
use crate::rules::builtin;
use crate::rules::types::Category;
use crate::rules::LineMatcher;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub root: PathBuf,
    /// Collapse findings sharing file, line, and category.
    pub dedupe: bool,
    /// Scan files carrying a test marker instead of skipping them.
    pub include_test_files: bool,
    /// Hard deadline for the dependency audit subprocess.
    pub audit_timeout: Duration,
}

impl ScanOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dedupe: false,
            include_test_files: false,
            audit_timeout: Duration::from_secs(30),
        }
    }
}

/// Run a full scan of the project rooted at `options.root`.
///
/// The only fatal condition is a root that does not exist or is not a
/// directory. Everything below that (unreadable files, a missing or broken
/// audit tool) is absorbed by the phase that hits it; the result reflects
/// whatever could be scanned.
pub fn run_scan(options: &ScanOptions) -> Result<ScanResult> {
    let root = options.root.as_path();
    if !root.is_dir() {
        return Err(ScanError::InvalidProjectRoot(root.display().to_string()));
    }

    let started = Instant::now();
    info!(root = %root.display(), "starting scan");

    let policy = ExclusionPolicy::new().with_test_files_excluded(!options.include_test_files);
    let files = FileEnumerator::new(policy).enumerate(root);

    let auditor = DependencyAuditor::new().with_timeout(options.audit_timeout);

    // The three matching phases and the dependency audit are independent and
    // share only immutable data; the scope end is the single join barrier.
    let (secrets, vulnerabilities, compliance, dependencies) = thread::scope(|scope| {
        let audit = scope.spawn(|| auditor.audit(root));
        let secrets = scope.spawn(|| {
            LineMatcher::new(builtin::rules_for(Category::Secret), root).scan_files(&files)
        });
        let vulnerabilities = scope.spawn(|| {
            LineMatcher::new(builtin::rules_for(Category::Vulnerability), root).scan_files(&files)
        });
        let compliance = scope.spawn(|| {
            LineMatcher::new(builtin::rules_for(Category::Compliance), root).scan_files(&files)
        });

        (
            secrets.join().expect("secret phase panicked"),
            vulnerabilities.join().expect("vulnerability phase panicked"),
            compliance.join().expect("compliance phase panicked"),
            audit.join().expect("audit phase panicked"),
        )
    });

    debug!(
        secrets = secrets.len(),
        vulnerabilities = vulnerabilities.len(),
        compliance = compliance.len(),
        dependencies = dependencies.len(),
        "detection phases complete"
    );

    let result = aggregate(
        vec![secrets, vulnerabilities, compliance, dependencies],
        files.len(),
        started.elapsed(),
        options.dedupe,
    );

    info!(
        total = result.total_findings,
        files = result.scanned_file_count,
        "scan complete"
    );
    Ok(result)
}
