//! Path exclusion policy applied during file discovery.

use std::path::Path;

/// Directory names excluded from traversal entirely. Matching a component
/// prunes the whole subtree.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".svn",
    ".hg",
    "dist",
    "build",
    "out",
    "target",
    "vendor",
    "coverage",
    "__pycache__",
    ".venv",
    ".next",
    ".cache",
];

/// Substrings that mark a file name as test-oriented.
pub const TEST_FILE_MARKERS: &[&str] = &[".test.", ".spec.", "_test.", "test_"];

/// Decides whether a path is outside scan scope.
///
/// Test markers apply to file names only: a directory named `tests` is still
/// traversed. This asymmetry is carried over from the original scanner and is
/// kept behind an explicit switch rather than silently corrected.
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    exclude_test_files: bool,
}

impl ExclusionPolicy {
    pub fn new() -> Self {
        Self {
            exclude_test_files: true,
        }
    }

    pub fn with_test_files_excluded(mut self, exclude: bool) -> Self {
        self.exclude_test_files = exclude;
        self
    }

    pub fn should_exclude(&self, path: &Path, is_dir: bool) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if is_dir {
            return EXCLUDED_DIRS.contains(&name);
        }

        self.exclude_test_files && TEST_FILE_MARKERS.iter().any(|m| name.contains(m))
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new()
    }
}
