//! File discovery: walks the project tree and collects scannable files.

use crate::exclude::ExclusionPolicy;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Extensions eligible for line scanning: source code, key material, and
/// structured configuration.
pub const SCAN_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "mjs", "cjs", "py", "rb", "go", "rs", "java", "kt", "php", "c", "h",
    "cc", "cpp", "hpp", "cs", "swift", "sh", "pem", "key", "env", "json", "yaml", "yml", "toml",
    "xml", "ini", "properties",
];

/// Recursively enumerates files under a project root, applying the exclusion
/// policy and the extension allowlist.
pub struct FileEnumerator {
    policy: ExclusionPolicy,
}

impl FileEnumerator {
    pub fn new(policy: ExclusionPolicy) -> Self {
        Self { policy }
    }

    /// Walk the tree and return every eligible file path.
    ///
    /// Unreadable directory entries are logged and skipped; enumeration
    /// continues with the remaining siblings.
    pub fn enumerate(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                // The root itself is never pruned, even if its name matches.
                entry.depth() == 0
                    || !self
                        .policy
                        .should_exclude(entry.path(), entry.file_type().is_dir())
            });

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    if has_scan_extension(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                }
            }
        }

        debug!(count = files.len(), root = %root.display(), "file enumeration complete");
        files
    }
}

fn has_scan_extension(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        // Dotenv files have no extension in the Path sense but hold credentials.
        if name == ".env" || name.starts_with(".env.") {
            return true;
        }
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCAN_EXTENSIONS.contains(&ext))
}
