//! Artifact walk: find node log files under a dump directory.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use logvet_core::errors::ScanError;

/// Recursively collect every file under `root` whose name contains
/// `partial_name` (typically `node.log`).
///
/// Standard ignore filters are disabled: artifact dumps are not source
/// trees and hidden or git-ignored paths must still be scanned. Results
/// are sorted so verdict maps and reports are deterministic.
pub fn find_log_files(root: &Path, partial_name: &str) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).standard_filters(false).build() {
        let entry = entry.map_err(|err| ScanError::Io {
            path: root.to_path_buf(),
            source: std::io::Error::other(err),
        })?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if entry.file_name().to_string_lossy().contains(partial_name) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn finds_matching_files_recursively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("pod-0")).unwrap();
        fs::create_dir_all(dir.path().join("pod-1/nested")).unwrap();
        fs::write(dir.path().join("pod-0/node.log"), "").unwrap();
        fs::write(dir.path().join("pod-1/nested/node.log.1"), "").unwrap();
        fs::write(dir.path().join("pod-1/geth.log"), "").unwrap();
        fs::write(dir.path().join("events.json"), "").unwrap();

        let files = find_log_files(dir.path(), "node.log").unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f
            .file_name()
            .unwrap()
            .to_string_lossy()
            .contains("node.log")));
    }

    #[test]
    fn empty_directory_yields_no_files() {
        let dir = TempDir::new().unwrap();
        let files = find_log_files(dir.path(), "node.log").unwrap();
        assert!(files.is_empty());
    }
}
