use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::DiscoveryError;

/// Recursively list every test file under `root`.
///
/// Returns absolute paths of all regular files whose path ends with
/// `suffix`, minus exact-match members of `excludes`, sorted by byte order
/// over the whole path string. Symbolic links are not followed, so a
/// link cycle cannot loop the walk or double-count a subtree.
///
/// An empty result is valid here; the caller decides whether emptiness is
/// an error. Exclusion entries are compared verbatim against the
/// canonicalized output paths, so a relative or differently-spelled
/// exclude will not match.
pub fn scan(
    root: &Path,
    suffix: &str,
    excludes: &HashSet<PathBuf>,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError::directory_not_found(root));
    }
    let root = root
        .canonicalize()
        .map_err(|e| DiscoveryError::resolve(root, e))?;

    let mut entries = Vec::new();
    for entry in WalkDir::new(&root).follow_links(false) {
        let entry = entry.map_err(|e| DiscoveryError::scan_failed(&root, e))?;
        entries.push(entry);
    }

    // Sort before filtering so the result is deterministic regardless of the
    // filesystem's enumeration order. The later filters preserve order.
    entries.sort_by(|a, b| a.path().as_os_str().cmp(b.path().as_os_str()));

    let files: Vec<PathBuf> = entries
        .into_iter()
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().to_string_lossy().ends_with(suffix))
        .map(walkdir::DirEntry::into_path)
        .filter(|path| !excludes.contains(path))
        .collect();

    debug!(root = %root.display(), suffix, matched = files.len(), "directory scan complete");
    Ok(files)
}
