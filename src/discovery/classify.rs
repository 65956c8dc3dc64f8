use std::path::Path;

/// What a target path refers to on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    Missing,
}

/// Classify a path as a regular file, a directory, or neither. First
/// decision point for every target string; pure filesystem query.
pub fn classify(path: &Path) -> PathKind {
    if path.is_file() {
        PathKind::File
    } else if path.is_dir() {
        PathKind::Directory
    } else {
        PathKind::Missing
    }
}
