use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while resolving caller-supplied targets. All of these are
/// terminal and user-facing; none are retried.
#[derive(Error, Debug)]
pub enum TargetError {
    #[error("invalid target '{target}': not a test file or a directory")]
    InvalidTarget { target: String },

    #[error("test file not found: {path}")]
    TargetNotFound { path: PathBuf },

    #[error("no test files found in directory: {path}")]
    EmptyDirectoryTarget { path: PathBuf },

    #[error("ambiguous target '{target}': matched {count} test files, expected exactly one")]
    AmbiguousTarget { target: String, count: usize },

    #[error("no test file matched target '{target}'")]
    NoMatch { target: String },
}

impl TargetError {
    pub fn invalid_target(target: impl Into<String>) -> Self {
        Self::InvalidTarget {
            target: target.into(),
        }
    }

    pub fn target_not_found(path: impl Into<PathBuf>) -> Self {
        Self::TargetNotFound { path: path.into() }
    }

    pub fn empty_directory_target(path: impl Into<PathBuf>) -> Self {
        Self::EmptyDirectoryTarget { path: path.into() }
    }

    pub fn ambiguous_target(target: impl Into<String>, count: usize) -> Self {
        Self::AmbiguousTarget {
            target: target.into(),
            count,
        }
    }

    pub fn no_match(target: impl Into<String>) -> Self {
        Self::NoMatch {
            target: target.into(),
        }
    }
}
