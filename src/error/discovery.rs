use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while scanning the filesystem for test files.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to scan directory '{path}': {source}")]
    ScanFailed {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to resolve path '{path}': {source}")]
    Resolve {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DiscoveryError {
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    pub fn scan_failed(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::ScanFailed {
            path: path.into(),
            source,
        }
    }

    pub fn resolve(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Resolve {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_display() {
        let err = DiscoveryError::directory_not_found("/path/to/tests");
        assert_eq!(err.to_string(), "directory not found: /path/to/tests");
    }

    #[test]
    fn test_resolve_display() {
        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = DiscoveryError::resolve("/path/to/a_test.dart", io);
        assert!(err
            .to_string()
            .starts_with("failed to resolve path '/path/to/a_test.dart'"));
    }
}
