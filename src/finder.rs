use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::discovery::{classify, scanner, PathKind};
use crate::error::{DiscoveryError, Result, TargetError};
use crate::tags;

/// Default path suffix that marks a file as a test.
pub const DEFAULT_TEST_SUFFIX: &str = "_test.dart";

/// Default directory scanned when no target is given.
pub const DEFAULT_TEST_DIR: &str = "test";

/// Resolves targets into a concrete list of test files.
///
/// Stateless per call and read-only on the filesystem; the struct only
/// carries the configured scan root and test-file suffix.
pub struct TestFinder {
    test_dir: PathBuf,
    suffix: String,
}

impl TestFinder {
    pub fn new(test_dir: impl Into<PathBuf>) -> Self {
        Self {
            test_dir: test_dir.into(),
            suffix: DEFAULT_TEST_SUFFIX.to_string(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn test_dir(&self) -> &Path {
        &self.test_dir
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Resolve a single target to exactly one test file.
    pub fn find_test(&self, target: &str) -> Result<PathBuf> {
        let mut found = self.find_tests(&[target.to_string()])?;
        match found.len() {
            1 => Ok(found.remove(0)),
            0 => Err(TargetError::no_match(target).into()),
            count => Err(TargetError::ambiguous_target(target, count).into()),
        }
    }

    /// Resolve targets to test files, in target order.
    ///
    /// A target ending with the suffix must name an existing test file; any
    /// other target must name an existing directory containing at least one
    /// test file. Per-target results are concatenated without global
    /// re-sorting and without deduplication across targets, and the first
    /// bad target aborts the whole resolution.
    pub fn find_tests(&self, targets: &[String]) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for target in targets {
            let path = Path::new(target);
            if target.ends_with(&self.suffix) {
                if classify(path) != PathKind::File {
                    return Err(TargetError::target_not_found(path).into());
                }
                found.push(absolute(path)?);
            } else if classify(path) == PathKind::Directory {
                let matched = scanner::scan(path, &self.suffix, &HashSet::new())?;
                if matched.is_empty() {
                    return Err(TargetError::empty_directory_target(path).into());
                }
                found.extend(matched);
            } else {
                return Err(TargetError::invalid_target(target.as_str()).into());
            }
        }
        debug!(targets = targets.len(), found = found.len(), "resolved targets");
        Ok(found)
    }

    /// Scan a directory (the configured scan root when omitted) for all
    /// test files. Unlike an explicitly-named directory target in
    /// [`find_tests`](Self::find_tests), an empty result is not an error.
    pub fn find_all_tests(
        &self,
        directory: Option<&Path>,
        excludes: &HashSet<PathBuf>,
    ) -> Result<Vec<PathBuf>> {
        let root = directory.unwrap_or(&self.test_dir);
        if classify(root) != PathKind::Directory {
            return Err(DiscoveryError::directory_not_found(root).into());
        }
        Ok(scanner::scan(root, &self.suffix, excludes)?)
    }

    /// Scan the configured root and keep only tests declaring at least one
    /// of the requested tags, preserving scan order. Files whose prelude
    /// cannot be parsed simply do not match; they never fail the batch.
    pub fn find_tests_for_tags(&self, requested: &[String]) -> Result<Vec<PathBuf>> {
        let all = self.find_all_tests(None, &HashSet::new())?;
        let matched: Vec<PathBuf> = all
            .into_iter()
            .filter(|path| tags::matches(path, requested))
            .collect();
        debug!(?requested, matched = matched.len(), "tag filter complete");
        Ok(matched)
    }
}

impl Default for TestFinder {
    fn default() -> Self {
        Self::new(DEFAULT_TEST_DIR)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path
        .canonicalize()
        .map_err(|e| DiscoveryError::resolve(path, e))?)
}
