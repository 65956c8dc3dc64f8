//! End-to-end tag filtering over real directory trees.

use std::fs;
use std::path::{Path, PathBuf};

use dart_test_finder::finder::TestFinder;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap()
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// A tree mixing tagged, untagged, and malformed test files.
fn tagged_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(
        &root.join("smoke_slow_test.dart"),
        "@Tags(['smoke', 'slow'])\nimport 'package:test/test.dart';\n\nvoid main() {}\n",
    );
    write_file(
        &root.join("nightly_test.dart"),
        "@Tags(['nightly'])\nimport 'package:test/test.dart';\n\nvoid main() {}\n",
    );
    write_file(
        &root.join("untagged_test.dart"),
        "import 'package:test/test.dart';\n\nvoid main() {}\n",
    );
    write_file(
        &root.join("broken_test.dart"),
        "@Tags(['smoke'\n%%% this prelude never closes\n",
    );
    temp_dir
}

#[test]
fn tagged_files_match_requested_tags() {
    let temp_dir = tagged_tree();
    let root = canonical(temp_dir.path());

    let finder = TestFinder::new(&root);
    let found = finder.find_tests_for_tags(&tags(&["slow"])).unwrap();

    assert_eq!(found, vec![root.join("smoke_slow_test.dart")]);
}

#[test]
fn unrequested_tags_do_not_match() {
    let temp_dir = tagged_tree();
    let root = canonical(temp_dir.path());

    let finder = TestFinder::new(&root);
    let found = finder.find_tests_for_tags(&tags(&["integration"])).unwrap();

    assert_eq!(found, Vec::<PathBuf>::new());
}

#[test]
fn multiple_requested_tags_union_matches() {
    let temp_dir = tagged_tree();
    let root = canonical(temp_dir.path());

    let finder = TestFinder::new(&root);
    let found = finder
        .find_tests_for_tags(&tags(&["smoke", "nightly"]))
        .unwrap();

    // Scan order is preserved: lexicographic by path.
    assert_eq!(
        found,
        vec![
            root.join("nightly_test.dart"),
            root.join("smoke_slow_test.dart"),
        ]
    );
}

#[test]
fn untagged_files_never_match() {
    let temp_dir = tagged_tree();
    let root = canonical(temp_dir.path());

    let finder = TestFinder::new(&root);
    let found = finder.find_tests_for_tags(&tags(&["smoke"])).unwrap();

    assert!(!found.iter().any(|p| p.ends_with("untagged_test.dart")));
}

#[test]
fn malformed_file_does_not_abort_the_batch() {
    let temp_dir = tagged_tree();
    let root = canonical(temp_dir.path());

    let finder = TestFinder::new(&root);
    // broken_test.dart lexes to garbage; discovery must still succeed and
    // simply leave it out.
    let found = finder.find_tests_for_tags(&tags(&["smoke"])).unwrap();

    assert_eq!(found, vec![root.join("smoke_slow_test.dart")]);
}

#[test]
fn empty_tag_query_returns_empty() {
    let temp_dir = tagged_tree();
    let finder = TestFinder::new(temp_dir.path());

    let found = finder.find_tests_for_tags(&[]).unwrap();

    assert_eq!(found, Vec::<PathBuf>::new());
}

#[test]
fn missing_root_directory_fails() {
    let finder = TestFinder::new("/no/such/root");
    assert!(finder.find_tests_for_tags(&tags(&["smoke"])).is_err());
}
