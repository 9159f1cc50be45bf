use std::fs;
use std::os::unix::fs::PermissionsExt;

use super::PathCache;

fn make_executable(dir: &std::path::Path, name: &str) {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\n").unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}

#[test]
fn finds_executables_on_the_path() {
    let dir = tempfile::tempdir().unwrap();
    make_executable(dir.path(), "mytool");
    let cache = PathCache::build(dir.path().to_str().unwrap());
    assert!(cache.resolve("mytool").is_some());
}

#[test]
fn ignores_non_executable_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "hi").unwrap();
    let cache = PathCache::build(dir.path().to_str().unwrap());
    assert!(cache.resolve("notes.txt").is_none());
}

#[test]
fn earlier_path_entries_win_on_name_collision() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    make_executable(first.path(), "tool");
    make_executable(second.path(), "tool");

    let joined = std::env::join_paths([first.path(), second.path()]).unwrap();
    let cache = PathCache::build(joined.to_str().unwrap());
    let resolved = cache.resolve("tool").unwrap();
    assert_eq!(resolved.parent().unwrap(), first.path());
}

#[test]
fn names_starting_with_filters_by_prefix() {
    let dir = tempfile::tempdir().unwrap();
    make_executable(dir.path(), "grep");
    make_executable(dir.path(), "greet");
    make_executable(dir.path(), "wc");
    let cache = PathCache::build(dir.path().to_str().unwrap());
    let mut matches: Vec<&str> = cache.names_starting_with("gre").collect();
    matches.sort_unstable();
    assert_eq!(matches, vec!["greet", "grep"]);
}
