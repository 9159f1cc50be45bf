use std::cell::RefCell;
use std::rc::Rc;

use super::ShellHelper;
use crate::env_probe::PathCache;

fn helper_in(dir: &std::path::Path) -> ShellHelper {
    let cwd = Rc::new(RefCell::new(dir.to_path_buf()));
    let path_cache = Rc::new(PathCache::empty());
    ShellHelper::new(cwd, path_cache)
}

#[test]
fn first_word_completes_against_builtins() {
    let dir = tempfile::tempdir().unwrap();
    let helper = helper_in(dir.path());
    let candidates = helper.command_candidates("ec");
    assert_eq!(candidates, vec!["echo".to_string()]);
}

#[test]
fn first_word_completion_is_sorted_and_deduped() {
    let dir = tempfile::tempdir().unwrap();
    let helper = helper_in(dir.path());
    let candidates = helper.command_candidates("");
    let mut expected: Vec<String> = crate::builtins::BUILTIN_NAMES.iter().map(|s| s.to_string()).collect();
    expected.sort();
    expected.dedup();
    assert_eq!(candidates, expected);
}

#[test]
fn path_candidates_list_directory_entries() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    let helper = helper_in(dir.path());

    let mut candidates = helper.path_candidates("");
    candidates.sort();
    assert_eq!(candidates, vec![("notes.txt".to_string(), false), ("sub".to_string(), true)]);
}

#[test]
fn path_candidates_respect_a_prefix() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("foo.txt"), "x").unwrap();
    std::fs::write(dir.path().join("bar.txt"), "x").unwrap();
    let helper = helper_in(dir.path());

    let candidates = helper.path_candidates("fo");
    assert_eq!(candidates, vec![("foo.txt".to_string(), false)]);
}
