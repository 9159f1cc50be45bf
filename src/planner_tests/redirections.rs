use std::io::{Read, Write};

use super::plan;

#[test]
fn redirect_out_opens_a_writable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let list = plan(&format!("echo hi > {}", path.display())).unwrap();
    let mut file = list.pipelines[0].stages[0].redirections.stdout.as_ref().unwrap();
    file.write_all(b"written").unwrap();
    drop(list);

    let mut contents = String::new();
    std::fs::File::open(&path).unwrap().read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "written");
}

#[test]
fn redirect_append_preserves_existing_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "existing-").unwrap();

    let list = plan(&format!("echo hi >> {}", path.display())).unwrap();
    list.pipelines[0].stages[0].redirections.stdout.as_ref().unwrap().write_all(b"more").unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "existing-more");
}

#[test]
fn redirect_in_opens_for_reading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    std::fs::write(&path, "data").unwrap();

    let list = plan(&format!("cat < {}", path.display())).unwrap();
    let mut contents = String::new();
    list.pipelines[0].stages[0].redirections.stdin.as_ref().unwrap().read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "data");
}

#[test]
fn stderr_redirect_targets_a_separate_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("err.txt");
    let list = plan(&format!("cmd 2> {}", path.display())).unwrap();
    let stage = &list.pipelines[0].stages[0];
    assert!(stage.redirections.stderr.is_some());
    assert!(stage.redirections.stdout.is_none());
}

#[test]
fn later_redirection_to_the_same_stream_wins() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    let list = plan(&format!("echo hi > {} > {}", first.display(), second.display())).unwrap();
    list.pipelines[0].stages[0]
        .redirections
        .stdout
        .as_ref()
        .unwrap()
        .write_all(b"x")
        .unwrap();

    assert!(!first.exists() || std::fs::read_to_string(&first).unwrap().is_empty());
    assert_eq!(std::fs::read_to_string(&second).unwrap(), "x");
}

#[test]
fn redirection_does_not_become_part_of_argv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let list = plan(&format!("echo hi > {}", path.display())).unwrap();
    assert_eq!(list.pipelines[0].stages[0].argv, vec!["echo", "hi"]);
}
