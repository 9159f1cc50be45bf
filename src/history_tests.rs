use super::HistoryManager;

#[test]
fn push_ignores_blank_lines() {
    let mut history = HistoryManager::new();
    history.push("echo hi".to_string());
    history.push("   ".to_string());
    assert_eq!(history.entries(), &["echo hi".to_string()]);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hist");

    let mut history = HistoryManager::new();
    history.push("echo a".to_string());
    history.push("echo b".to_string());
    history.save_to(&path).unwrap();

    let mut loaded = HistoryManager::new();
    loaded.load_from(&path).unwrap();
    assert_eq!(loaded.entries(), history.entries());
}

#[test]
fn load_from_appends_rather_than_replaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hist");
    std::fs::write(&path, "echo old\n").unwrap();

    let mut history = HistoryManager::new();
    history.push("echo new".to_string());
    history.load_from(&path).unwrap();
    assert_eq!(history.entries(), &["echo new".to_string(), "echo old".to_string()]);
}

#[test]
fn clear_empties_the_buffer() {
    let mut history = HistoryManager::new();
    history.push("echo a".to_string());
    history.clear();
    assert!(history.entries().is_empty());
}
