use super::{plan, plan_with_env};
use std::collections::HashMap;

#[test]
fn single_command_single_pipeline() {
    let list = plan("echo hi").unwrap();
    assert_eq!(list.pipelines.len(), 1);
    let pipeline = &list.pipelines[0];
    assert_eq!(pipeline.stages.len(), 1);
    assert_eq!(pipeline.stages[0].argv, vec!["echo", "hi"]);
}

#[test]
fn semicolon_separates_pipelines() {
    let list = plan("echo a; echo b").unwrap();
    assert_eq!(list.pipelines.len(), 2);
    assert_eq!(list.pipelines[0].stages[0].argv, vec!["echo", "a"]);
    assert_eq!(list.pipelines[1].stages[0].argv, vec!["echo", "b"]);
}

#[test]
fn ampersand_also_separates_pipelines() {
    let list = plan("echo a & echo b").unwrap();
    assert_eq!(list.pipelines.len(), 2);
    assert_eq!(list.pipelines[0].stages[0].argv, vec!["echo", "a"]);
    assert_eq!(list.pipelines[1].stages[0].argv, vec!["echo", "b"]);
}

#[test]
fn trailing_separator_yields_no_empty_pipeline() {
    let list = plan("echo a;").unwrap();
    assert_eq!(list.pipelines.len(), 1);
}

#[test]
fn pipe_splits_a_pipeline_into_stages() {
    let list = plan("cat file | grep hi | wc -l").unwrap();
    assert_eq!(list.pipelines.len(), 1);
    let stages = &list.pipelines[0].stages;
    assert_eq!(stages.len(), 3);
    let argvs: Vec<&Vec<String>> = stages.iter().map(|s| &s.argv).collect();
    similar_asserts::assert_eq!(
        argvs,
        vec![
            &vec!["cat".to_string(), "file".to_string()],
            &vec!["grep".to_string(), "hi".to_string()],
            &vec!["wc".to_string(), "-l".to_string()],
        ]
    );
}

#[test]
fn words_are_expanded_against_the_given_environment() {
    let mut env = HashMap::new();
    env.insert("NAME".to_string(), "world".to_string());
    let list = plan_with_env("echo hello $NAME", &env).unwrap();
    assert_eq!(list.pipelines[0].stages[0].argv, vec!["echo", "hello", "world"]);
}

#[test]
fn quoted_words_are_not_expanded() {
    let mut env = HashMap::new();
    env.insert("NAME".to_string(), "world".to_string());
    let list = plan_with_env("echo '$NAME'", &env).unwrap();
    assert_eq!(list.pipelines[0].stages[0].argv, vec!["echo", "$NAME"]);
}
