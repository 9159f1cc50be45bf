use std::collections::HashMap;

use super::Shell;

#[test]
fn run_line_reports_the_exit_status_of_an_external_command() {
    let mut shell = Shell::in_memory();
    let outcome = shell.run_line("true").unwrap();
    assert_eq!(outcome.0, 0);
    assert_eq!(shell.last_status.0, 0);
}

#[test]
fn run_line_reports_a_nonzero_exit_status() {
    let mut shell = Shell::in_memory();
    let outcome = shell.run_line("false").unwrap();
    assert_eq!(outcome.0, 1);
}

#[test]
fn blank_line_is_a_no_op() {
    let mut shell = Shell::in_memory();
    let outcome = shell.run_line("   ").unwrap();
    assert_eq!(outcome.0, 0);
}

#[test]
fn lex_errors_surface_through_run_line() {
    let mut shell = Shell::in_memory();
    assert!(shell.run_line("echo 'unterminated").is_err());
}

#[test]
fn exit_builtin_records_the_requested_code() {
    let mut shell = Shell::in_memory();
    shell.run_line("exit 3").unwrap();
    assert_eq!(shell.exit_code(), Some(3));
}

#[test]
fn words_are_expanded_against_the_shells_own_environment() {
    let mut shell = Shell::in_memory();
    shell.env.insert("GREETING".to_string(), "hi".to_string());
    let tokens = crate::lexer::Lexer::tokenize("echo $GREETING").unwrap();
    let env: HashMap<String, String> = shell.env.clone();
    let list = crate::planner::Planner::plan(&tokens, &env).unwrap();
    assert_eq!(list.pipelines[0].stages[0].argv, vec!["echo", "hi"]);
}
