use assert_cmd::Command;
use predicates::prelude::*;

fn pshell() -> Command {
    Command::cargo_bin("pshell").unwrap()
}

#[test]
fn echoes_a_simple_word() {
    pshell()
        .write_stdin("echo hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello\n"));
}

#[test]
fn single_quotes_preserve_literal_text() {
    pshell()
        .write_stdin("echo 'a  b'\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("a  b\n"));
}

#[test]
fn double_quotes_expand_variables() {
    pshell()
        .env("GREETING", "hi")
        .write_stdin("echo \"$GREETING there\"\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hi there\n"));
}

#[test]
fn single_quotes_suppress_expansion() {
    pshell()
        .env("GREETING", "hi")
        .write_stdin("echo '$GREETING'\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("$GREETING\n"));
}

#[test]
fn semicolons_sequence_independent_commands() {
    pshell()
        .write_stdin("echo one; echo two\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("one\ntwo\n"));
}

#[test]
fn pipeline_feeds_one_commands_stdout_into_the_next() {
    pshell()
        .write_stdin("echo banana | wc -c\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("7"));
}

#[test]
fn redirect_out_writes_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    pshell().write_stdin(format!("echo hi > {}\n", path.display())).assert().success();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hi\n");
}

#[test]
fn type_reports_builtin_and_not_found() {
    pshell()
        .write_stdin("type cd\ntype definitely-not-a-real-command\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cd is a shell builtin"))
        .stdout(predicate::str::contains("definitely-not-a-real-command: not found"));
}

#[test]
fn cd_then_pwd_reports_the_new_directory() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = dir.path().canonicalize().unwrap();
    pshell()
        .write_stdin(format!("cd {}\npwd\n", dir.path().display()))
        .assert()
        .success()
        .stdout(predicate::str::contains(canonical.display().to_string()));
}

#[test]
fn exit_stops_the_repl_with_the_requested_code() {
    pshell().write_stdin("exit 9\necho should-not-run\n").assert().code(9);
}

#[test]
fn eof_on_stdin_ends_the_repl_cleanly() {
    pshell().write_stdin("echo last\n").assert().success().stdout(predicate::str::contains("last\n"));
}
