use super::plan;
use crate::error::PlanError;

#[test]
fn missing_redirect_target_is_an_error() {
    let err = plan("echo hi >").unwrap_err();
    assert!(matches!(err, PlanError::MissingRedirectTarget { .. }));
}

#[test]
fn empty_command_between_pipes_is_an_error() {
    let err = plan("echo hi | | wc").unwrap_err();
    assert!(matches!(err, PlanError::MissingCommand { .. }));
}

#[test]
fn leading_pipe_is_an_error() {
    let err = plan("| echo hi").unwrap_err();
    assert!(matches!(err, PlanError::MissingCommand { .. }));
}

#[test]
fn bare_redirection_with_no_command_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let err = plan(&format!("> {}", path.display())).unwrap_err();
    assert!(matches!(err, PlanError::MissingCommand { .. }));
}

#[test]
fn redirect_in_from_a_missing_file_is_an_error() {
    let err = plan("cat < /no/such/path/exists.txt").unwrap_err();
    assert!(matches!(err, PlanError::RedirectTargetNotFound { .. }));
}

#[test]
fn redirect_out_to_a_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = plan(&format!("echo hi > {}", dir.path().display())).unwrap_err();
    assert!(matches!(err, PlanError::RedirectTargetIsDirectory { .. }));
}
