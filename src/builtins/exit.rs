use super::{Builtin, BuiltinError, Io};
use crate::exec::result::ExecOutcome;
use crate::shell::Shell;

pub struct Exit;

impl Builtin for Exit {
    fn run(&self, args: &[String], _io: &mut Io, shell: &mut Shell) -> Result<ExecOutcome, BuiltinError> {
        let code = match args.get(1) {
            None => 0,
            Some(arg) => match arg.parse::<i32>() {
                Ok(code) => code,
                Err(_) => return Err(BuiltinError::Message(format!("exit: {arg}: numeric argument required"))),
            },
        };
        shell.request_exit(code);
        Ok(ExecOutcome(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::lookup;

    #[test]
    fn defaults_to_zero() {
        let mut shell = Shell::in_memory();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut io = Io { stdout: &mut out, stderr: &mut err };
        let outcome = lookup("exit").unwrap().run(&["exit".to_string()], &mut io, &mut shell).unwrap();
        assert_eq!(outcome.0, 0);
        assert_eq!(shell.exit_code(), Some(0));
    }

    #[test]
    fn honors_explicit_code() {
        let mut shell = Shell::in_memory();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut io = Io { stdout: &mut out, stderr: &mut err };
        let args = vec!["exit".to_string(), "7".to_string()];
        let outcome = lookup("exit").unwrap().run(&args, &mut io, &mut shell).unwrap();
        assert_eq!(outcome.0, 7);
        assert_eq!(shell.exit_code(), Some(7));
    }

    #[test]
    fn rejects_non_numeric_code() {
        let mut shell = Shell::in_memory();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut io = Io { stdout: &mut out, stderr: &mut err };
        let args = vec!["exit".to_string(), "nope".to_string()];
        assert!(lookup("exit").unwrap().run(&args, &mut io, &mut shell).is_err());
    }
}
