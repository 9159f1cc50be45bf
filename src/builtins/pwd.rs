use std::io::Write;

use super::{Builtin, BuiltinError, Io};
use crate::exec::result::ExecOutcome;
use crate::shell::Shell;

pub struct Pwd;

impl Builtin for Pwd {
    fn run(&self, _args: &[String], io: &mut Io, shell: &mut Shell) -> Result<ExecOutcome, BuiltinError> {
        writeln!(io.stdout, "{}", shell.cwd.borrow().display())?;
        Ok(ExecOutcome::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::lookup;

    #[test]
    fn prints_the_shells_tracked_working_directory() {
        let mut shell = Shell::in_memory();
        *shell.cwd.borrow_mut() = std::path::PathBuf::from("/tmp");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut io = Io { stdout: &mut out, stderr: &mut err };
        lookup("pwd").unwrap().run(&["pwd".to_string()], &mut io, &mut shell).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/tmp\n");
    }
}
