use std::io::Write;
use std::path::PathBuf;

use super::{Builtin, BuiltinError, Io};
use crate::exec::result::ExecOutcome;
use crate::shell::Shell;

pub struct Cd;

impl Builtin for Cd {
    fn run(&self, args: &[String], io: &mut Io, shell: &mut Shell) -> Result<ExecOutcome, BuiltinError> {
        let dest = match args.get(1).map(String::as_str) {
            None | Some("~") => match dirs::home_dir() {
                Some(home) => home,
                None => {
                    writeln!(io.stderr, "cd: ~: No such file or directory")?;
                    return Ok(ExecOutcome(1));
                }
            },
            Some(raw) if raw.starts_with("~/") => match dirs::home_dir() {
                Some(home) => home.join(&raw[2..]),
                None => {
                    writeln!(io.stderr, "cd: {raw}: No such file or directory")?;
                    return Ok(ExecOutcome(1));
                }
            },
            Some(raw) => PathBuf::from(raw),
        };

        let target = if dest.is_absolute() { dest.clone() } else { shell.cwd.borrow().join(&dest) };

        if !target.is_dir() {
            let shown = args.get(1).map(String::as_str).unwrap_or("~");
            writeln!(io.stderr, "cd: {shown}: No such file or directory")?;
            return Ok(ExecOutcome(1));
        }

        *shell.cwd.borrow_mut() = target.canonicalize().unwrap_or(target);
        Ok(ExecOutcome::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::lookup;

    #[test]
    fn changes_to_an_existing_relative_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let mut shell = Shell::in_memory();
        *shell.cwd.borrow_mut() = dir.path().to_path_buf();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut io = Io { stdout: &mut out, stderr: &mut err };
        let args = vec!["cd".to_string(), "sub".to_string()];
        lookup("cd").unwrap().run(&args, &mut io, &mut shell).unwrap();
        assert_eq!(shell.cwd.borrow().file_name().unwrap(), "sub");
    }

    #[test]
    fn reports_missing_directories() {
        let mut shell = Shell::in_memory();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut io = Io { stdout: &mut out, stderr: &mut err };
        let args = vec!["cd".to_string(), "/no/such/dir".to_string()];
        let outcome = lookup("cd").unwrap().run(&args, &mut io, &mut shell).unwrap();
        assert_eq!(outcome.0, 1);
        assert!(String::from_utf8(err).unwrap().contains("No such file or directory"));
    }
}
