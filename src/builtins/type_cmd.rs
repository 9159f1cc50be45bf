use std::io::Write;

use super::{is_builtin, Builtin, BuiltinError, Io};
use crate::exec::result::ExecOutcome;
use crate::shell::Shell;

pub struct Type;

impl Builtin for Type {
    fn run(&self, args: &[String], io: &mut Io, shell: &mut Shell) -> Result<ExecOutcome, BuiltinError> {
        let Some(target) = args.get(1) else {
            writeln!(io.stderr, "type: missing operand")?;
            return Ok(ExecOutcome(1));
        };

        if is_builtin(target) {
            writeln!(io.stdout, "{target} is a shell builtin")?;
            return Ok(ExecOutcome::SUCCESS);
        }

        match shell.path_cache.resolve(target) {
            Some(path) => {
                writeln!(io.stdout, "{target} is {}", path.display())?;
                Ok(ExecOutcome::SUCCESS)
            }
            None => {
                writeln!(io.stdout, "{target}: not found")?;
                Ok(ExecOutcome(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::lookup;
    use crate::env_probe::PathCache;

    fn run(shell: &mut Shell, target: &str) -> String {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut io = Io { stdout: &mut out, stderr: &mut err };
        let args = vec!["type".to_string(), target.to_string()];
        lookup("type").unwrap().run(&args, &mut io, shell).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reports_shell_builtins() {
        let mut shell = Shell::in_memory();
        assert_eq!(run(&mut shell, "cd"), "cd is a shell builtin\n");
    }

    #[test]
    fn reports_not_found_for_unknown_commands() {
        let mut shell = Shell::in_memory();
        shell.path_cache = std::rc::Rc::new(PathCache::empty());
        assert_eq!(run(&mut shell, "definitely-not-a-real-command"), "definitely-not-a-real-command: not found\n");
    }
}
