use std::io::Write;

use super::{Builtin, BuiltinError, Io};
use crate::exec::result::ExecOutcome;
use crate::shell::Shell;

pub struct Echo;

impl Builtin for Echo {
    fn run(&self, args: &[String], io: &mut Io, _shell: &mut Shell) -> Result<ExecOutcome, BuiltinError> {
        let rest = &args[1..];
        let (suppress_newline, words) = match rest.first().map(String::as_str) {
            Some("-n") => (true, &rest[1..]),
            _ => (false, rest),
        };

        write!(io.stdout, "{}", words.join(" "))?;
        if !suppress_newline {
            writeln!(io.stdout)?;
        }
        Ok(ExecOutcome::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::lookup;

    fn run(args: &[&str]) -> String {
        let mut shell = Shell::in_memory();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut io = Io { stdout: &mut out, stderr: &mut err };
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        lookup("echo").unwrap().run(&args, &mut io, &mut shell).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn joins_arguments_with_a_space() {
        assert_eq!(run(&["echo", "hello", "world"]), "hello world\n");
    }

    #[test]
    fn no_arguments_prints_a_blank_line() {
        assert_eq!(run(&["echo"]), "\n");
    }

    #[test]
    fn minus_n_suppresses_the_trailing_newline() {
        assert_eq!(run(&["echo", "-n", "hi"]), "hi");
    }
}
