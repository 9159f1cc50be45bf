use std::io::Write;
use std::path::PathBuf;

use super::{Builtin, BuiltinError, Io};
use crate::exec::result::ExecOutcome;
use crate::shell::Shell;

pub struct History;

impl Builtin for History {
    fn run(&self, args: &[String], io: &mut Io, shell: &mut Shell) -> Result<ExecOutcome, BuiltinError> {
        match args.get(1).map(String::as_str) {
            Some("-c") => {
                shell.history.clear();
                if let Some(path) = shell.history.default_path() {
                    if let Err(e) = shell.history.save_to(&path) {
                        writeln!(io.stderr, "history: {}: {e}", path.display())?;
                        return Ok(ExecOutcome(1));
                    }
                }
                Ok(ExecOutcome::SUCCESS)
            }
            Some("-r") => {
                let path = match args.get(2) {
                    Some(path) => Some(PathBuf::from(path)),
                    None => shell.history.default_path(),
                };
                match path {
                    Some(path) => match shell.history.load_from(&path) {
                        Ok(()) => Ok(ExecOutcome::SUCCESS),
                        Err(e) => {
                            writeln!(io.stderr, "history: {}: {e}", path.display())?;
                            Ok(ExecOutcome(1))
                        }
                    },
                    None => {
                        writeln!(io.stderr, "history: -r: no history file configured")?;
                        Ok(ExecOutcome(1))
                    }
                }
            }
            Some("-w") => {
                let path = match args.get(2) {
                    Some(path) => Some(PathBuf::from(path)),
                    None => shell.history.default_path(),
                };
                match path {
                    Some(path) => match shell.history.save_to(&path) {
                        Ok(()) => Ok(ExecOutcome::SUCCESS),
                        Err(e) => {
                            writeln!(io.stderr, "history: {}: {e}", path.display())?;
                            Ok(ExecOutcome(1))
                        }
                    },
                    None => {
                        writeln!(io.stderr, "history: -w: no history file configured")?;
                        Ok(ExecOutcome(1))
                    }
                }
            }
            Some(count) => match count.parse::<usize>() {
                Ok(n) => {
                    print_entries(io, shell.history.entries(), n)?;
                    Ok(ExecOutcome::SUCCESS)
                }
                Err(_) => {
                    writeln!(io.stderr, "history: {count}: numeric argument required")?;
                    Ok(ExecOutcome(1))
                }
            },
            None => {
                let all = shell.history.entries().len();
                print_entries(io, shell.history.entries(), all)?;
                Ok(ExecOutcome::SUCCESS)
            }
        }
    }
}

fn print_entries(io: &mut Io, entries: &[String], count: usize) -> std::io::Result<()> {
    let start = entries.len().saturating_sub(count);
    for (i, line) in entries.iter().enumerate().skip(start) {
        writeln!(io.stdout, "{:>5}  {}", i + 1, line)?;
    }
    Ok(())
}
