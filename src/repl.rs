//! The interactive read-eval-print loop.
//!
//! When stdin is a real terminal, lines come from a `rustyline` editor with
//! history and tab completion. When it isn't — piped input, a script run
//! with `pshell < script.sh` — the line editor can't put the terminal into
//! raw mode, so we fall back to a plain buffered reader and skip the
//! prompt, the same way a real shell runs non-interactively.

use std::io::{self, BufRead, IsTerminal, Write};

use rustyline::config::{CompletionType, Config};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::completion::ShellHelper;
use crate::shell::Shell;

const PROMPT: &str = "$ ";

/// Run the REPL until the user sends EOF, hits `exit`, or interrupts twice.
/// Returns the process exit code.
pub fn run(shell: &mut Shell) -> i32 {
    if io::stdin().is_terminal() {
        run_interactive(shell)
    } else {
        run_piped(shell)
    }
}

fn run_interactive(shell: &mut Shell) -> i32 {
    let config = Config::builder().completion_type(CompletionType::List).build();

    let mut editor: Editor<ShellHelper, DefaultHistory> = match Editor::with_config(config) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("pshell: failed to initialize the line editor: {e}");
            return 1;
        }
    };
    editor.set_helper(Some(ShellHelper::new(shell.cwd.clone(), shell.path_cache.clone())));

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                if let Some(code) = run_one_line(shell, &line) {
                    return code;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                shell.history.save_default();
                return shell.last_status.0;
            }
            Err(e) => {
                eprintln!("pshell: {e}");
                shell.history.save_default();
                return 1;
            }
        }
    }
}

fn run_piped(shell: &mut Shell) -> i32 {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("pshell: {e}");
                shell.history.save_default();
                return 1;
            }
        };
        if let Some(code) = run_one_line(shell, &line) {
            return code;
        }
    }
    shell.history.save_default();
    shell.last_status.0
}

/// Run one line, returning `Some(exit code)` if the REPL should stop.
fn run_one_line(shell: &mut Shell, line: &str) -> Option<i32> {
    shell.history.push(line.to_string());

    if let Err(e) = shell.run_line(line) {
        let _ = writeln!(io::stderr(), "pshell: {e}");
    }

    if let Some(code) = shell.exit_code() {
        shell.history.save_default();
        return Some(code);
    }
    None
}
