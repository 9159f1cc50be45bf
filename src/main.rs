use std::io;

use pshell::builtins::{self, Io};
use pshell::exec::{ExecOutcome, INTERNAL_BUILTIN_FLAG};
use pshell::repl;
use pshell::shell::Shell;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();

    let args: Vec<String> = std::env::args().collect();
    if args.get(1).map(String::as_str) == Some(INTERNAL_BUILTIN_FLAG) {
        std::process::exit(run_internal_builtin(&args[2..]));
    }

    let mut shell = Shell::new();
    let code = repl::run(&mut shell);
    std::process::exit(code);
}

/// Entry point for a builtin re-exec'd as its own process so it can sit on
/// a pipeline's pipe plumbing (see [`pshell::exec::executor`]).
fn run_internal_builtin(argv: &[String]) -> i32 {
    let Some(name) = argv.first() else {
        eprintln!("pshell: missing builtin name after {INTERNAL_BUILTIN_FLAG}");
        return 1;
    };
    let Some(builtin) = builtins::lookup(name) else {
        eprintln!("pshell: {name}: not a builtin");
        return 1;
    };

    let mut shell = Shell::new();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut io = Io { stdout: &mut stdout, stderr: &mut stderr };

    match builtin.run(argv, &mut io, &mut shell) {
        Ok(ExecOutcome(code)) => code,
        Err(e) => {
            eprintln!("{name}: {e}");
            1
        }
    }
}
