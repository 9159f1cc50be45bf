//! Turns a [`CommandList`] into spawned processes and in-process builtins.
//!
//! A builtin runs in-process only when it is the sole stage of its
//! pipeline — that's the only place mutating [`Shell`] state (`cd`, `exit`,
//! `history -c`) makes sense. A builtin used anywhere else in a pipeline
//! (`type cat | wc -l`) re-execs this binary with a hidden flag so it can
//! sit on the pipe plumbing as a real process, the same way an external
//! command would.

use std::io::{self, Write};
use std::process::{Child, Command, Stdio};

use crate::ast::{CommandList, Pipeline, Stage};
use crate::builtins::{self, Io};
use crate::exec::error::ExecError;
use crate::exec::redirect;
use crate::exec::result::ExecOutcome;
use crate::shell::Shell;

/// Argument `main()` looks for to dispatch straight into a builtin and exit,
/// instead of starting the REPL.
pub const INTERNAL_BUILTIN_FLAG: &str = "--pshell-internal-builtin";

pub struct Executor;

impl Executor {
    pub fn run(list: CommandList, shell: &mut Shell) -> ExecOutcome {
        let mut outcome = ExecOutcome::SUCCESS;
        for pipeline in list.pipelines {
            outcome = Self::run_pipeline(pipeline, shell);
            shell.last_status = outcome;
            if shell.exit_code().is_some() {
                break;
            }
        }
        outcome
    }

    fn run_pipeline(pipeline: Pipeline, shell: &mut Shell) -> ExecOutcome {
        if pipeline.stages.len() == 1 {
            let stage = pipeline.stages.into_iter().next().expect("checked above");
            return Self::run_single_stage(stage, shell);
        }
        Self::run_piped_stages(pipeline.stages, shell)
    }

    fn run_single_stage(mut stage: Stage, shell: &mut Shell) -> ExecOutcome {
        let name = stage.argv[0].clone();

        if let Some(builtin) = builtins::lookup(&name) {
            let mut stdout_target: Box<dyn Write> = match stage.redirections.stdout.take() {
                Some(f) => Box::new(f),
                None => Box::new(io::stdout()),
            };
            let mut stderr_target: Box<dyn Write> = match stage.redirections.stderr.take() {
                Some(f) => Box::new(f),
                None => Box::new(io::stderr()),
            };
            let mut io = Io { stdout: &mut *stdout_target, stderr: &mut *stderr_target };
            return match builtin.run(&stage.argv, &mut io, shell) {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("{name}: {e}");
                    ExecOutcome(1)
                }
            };
        }

        let stdin = redirect::resolve(stage.redirections.stdin.take(), Stdio::inherit());
        let stdout = redirect::resolve(stage.redirections.stdout.take(), Stdio::inherit());
        let stderr = redirect::resolve(stage.redirections.stderr.take(), Stdio::inherit());

        match spawn_external(&stage.argv, stdin, stdout, stderr, shell) {
            Ok(mut child) => match child.wait() {
                Ok(status) => ExecOutcome::from_status(status),
                Err(source) => {
                    eprintln!("pshell: {}", ExecError::Wait { name, source });
                    ExecOutcome(1)
                }
            },
            Err(e) => {
                eprintln!("{e}");
                ExecOutcome(127)
            }
        }
    }

    fn run_piped_stages(stages: Vec<Stage>, shell: &mut Shell) -> ExecOutcome {
        let n = stages.len();
        let mut children: Vec<Child> = Vec::with_capacity(n);
        let mut prev_stdout: Option<std::process::ChildStdout> = None;

        for (i, mut stage) in stages.into_iter().enumerate() {
            let is_last = i + 1 == n;

            let stdin = match prev_stdout.take() {
                Some(out) => Stdio::from(out),
                None => redirect::resolve(stage.redirections.stdin.take(), Stdio::inherit()),
            };
            let stdout_fallback = if is_last { Stdio::inherit() } else { Stdio::piped() };
            let stdout = redirect::resolve(stage.redirections.stdout.take(), stdout_fallback);
            let stderr = redirect::resolve(stage.redirections.stderr.take(), Stdio::inherit());

            let name = stage.argv[0].clone();
            let spawned = if builtins::is_builtin(&name) {
                spawn_internal_builtin(&stage.argv, stdin, stdout, stderr, shell)
            } else {
                spawn_external(&stage.argv, stdin, stdout, stderr, shell)
            };

            match spawned {
                Ok(mut child) => {
                    prev_stdout = child.stdout.take();
                    children.push(child);
                }
                Err(e) => {
                    eprintln!("{e}");
                    return ExecOutcome(127);
                }
            }
        }

        let mut outcome = ExecOutcome::SUCCESS;
        for mut child in children {
            match child.wait() {
                Ok(status) => outcome = ExecOutcome::from_status(status),
                Err(e) => {
                    eprintln!("pshell: error waiting for child: {e}");
                    outcome = ExecOutcome(1);
                }
            }
        }
        outcome
    }
}

fn spawn_external(
    argv: &[String],
    stdin: Stdio,
    stdout: Stdio,
    stderr: Stdio,
    shell: &Shell,
) -> Result<Child, ExecError> {
    Command::new(&argv[0])
        .args(&argv[1..])
        .current_dir(&*shell.cwd.borrow())
        .envs(&shell.env)
        .stdin(stdin)
        .stdout(stdout)
        .stderr(stderr)
        .spawn()
        .map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ExecError::CommandNotFound { name: argv[0].clone() }
            } else {
                ExecError::Spawn { name: argv[0].clone(), source }
            }
        })
}

/// Spawn this same binary with a hidden flag that makes `main()` dispatch
/// straight to the builtin named by `argv[0]` and exit, so the builtin can
/// participate in a pipeline as a real process.
fn spawn_internal_builtin(
    argv: &[String],
    stdin: Stdio,
    stdout: Stdio,
    stderr: Stdio,
    shell: &Shell,
) -> Result<Child, ExecError> {
    let exe = std::env::current_exe().map_err(|source| ExecError::Spawn { name: argv[0].clone(), source })?;
    Command::new(exe)
        .arg(INTERNAL_BUILTIN_FLAG)
        .args(argv)
        .current_dir(&*shell.cwd.borrow())
        .envs(&shell.env)
        .stdin(stdin)
        .stdout(stdout)
        .stderr(stderr)
        .spawn()
        .map_err(|source| ExecError::Spawn { name: argv[0].clone(), source })
}
