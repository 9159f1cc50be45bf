//! Commands the shell runs in-process rather than spawning.
//!
//! A builtin only gets to run in-process when it's the sole stage of its
//! pipeline — see [`crate::exec::executor`] for why a builtin participating
//! in a multi-stage pipeline has to re-exec itself as a separate process
//! instead.

use std::io::Write;

use thiserror::Error;

use crate::exec::result::ExecOutcome;
use crate::shell::Shell;

pub mod cd;
pub mod echo;
pub mod exit;
pub mod history_cmd;
pub mod pwd;
pub mod type_cmd;

/// Every name the shell treats as a builtin rather than a PATH lookup.
pub const BUILTIN_NAMES: &[&str] = &["exit", "echo", "type", "pwd", "cd", "history"];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

#[derive(Debug, Error)]
pub enum BuiltinError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The streams a builtin writes to, already resolved from the stage's
/// redirections by the executor.
pub struct Io<'a> {
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

pub trait Builtin {
    /// Run with `args[0]` equal to the builtin's own name.
    fn run(&self, args: &[String], io: &mut Io, shell: &mut Shell) -> Result<ExecOutcome, BuiltinError>;
}

pub fn lookup(name: &str) -> Option<Box<dyn Builtin>> {
    match name {
        "exit" => Some(Box::new(exit::Exit)),
        "echo" => Some(Box::new(echo::Echo)),
        "type" => Some(Box::new(type_cmd::Type)),
        "pwd" => Some(Box::new(pwd::Pwd)),
        "cd" => Some(Box::new(cd::Cd)),
        "history" => Some(Box::new(history_cmd::History)),
        _ => None,
    }
}
