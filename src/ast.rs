//! Planned command structures: the output of [`crate::planner`].
//!
//! These types carry already-opened redirection handles (see
//! [`crate::exec::redirect`]), not raw tokens — by the time a [`Pipeline`]
//! exists, every file it will read from or write to has already been
//! opened, so the executor never has to fail a stage for a missing file.

use std::fs::File;

/// A single command within a pipeline: its argv plus opened redirections.
pub struct Stage {
    /// The command name and its arguments, already expanded.
    pub argv: Vec<String>,
    pub redirections: Redirections,
}

impl Stage {
    pub fn command_name(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }
}

/// A stage's three standard streams, each independently overridable.
///
/// Re-assigning a slot (a later redirection for the same stream) closes the
/// file the slot previously held, matching the left-to-right evaluation
/// order described for the planner.
#[derive(Default)]
pub struct Redirections {
    pub stdin: Option<File>,
    pub stdout: Option<File>,
    pub stderr: Option<File>,
}

impl Redirections {
    pub fn set_stdin(&mut self, file: File) {
        self.stdin = Some(file); // drops the previous handle, if any
    }

    pub fn set_stdout(&mut self, file: File) {
        self.stdout = Some(file);
    }

    pub fn set_stderr(&mut self, file: File) {
        self.stderr = Some(file);
    }
}

/// A non-empty chain of stages connected by `|`.
pub struct Pipeline {
    pub stages: Vec<Stage>,
}

impl Pipeline {
    pub fn is_single_stage(&self) -> bool {
        self.stages.len() == 1
    }
}

/// Pipelines separated by `;`/`&`, to be run in order.
#[derive(Default)]
pub struct CommandList {
    pub pipelines: Vec<Pipeline>,
}
