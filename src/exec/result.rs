//! Translates a finished child into the shell's notion of an exit status.

use std::process::ExitStatus;

/// The exit code tracked as `$?` after a command list finishes.
///
/// A process killed by a signal reports `128 + signal number`, matching the
/// convention shells use so callers can still branch on a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecOutcome(pub i32);

impl ExecOutcome {
    pub const SUCCESS: ExecOutcome = ExecOutcome(0);

    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExecOutcome(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExecOutcome(128 + signal);
            }
        }
        ExecOutcome(1)
    }

    pub fn is_success(&self) -> bool {
        self.0 == 0
    }
}
