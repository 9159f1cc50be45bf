//! The shell's live state: working directory, environment, history, and the
//! cached `PATH` listing, threaded through one line at a time.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use crate::ast::CommandList;
use crate::env_probe::PathCache;
use crate::error::{LexError, PlanError};
use crate::exec::{ExecOutcome, Executor};
use crate::history::HistoryManager;
use crate::lexer::Lexer;
use crate::planner::Planner;

pub struct Shell {
    /// Shared with the completion [`Helper`](crate::completion) so
    /// filesystem completion always resolves relative paths against the
    /// directory `cd` actually left the shell in.
    pub cwd: Rc<RefCell<PathBuf>>,
    pub env: HashMap<String, String>,
    pub history: HistoryManager,
    /// Shared with the completion [`Helper`](crate::completion) so both see
    /// the same `PATH` listing without rebuilding it.
    pub path_cache: Rc<PathCache>,
    pub last_status: ExecOutcome,
    exit_code: Option<i32>,
}

/// What went wrong turning a raw line into something runnable, before any
/// process was ever spawned.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl Shell {
    /// Build a shell seeded from the real process environment and `PATH`.
    pub fn new() -> Self {
        let env: HashMap<String, String> = std::env::vars().collect();
        let path_cache = Rc::new(PathCache::build(env.get("PATH").map(String::as_str).unwrap_or("")));
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        Self {
            cwd: Rc::new(RefCell::new(cwd)),
            env,
            history: HistoryManager::load_default(),
            path_cache,
            last_status: ExecOutcome::SUCCESS,
            exit_code: None,
        }
    }

    /// Build a shell with an empty environment and no `PATH` cache, for
    /// tests that only care about a single builtin's behavior.
    pub fn in_memory() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        Self {
            cwd: Rc::new(RefCell::new(cwd)),
            env: HashMap::new(),
            history: HistoryManager::new(),
            path_cache: Rc::new(PathCache::empty()),
            last_status: ExecOutcome::SUCCESS,
            exit_code: None,
        }
    }

    /// Lex, plan, and run one line of input, updating `last_status`.
    pub fn run_line(&mut self, line: &str) -> Result<ExecOutcome, LineError> {
        let tokens = Lexer::tokenize(line)?;
        if tokens.is_empty() {
            return Ok(self.last_status);
        }
        let list: CommandList = Planner::plan(&tokens, &self.env)?;
        let outcome = Executor::run(list, self);
        self.last_status = outcome;
        Ok(outcome)
    }

    /// Set by the `exit` builtin; the REPL checks this after every line.
    pub fn request_exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
