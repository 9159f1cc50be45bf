//! Tab completion for the interactive line editor.
//!
//! The first word on a line completes against builtins union the cached
//! `PATH` listing; everything else — including the word right after a
//! redirection operator — completes against the filesystem, resolved
//! relative to the shell's own tracked working directory rather than the
//! process's, since `cd` never touches the latter.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::builtins::BUILTIN_NAMES;
use crate::env_probe::PathCache;

/// Tracks whether the next TAB on the same prefix should list every match
/// (bash's "ambiguous completion" double-TAB behavior) rather than just
/// ring the bell.
struct CompletionState {
    last_prefix: Option<String>,
    armed_for_list: bool,
}

pub struct ShellHelper {
    cwd: Rc<RefCell<PathBuf>>,
    path_cache: Rc<PathCache>,
    state: RefCell<CompletionState>,
}

impl ShellHelper {
    pub fn new(cwd: Rc<RefCell<PathBuf>>, path_cache: Rc<PathCache>) -> Self {
        Self { cwd, path_cache, state: RefCell::new(CompletionState { last_prefix: None, armed_for_list: false }) }
    }

    fn command_candidates(&self, prefix: &str) -> Vec<String> {
        let mut matches: Vec<String> = BUILTIN_NAMES.iter().filter(|n| n.starts_with(prefix)).map(|n| n.to_string()).collect();
        matches.extend(self.path_cache.names_starting_with(prefix).map(str::to_string));
        matches.sort();
        matches.dedup();
        matches
    }

    fn path_candidates(&self, prefix: &str) -> Vec<(String, bool)> {
        let base = self.cwd.borrow().clone();
        let pattern = if prefix.is_empty() { "*".to_string() } else { format!("{prefix}*") };
        let full_pattern = base.join(&pattern);
        let Some(pattern_str) = full_pattern.to_str() else { return Vec::new() };

        let mut out = Vec::new();
        if let Ok(paths) = glob::glob(pattern_str) {
            for entry in paths.flatten() {
                let Some(name) = entry.file_name().and_then(|n| n.to_str()) else { continue };
                out.push((name.to_string(), entry.is_dir()));
            }
        }
        out.sort();
        out
    }

    fn resolve(&self, candidates: Vec<String>, start: usize, pos: usize) -> rustyline::Result<(usize, Vec<Pair>)> {
        if candidates.is_empty() {
            let mut state = self.state.borrow_mut();
            state.last_prefix = None;
            state.armed_for_list = false;
            return Ok((pos, Vec::new()));
        }

        if candidates.len() == 1 {
            let mut state = self.state.borrow_mut();
            state.last_prefix = None;
            state.armed_for_list = false;
            let only = &candidates[0];
            return Ok((start, vec![Pair { display: only.clone(), replacement: format!("{only} ") }]));
        }

        let mut state = self.state.borrow_mut();
        let key = candidates.join("\u{0}");
        if state.last_prefix.as_deref() == Some(key.as_str()) && state.armed_for_list {
            state.armed_for_list = false;
            let pairs = candidates.into_iter().map(|c| Pair { display: c.clone(), replacement: c }).collect();
            Ok((start, pairs))
        } else {
            state.last_prefix = Some(key);
            state.armed_for_list = true;
            Ok((pos, Vec::new()))
        }
    }
}

impl Helper for ShellHelper {}
impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        None
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos].rfind(|c: char| c.is_whitespace()).map(|i| i + 1).unwrap_or(0);
        let prefix = &line[start..pos];
        let is_first_word = line[..start].trim().is_empty();

        if is_first_word {
            let candidates = self.command_candidates(prefix);
            return self.resolve(candidates, start, pos);
        }

        let candidates: Vec<String> = self
            .path_candidates(prefix)
            .into_iter()
            .map(|(name, is_dir)| if is_dir { format!("{name}/") } else { name })
            .collect();

        if candidates.len() == 1 && candidates[0].ends_with('/') {
            let mut state = self.state.borrow_mut();
            state.last_prefix = None;
            state.armed_for_list = false;
            let only = &candidates[0];
            return Ok((start, vec![Pair { display: only.clone(), replacement: only.clone() }]));
        }

        self.resolve(candidates, start, pos)
    }
}

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;
