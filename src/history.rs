//! In-memory command history, optionally backed by a file on disk.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DEFAULT_HISTFILE_VAR: &str = "PSHELL_HISTFILE";
const DEFAULT_HISTFILE_NAME: &str = ".pshell_history";

pub struct HistoryManager {
    entries: Vec<String>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Build a manager pre-loaded from the default history file, if one
    /// exists. I/O failures are logged and otherwise ignored — a shell
    /// should still start with an empty history rather than refuse to run.
    pub fn load_default() -> Self {
        let mut manager = Self::new();
        if let Some(path) = default_path() {
            if path.exists() {
                if let Err(e) = manager.load_from(&path) {
                    tracing::debug!(?path, error = %e, "failed to load history file");
                }
            }
        }
        manager
    }

    pub fn push(&mut self, line: String) {
        if line.trim().is_empty() {
            return;
        }
        self.entries.push(line);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The history file `load_default`/`save_default` use, if one is
    /// configured — exposed so callers (the `history` builtin) can fall
    /// back to it when `-r`/`-w` are given no filename.
    pub fn default_path(&self) -> Option<PathBuf> {
        default_path()
    }

    /// Append every line in `path` to the in-memory history.
    pub fn load_from(&mut self, path: &Path) -> io::Result<()> {
        let contents = fs::read_to_string(path)?;
        for line in contents.lines() {
            self.entries.push(line.to_string());
        }
        Ok(())
    }

    /// Overwrite `path` with the full in-memory history, one entry per line.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        for line in &self.entries {
            writeln!(file, "{line}")?;
        }
        Ok(())
    }

    /// Persist to the default history file, logging (not propagating)
    /// failure — called on REPL shutdown, where there's no good way to
    /// surface an I/O error to the user anymore.
    pub fn save_default(&self) {
        if let Some(path) = default_path() {
            if let Err(e) = self.save_to(&path) {
                tracing::debug!(?path, error = %e, "failed to save history file");
            }
        }
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

fn default_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(DEFAULT_HISTFILE_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(DEFAULT_HISTFILE_NAME))
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
