//! Caches `PATH` directory listings so lookup and completion don't have to
//! re-read the filesystem on every keystroke.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Maps an executable's filename to the first `PATH` directory it was found
/// in, built once from a `PATH` value and reused for the life of the shell.
pub struct PathCache {
    entries: HashMap<String, PathBuf>,
}

impl PathCache {
    pub fn build(path_env: &str) -> Self {
        let mut entries = HashMap::new();
        for dir in std::env::split_paths(path_env) {
            let Ok(read_dir) = std::fs::read_dir(&dir) else { continue };
            for entry in read_dir.flatten() {
                let Ok(file_type) = entry.file_type() else { continue };
                if !file_type.is_file() && !file_type.is_symlink() {
                    continue;
                }
                if !is_executable(&entry.path()) {
                    continue;
                }
                let Some(name) = entry.file_name().to_str().map(str::to_string) else { continue };
                entries.entry(name).or_insert_with(|| entry.path());
            }
        }
        Self { entries }
    }

    pub fn empty() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn resolve(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn names_starting_with<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries.keys().map(String::as_str).filter(move |name| name.starts_with(prefix))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).map(|m| m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(test)]
#[path = "env_probe_tests.rs"]
mod tests;
