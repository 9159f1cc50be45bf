//! Wires a stage's already-opened redirection handles into its [`Stdio`]s.
//!
//! The planner does the opening (see [`crate::planner`]); by the time a
//! stage reaches the executor its redirection slots are either file handles
//! or empty. This module only decides, for each of the three streams, which
//! concrete [`Stdio`] the spawned process should get — an explicit
//! redirection always wins over whatever the pipeline would otherwise wire
//! a stage's stream to.

use std::fs::File;
use std::process::Stdio;

/// Pick the `Stdio` for one stream: an explicit redirection file if present,
/// otherwise `fallback` (the pipeline's default — a pipe to the neighboring
/// stage, or inherited from the shell itself for an unconnected endpoint).
pub(crate) fn resolve(explicit: Option<File>, fallback: Stdio) -> Stdio {
    match explicit {
        Some(file) => Stdio::from(file),
        None => fallback,
    }
}
