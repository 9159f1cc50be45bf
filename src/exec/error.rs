//! Errors raised while running an already-planned [`crate::ast::CommandList`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{name}: command not found")]
    CommandNotFound { name: String },

    #[error("cannot spawn '{name}'")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error waiting for '{name}'")]
    Wait {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{name}: {message}")]
    Builtin { name: String, message: String },
}
