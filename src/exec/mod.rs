//! Runs a planned [`crate::ast::CommandList`] against the live process.

pub mod error;
pub mod executor;
pub(crate) mod redirect;
pub mod result;

pub use error::ExecError;
pub use executor::{Executor, INTERNAL_BUILTIN_FLAG};
pub use result::ExecOutcome;
