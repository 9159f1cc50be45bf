//! Error types for the lexer and planner.

use thiserror::Error;

use crate::span::{context_snippet, Span};
use crate::token::TokenKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated single quote at position {}", span.start)]
    UnterminatedSingleQuote { span: Span },

    #[error("unterminated double quote at position {}", span.start)]
    UnterminatedDoubleQuote { span: Span },

    #[error("trailing backslash at position {}", span.start)]
    TrailingBackslash { span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedSingleQuote { span } => *span,
            Self::UnterminatedDoubleQuote { span } => *span,
            Self::TrailingBackslash { span } => *span,
        }
    }

    /// A snippet of the offending line with a caret under the error position.
    pub fn context(&self, input: &str) -> String {
        context_snippet(input, self.span())
    }
}

/// Errors raised while turning a token stream into a [`crate::ast::CommandList`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("syntax error near unexpected token `{found}`")]
    UnexpectedToken { found: TokenKind, span: Span },

    #[error("syntax error: expected a command")]
    MissingCommand { span: Span },

    #[error("syntax error: expected a filename after `{op}`")]
    MissingRedirectTarget { op: TokenKind, span: Span },

    #[error("{path}: No such file or directory")]
    RedirectTargetNotFound { path: String, span: Span },

    #[error("{path}: Permission denied")]
    RedirectPermissionDenied { path: String, span: Span },

    #[error("{path}: Is a directory")]
    RedirectTargetIsDirectory { path: String, span: Span },
}

impl PlanError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } => *span,
            Self::MissingCommand { span } => *span,
            Self::MissingRedirectTarget { span, .. } => *span,
            Self::RedirectTargetNotFound { span, .. } => *span,
            Self::RedirectPermissionDenied { span, .. } => *span,
            Self::RedirectTargetIsDirectory { span, .. } => *span,
        }
    }

    pub fn context(&self, input: &str) -> String {
        context_snippet(input, self.span())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
