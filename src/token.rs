//! Token types produced by the lexer.

use std::fmt;

pub use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_redirection(&self) -> bool {
        self.kind.is_redirection()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A word, with its quoting/expansion eligibility resolved.
    Word(Word),
    /// `|`
    Pipe,
    /// `;`
    Semi,
    /// `&`
    Ampersand,
    /// `<`
    RedirectIn,
    /// `>` or `1>`
    RedirectOut,
    /// `>>` or `1>>`
    RedirectAppend,
    /// `2>`
    RedirectErr,
    /// `2>>`
    RedirectErrAppend,
}

/// A lexed word, broken into runs of text that are each either eligible for
/// `$NAME` expansion or protected from it.
///
/// A word is rarely uniform: `echo "\$FOO"` is one word whose text reads
/// `$FOO` but whose leading `$` must never be re-scanned for expansion,
/// while `\$` alone in the middle of an otherwise unquoted word still
/// leaves the rest of that word expandable. Carrying a single `expandable`
/// flag per word can't express that, so a word is a sequence of segments
/// instead — single-quoted text and escaped `$`/`` ` ``/`"`/`\` become
/// [`WordSegment::Protected`]; everything else is [`WordSegment::Expandable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub segments: Vec<WordSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSegment {
    /// Plain text, still eligible for `$NAME`/`${NAME}` expansion.
    Expandable(String),
    /// Text that must reach the command line unchanged: single-quoted, or
    /// a backslash-escaped character.
    Protected(String),
}

impl WordSegment {
    fn as_str(&self) -> &str {
        match self {
            WordSegment::Expandable(s) | WordSegment::Protected(s) => s,
        }
    }
}

impl Word {
    /// A single expandable segment — the common case for unquoted and
    /// double-quoted text with no escapes.
    pub fn literal(text: impl Into<String>) -> Self {
        Self { segments: vec![WordSegment::Expandable(text.into())] }
    }

    /// A single protected segment — the common case for a purely
    /// single-quoted word.
    pub fn quoted(text: impl Into<String>) -> Self {
        Self { segments: vec![WordSegment::Protected(text.into())] }
    }

    /// Build a word from segments as the lexer produced them, merging
    /// adjacent same-kind segments so a word that turns out uniform
    /// compares equal to the constructors above.
    pub fn from_segments(segments: Vec<WordSegment>) -> Self {
        let mut merged: Vec<WordSegment> = Vec::with_capacity(segments.len());
        for seg in segments {
            match (merged.last_mut(), &seg) {
                (Some(WordSegment::Expandable(prev)), WordSegment::Expandable(s)) => prev.push_str(s),
                (Some(WordSegment::Protected(prev)), WordSegment::Protected(s)) => prev.push_str(s),
                _ => merged.push(seg),
            }
        }
        if merged.is_empty() {
            merged.push(WordSegment::Expandable(String::new()));
        }
        Self { segments: merged }
    }

    /// The word's full text, ignoring segment boundaries.
    pub fn text(&self) -> String {
        self.segments.iter().map(WordSegment::as_str).collect()
    }

    /// True if any segment is still eligible for expansion.
    pub fn is_expandable(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, WordSegment::Expandable(_)))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(w) => write!(f, "word '{}'", w.text()),
            TokenKind::Pipe => write!(f, "'|'"),
            TokenKind::Semi => write!(f, "';'"),
            TokenKind::Ampersand => write!(f, "'&'"),
            TokenKind::RedirectIn => write!(f, "'<'"),
            TokenKind::RedirectOut => write!(f, "'>'"),
            TokenKind::RedirectAppend => write!(f, "'>>'"),
            TokenKind::RedirectErr => write!(f, "'2>'"),
            TokenKind::RedirectErrAppend => write!(f, "'2>>'"),
        }
    }
}

impl TokenKind {
    pub fn is_redirection(&self) -> bool {
        matches!(
            self,
            TokenKind::RedirectIn
                | TokenKind::RedirectOut
                | TokenKind::RedirectAppend
                | TokenKind::RedirectErr
                | TokenKind::RedirectErrAppend
        )
    }

    /// True for tokens that split a pipeline/command-list (`|`, `;`, `&`).
    pub fn is_separator(&self) -> bool {
        matches!(self, TokenKind::Pipe | TokenKind::Semi | TokenKind::Ampersand)
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
