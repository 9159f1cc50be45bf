//! Turns a lexed, expanded token stream into a [`CommandList`] ready to run.
//!
//! Splitting happens in two passes — first on `;`/`&` (both treated as
//! sequencing operators; this shell never backgrounds a job), then on `|`
//! within each resulting slice — followed by a single left-to-right scan of
//! each stage's tokens that builds argv and opens redirection targets as it
//! goes. By the time a [`CommandList`] exists every redirection file handle
//! is already open, so the executor can't fail a stage on a missing file.

use std::collections::HashMap;
use std::fs::OpenOptions;

use crate::ast::{CommandList, Pipeline, Redirections, Stage};
use crate::error::PlanError;
use crate::expand::expand_word;
use crate::span::Span;
use crate::token::{Token, TokenKind};

pub struct Planner;

impl Planner {
    /// Build a [`CommandList`] from `tokens`, expanding words against `env`
    /// and opening every redirection target encountered.
    pub fn plan(tokens: &[Token], env: &HashMap<String, String>) -> Result<CommandList, PlanError> {
        let mut list = CommandList::default();

        for group in split_on(tokens, |k| matches!(k, TokenKind::Semi | TokenKind::Ampersand)) {
            if group.is_empty() {
                continue;
            }
            list.pipelines.push(plan_pipeline(group, env)?);
        }

        Ok(list)
    }
}

fn plan_pipeline(tokens: &[Token], env: &HashMap<String, String>) -> Result<Pipeline, PlanError> {
    let mut stages = Vec::new();
    for stage_tokens in split_on(tokens, |k| matches!(k, TokenKind::Pipe)) {
        stages.push(plan_stage(stage_tokens, env)?);
    }
    Ok(Pipeline { stages })
}

fn plan_stage(tokens: &[Token], env: &HashMap<String, String>) -> Result<Stage, PlanError> {
    let mut argv = Vec::new();
    let mut redirections = Redirections::default();
    let mut i = 0;

    while i < tokens.len() {
        let tok = &tokens[i];
        match &tok.kind {
            TokenKind::Word(word) => {
                argv.push(expand_word(word, env));
                i += 1;
            }
            TokenKind::RedirectIn
            | TokenKind::RedirectOut
            | TokenKind::RedirectAppend
            | TokenKind::RedirectErr
            | TokenKind::RedirectErrAppend => {
                let target = tokens.get(i + 1).ok_or_else(|| PlanError::MissingRedirectTarget {
                    op: tok.kind.clone(),
                    span: tok.span,
                })?;
                let TokenKind::Word(word) = &target.kind else {
                    return Err(PlanError::MissingRedirectTarget { op: tok.kind.clone(), span: tok.span });
                };
                let path = expand_word(word, env);
                apply_redirection(&mut redirections, &tok.kind, &path, tok.span.merge(target.span))?;
                i += 2;
            }
            TokenKind::Pipe | TokenKind::Semi | TokenKind::Ampersand => {
                unreachable!("separators are removed before plan_stage runs")
            }
        }
    }

    if argv.is_empty() {
        let span = tokens.first().map(|t| t.span).unwrap_or_else(|| Span::empty(0));
        return Err(PlanError::MissingCommand { span });
    }

    Ok(Stage { argv, redirections })
}

fn apply_redirection(
    redirections: &mut Redirections,
    op: &TokenKind,
    path: &str,
    span: Span,
) -> Result<(), PlanError> {
    if std::path::Path::new(path).is_dir() {
        return Err(PlanError::RedirectTargetIsDirectory { path: path.to_string(), span });
    }

    let open = |opts: &mut OpenOptions| -> Result<std::fs::File, PlanError> {
        opts.open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                PlanError::RedirectTargetNotFound { path: path.to_string(), span }
            }
            std::io::ErrorKind::PermissionDenied => {
                PlanError::RedirectPermissionDenied { path: path.to_string(), span }
            }
            _ => PlanError::RedirectTargetNotFound { path: path.to_string(), span },
        })
    };

    match op {
        TokenKind::RedirectIn => {
            let file = open(OpenOptions::new().read(true))?;
            redirections.set_stdin(file);
        }
        TokenKind::RedirectOut => {
            let file = open(OpenOptions::new().write(true).create(true).truncate(true))?;
            redirections.set_stdout(file);
        }
        TokenKind::RedirectAppend => {
            let file = open(OpenOptions::new().write(true).create(true).append(true))?;
            redirections.set_stdout(file);
        }
        TokenKind::RedirectErr => {
            let file = open(OpenOptions::new().write(true).create(true).truncate(true))?;
            redirections.set_stderr(file);
        }
        TokenKind::RedirectErrAppend => {
            let file = open(OpenOptions::new().write(true).create(true).append(true))?;
            redirections.set_stderr(file);
        }
        _ => unreachable!("apply_redirection is only called with redirection tokens"),
    }

    Ok(())
}

/// Split `tokens` on every token matching `is_sep`, dropping the separators
/// themselves. Mirrors `str::split` in keeping empty slices between
/// adjacent separators rather than silently merging them.
fn split_on(tokens: &[Token], is_sep: impl Fn(&TokenKind) -> bool) -> Vec<&[Token]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for (i, tok) in tokens.iter().enumerate() {
        if is_sep(&tok.kind) {
            groups.push(&tokens[start..i]);
            start = i + 1;
        }
    }
    groups.push(&tokens[start..]);
    groups
}

#[cfg(test)]
#[path = "planner_tests/mod.rs"]
mod tests;
