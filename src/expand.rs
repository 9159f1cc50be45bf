//! Variable expansion over lexed words.
//!
//! Runs after quoting is resolved: `$NAME` and `${NAME}` are replaced with
//! the corresponding entry from the environment, or the empty string if
//! unset. Expansion is a single, non-recursive pass — the substituted text
//! is never re-scanned for further `$` sequences.

use std::collections::HashMap;

use crate::token::{Word, WordSegment};

/// Expand `word` against `env`, one segment at a time. A
/// [`WordSegment::Protected`] segment (single-quoted text, or a
/// backslash-escaped character) is copied through untouched; only
/// [`WordSegment::Expandable`] segments are scanned for `$NAME`/`${NAME}`.
/// Expanding segment-by-segment, rather than the word's full joined text,
/// is what keeps an escaped `\$` from being re-interpreted as the start of
/// a variable reference by whatever plain text happens to follow it.
pub fn expand_word(word: &Word, env: &HashMap<String, String>) -> String {
    word.segments
        .iter()
        .map(|segment| match segment {
            WordSegment::Expandable(text) => expand_str(text, env),
            WordSegment::Protected(text) => text.clone(),
        })
        .collect()
}

/// Expand all `$NAME`/`${NAME}` occurrences in `text` against `env`.
pub fn expand_str(text: &str, env: &HashMap<String, String>) -> String {
    let bytes: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != '$' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        if i + 1 < bytes.len() && bytes[i + 1] == '{' {
            if let Some(close) = bytes[i + 2..].iter().position(|&c| c == '}') {
                let name: String = bytes[i + 2..i + 2 + close].iter().collect();
                if is_valid_name(&name) {
                    out.push_str(env.get(&name).map(String::as_str).unwrap_or(""));
                    i += 2 + close + 1;
                    continue;
                }
            }
            // `${` with no valid closing/name: `$` is literal, rest is re-scanned.
            out.push('$');
            i += 1;
            continue;
        }

        let name_len = bytes[i + 1..]
            .iter()
            .take_while(|c| is_name_char(**c))
            .count();
        if name_len > 0 && is_name_start(bytes[i + 1]) {
            let name: String = bytes[i + 1..i + 1 + name_len].iter().collect();
            out.push_str(env.get(&name).map(String::as_str).unwrap_or(""));
            i += 1 + name_len;
        } else {
            out.push('$');
            i += 1;
        }
    }

    out
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_valid_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_name_start(c) => {}
        _ => return false,
    }
    chars.all(is_name_char)
}

#[cfg(test)]
#[path = "expand_tests.rs"]
mod tests;
