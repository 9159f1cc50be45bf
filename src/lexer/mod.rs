//! Tokenizes a raw input line into words and operators.
//!
//! The lexer resolves quoting (single quote, double quote, unquoted
//! backslash) into plain word text and records, per word, whether it is
//! eligible for variable expansion. It never looks at the environment —
//! that happens in [`crate::expand`].

use crate::error::LexError;
use crate::span::Span;
use crate::token::{Token, TokenKind, Word, WordSegment};

pub struct Lexer;

impl Lexer {
    /// Tokenize `input`, producing operators and words in source order.
    ///
    /// Empty input yields an empty token list.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
        let chars: Vec<(usize, char)> = input.char_indices().collect();
        let len = chars.len();
        let byte_len = input.len();
        let mut tokens = Vec::with_capacity(8);
        let mut i = 0usize;

        let byte_at = |idx: usize| -> usize {
            if idx < len {
                chars[idx].0
            } else {
                byte_len
            }
        };

        while i < len {
            let (start_byte, ch) = chars[i];
            match ch {
                ' ' | '\t' => {
                    i += 1;
                }
                '|' => {
                    tokens.push(Token::new(TokenKind::Pipe, Span::new(start_byte, byte_at(i + 1))));
                    i += 1;
                }
                ';' => {
                    tokens.push(Token::new(TokenKind::Semi, Span::new(start_byte, byte_at(i + 1))));
                    i += 1;
                }
                '&' => {
                    tokens.push(Token::new(TokenKind::Ampersand, Span::new(start_byte, byte_at(i + 1))));
                    i += 1;
                }
                '<' => {
                    tokens.push(Token::new(TokenKind::RedirectIn, Span::new(start_byte, byte_at(i + 1))));
                    i += 1;
                }
                '>' => {
                    let append = i + 1 < len && chars[i + 1].1 == '>';
                    let consumed = if append { 2 } else { 1 };
                    let kind = if append { TokenKind::RedirectAppend } else { TokenKind::RedirectOut };
                    tokens.push(Token::new(kind, Span::new(start_byte, byte_at(i + consumed))));
                    i += consumed;
                }
                _ => {
                    let (token, next_i) = lex_word(&chars, i, len, byte_len)?;
                    tokens.push(token);
                    i = next_i;
                }
            }
        }

        Ok(tokens)
    }
}

/// Lex one word starting at `chars[start]`, returning the produced token
/// (a plain word, or a digit-prefixed redirection like `1>`/`2>>`) and the
/// index to resume scanning from.
fn lex_word(
    chars: &[(usize, char)],
    start: usize,
    len: usize,
    byte_len: usize,
) -> Result<(Token, usize), LexError> {
    let start_byte = chars[start].0;
    let mut segments: Vec<WordSegment> = Vec::new();
    let mut cur = String::new();
    // Whether `cur` is currently being built as a protected (non-expandable)
    // run — single-quoted text, or a backslash-escaped character.
    let mut cur_protected = false;
    let mut i = start;
    // Once true, a digit-fd redirection prefix (`1>`, `2>>`) can no longer
    // be recognized — only a bare, unquoted digit counts.
    let mut any_quote_or_escape = false;

    macro_rules! flush {
        ($next_protected:expr) => {{
            if !cur.is_empty() {
                let text = std::mem::take(&mut cur);
                segments.push(if cur_protected {
                    WordSegment::Protected(text)
                } else {
                    WordSegment::Expandable(text)
                });
            }
            cur_protected = $next_protected;
        }};
    }

    while i < len {
        let (byte, ch) = chars[i];
        match ch {
            ' ' | '\t' | '|' | ';' | '&' | '<' => break,
            '>' => {
                if !any_quote_or_escape && (cur == "1" || cur == "2") {
                    let err_fd = cur == "2";
                    let append = i + 1 < len && chars[i + 1].1 == '>';
                    let consumed = if append { 2 } else { 1 };
                    let kind = match (err_fd, append) {
                        (false, false) => TokenKind::RedirectOut,
                        (false, true) => TokenKind::RedirectAppend,
                        (true, false) => TokenKind::RedirectErr,
                        (true, true) => TokenKind::RedirectErrAppend,
                    };
                    let end = if i + consumed < len { chars[i + consumed].0 } else { byte_len };
                    return Ok((Token::new(kind, Span::new(start_byte, end)), i + consumed));
                }
                break;
            }
            '\'' => {
                any_quote_or_escape = true;
                flush!(true);
                i += 1;
                let mut closed = false;
                while i < len {
                    if chars[i].1 == '\'' {
                        i += 1;
                        closed = true;
                        break;
                    }
                    cur.push(chars[i].1);
                    i += 1;
                }
                if !closed {
                    return Err(LexError::UnterminatedSingleQuote { span: Span::new(byte, byte_len) });
                }
                flush!(false);
            }
            '"' => {
                any_quote_or_escape = true;
                i += 1;
                let mut closed = false;
                while i < len {
                    match chars[i].1 {
                        '"' => {
                            i += 1;
                            closed = true;
                            break;
                        }
                        '\\' if i + 1 < len && matches!(chars[i + 1].1, '\\' | '`' | '$' | '"') => {
                            // Escaped, so it must never be rescanned for
                            // expansion even if it's a `$`.
                            flush!(true);
                            cur.push(chars[i + 1].1);
                            flush!(false);
                            i += 2;
                        }
                        '\\' if i + 1 < len && chars[i + 1].1 == '\n' => {
                            i += 2; // escaped newline: line continuation, drop both
                        }
                        c => {
                            cur.push(c);
                            i += 1;
                        }
                    }
                }
                if !closed {
                    return Err(LexError::UnterminatedDoubleQuote { span: Span::new(byte, byte_len) });
                }
            }
            '\\' => {
                any_quote_or_escape = true;
                if i + 1 >= len {
                    return Err(LexError::TrailingBackslash { span: Span::new(byte, byte_len) });
                }
                flush!(true);
                cur.push(chars[i + 1].1);
                flush!(false);
                i += 2;
            }
            c => {
                cur.push(c);
                i += 1;
            }
        }
    }

    let end_byte = if i < len { chars[i].0 } else { byte_len };
    flush!(false);
    let word = Word::from_segments(segments);
    Ok((Token::new(TokenKind::Word(word), Span::new(start_byte, end_byte)), i))
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
