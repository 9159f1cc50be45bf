use std::collections::HashMap;

use super::macros::lex_tests;
use super::{Lexer, TokenKind, Word};
use crate::expand::expand_word;

lex_tests! {
    single_quoted_is_literal: "'a  b'" => [TokenKind::Word(Word::quoted("a  b"))],
    double_quoted_preserves_spaces: "\"c d\"" => [TokenKind::Word(Word::literal("c d"))],
    single_quote_ignores_backslash: r"'a\nb'" => [TokenKind::Word(Word::quoted(r"a\nb"))],
    double_quote_keeps_other_backslash: "\"a\\tb\"" => [TokenKind::Word(Word::literal("a\\tb"))],
    space_separated_quotes_are_two_words: "'a  b' \"c d\"" => [
        TokenKind::Word(Word::quoted("a  b")),
        TokenKind::Word(Word::literal("c d")),
    ],
}

#[test]
fn adjacent_quotes_with_no_space_concatenate() {
    let tokens = Lexer::tokenize("'a''b'").unwrap();
    assert_eq!(tokens.len(), 1);
    match &tokens[0].kind {
        TokenKind::Word(w) => {
            assert_eq!(w.text(), "ab");
            assert!(!w.is_expandable());
        }
        other => panic!("expected word, got {other:?}"),
    }
}

fn word_of(input: &str) -> Word {
    let tokens = Lexer::tokenize(input).unwrap();
    assert_eq!(tokens.len(), 1, "expected exactly one token for {input:?}");
    match tokens.into_iter().next().unwrap().kind {
        TokenKind::Word(w) => w,
        other => panic!("expected word, got {other:?}"),
    }
}

#[test]
fn double_quote_escaped_dollar_keeps_its_text_but_is_protected_from_expansion() {
    let word = word_of("\"\\$HOME\"");
    assert_eq!(word.text(), "$HOME");

    let mut env = HashMap::new();
    env.insert("HOME".to_string(), "/root".to_string());
    // The escaped `$` must not be re-scanned together with the `HOME` that
    // follows it, even though `HOME` is a real variable.
    assert_eq!(expand_word(&word, &env), "$HOME");
}

#[test]
fn double_quote_escaped_quote_keeps_its_text() {
    let word = word_of("\"say \\\"hi\\\"\"");
    assert_eq!(word.text(), "say \"hi\"");
}

#[test]
fn unquoted_backslash_escapes_next_char() {
    let word = word_of(r"a\ b");
    assert_eq!(word.text(), "a b");
}

#[test]
fn unquoted_backslash_escapes_operator_char() {
    let word = word_of(r"a\|b");
    assert_eq!(word.text(), "a|b");
}

#[test]
fn unquoted_escaped_dollar_is_protected_from_expansion() {
    let word = word_of(r"\$FOO");
    assert_eq!(word.text(), "$FOO");

    let mut env = HashMap::new();
    env.insert("FOO".to_string(), "bar".to_string());
    assert_eq!(expand_word(&word, &env), "$FOO");
}
