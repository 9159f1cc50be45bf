use super::macros::lex_tests;
use super::{Lexer, TokenKind, Word};

lex_tests! {
    empty_input: "" => [],
    whitespace_only: "   \t  " => [],
    single_word: "echo" => [TokenKind::Word(Word::literal("echo"))],
    two_words: "echo hi" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::literal("hi")),
    ],
    extra_spaces_collapse: "echo   hi" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::literal("hi")),
    ],
    tabs_separate_words: "echo\thi" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::literal("hi")),
    ],
    pipe_operator: "echo | wc" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Pipe,
        TokenKind::Word(Word::literal("wc")),
    ],
    semi_operator: "echo one;echo two" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::literal("one")),
        TokenKind::Semi,
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::literal("two")),
    ],
    ampersand_operator: "sleep 1 &" => [
        TokenKind::Word(Word::literal("sleep")),
        TokenKind::Word(Word::literal("1")),
        TokenKind::Ampersand,
    ],
}

#[test]
fn yields_spans_covering_each_token() {
    let tokens = Lexer::tokenize("echo hi").unwrap();
    assert_eq!(tokens[0].span.slice("echo hi"), "echo");
    assert_eq!(tokens[1].span.slice("echo hi"), "hi");
}
