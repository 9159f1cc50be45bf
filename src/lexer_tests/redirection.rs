use super::macros::lex_tests;
use super::{Lexer, TokenKind, Word};

lex_tests! {
    redirect_out: "echo hi > out.txt" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::literal("hi")),
        TokenKind::RedirectOut,
        TokenKind::Word(Word::literal("out.txt")),
    ],
    redirect_append: "echo hi >> out.txt" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::literal("hi")),
        TokenKind::RedirectAppend,
        TokenKind::Word(Word::literal("out.txt")),
    ],
    redirect_in: "wc < in.txt" => [
        TokenKind::Word(Word::literal("wc")),
        TokenKind::RedirectIn,
        TokenKind::Word(Word::literal("in.txt")),
    ],
    explicit_stdout_fd: "echo hi 1> out.txt" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::literal("hi")),
        TokenKind::RedirectOut,
        TokenKind::Word(Word::literal("out.txt")),
    ],
    explicit_stdout_append_fd: "echo hi 1>> out.txt" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::literal("hi")),
        TokenKind::RedirectAppend,
        TokenKind::Word(Word::literal("out.txt")),
    ],
    stderr_redirect: "cmd 2> err.txt" => [
        TokenKind::Word(Word::literal("cmd")),
        TokenKind::RedirectErr,
        TokenKind::Word(Word::literal("err.txt")),
    ],
    stderr_append_redirect: "cmd 2>> err.txt" => [
        TokenKind::Word(Word::literal("cmd")),
        TokenKind::RedirectErrAppend,
        TokenKind::Word(Word::literal("err.txt")),
    ],
    bare_digit_is_a_word_without_trailing_angle: "echo 1 2" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::literal("1")),
        TokenKind::Word(Word::literal("2")),
    ],
    multi_digit_before_angle_is_not_an_fd: "echo 12>out" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::literal("12")),
        TokenKind::RedirectOut,
        TokenKind::Word(Word::literal("out")),
    ],
    quoted_digit_is_not_an_fd: "echo '1'>out" => [
        TokenKind::Word(Word::literal("echo")),
        TokenKind::Word(Word::quoted("1")),
        TokenKind::RedirectOut,
        TokenKind::Word(Word::literal("out")),
    ],
}
