//! Table-driven test macro for lexer success cases.
//!
//! ```ignore
//! lex_tests! {
//!     two_words: "echo hi" => [TokenKind::Word(Word::literal("echo")), TokenKind::Word(Word::literal("hi"))],
//! }
//! ```
macro_rules! lex_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let tokens = Lexer::tokenize($input).expect(concat!("failed to tokenize: ", $input));
                let expected: Vec<TokenKind> = vec![$($token),*];
                let actual: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
                assert_eq!(actual, expected, "input: {:?}", $input);
            }
        )*
    };
}

pub(crate) use lex_tests;
