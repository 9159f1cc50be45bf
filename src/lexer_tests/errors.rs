use super::Lexer;
use crate::error::LexError;

#[test]
fn unterminated_single_quote_is_an_error() {
    let err = Lexer::tokenize("echo 'hi").unwrap_err();
    assert!(matches!(err, LexError::UnterminatedSingleQuote { .. }));
}

#[test]
fn unterminated_double_quote_is_an_error() {
    let err = Lexer::tokenize("echo \"hi").unwrap_err();
    assert!(matches!(err, LexError::UnterminatedDoubleQuote { .. }));
}

#[test]
fn trailing_backslash_is_an_error() {
    let err = Lexer::tokenize("echo hi\\").unwrap_err();
    assert!(matches!(err, LexError::TrailingBackslash { .. }));
}

#[yare::parameterized(
    single_quote = { "echo 'abc" },
    double_quote = { "echo \"abc" },
)]
fn unterminated_quote_reports_context(input: &str) {
    let err = Lexer::tokenize(input).unwrap_err();
    let ctx = err.context(input);
    assert!(ctx.contains(input), "context should include the original line");
}
