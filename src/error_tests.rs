use super::*;

#[test]
fn unterminated_single_quote_message() {
    let err = LexError::UnterminatedSingleQuote { span: Span::empty(5) };
    assert_eq!(err.to_string(), "unterminated single quote at position 5");
}

#[test]
fn trailing_backslash_context_points_at_backslash() {
    let err = LexError::TrailingBackslash { span: Span::new(4, 5) };
    let ctx = err.context("echo\\");
    assert!(ctx.ends_with('^'));
}
