use super::*;

#[test]
fn word_display_quotes_text() {
    let tok = TokenKind::Word(Word::literal("echo"));
    assert_eq!(tok.to_string(), "word 'echo'");
}

#[test]
fn redirection_tokens_report_is_redirection() {
    for kind in [
        TokenKind::RedirectIn,
        TokenKind::RedirectOut,
        TokenKind::RedirectAppend,
        TokenKind::RedirectErr,
        TokenKind::RedirectErrAppend,
    ] {
        assert!(kind.is_redirection(), "{kind} should be a redirection");
    }
}

#[test]
fn separators_report_is_separator() {
    assert!(TokenKind::Pipe.is_separator());
    assert!(TokenKind::Semi.is_separator());
    assert!(TokenKind::Ampersand.is_separator());
    assert!(!TokenKind::RedirectIn.is_separator());
}

#[test]
fn quoted_word_is_not_expandable() {
    let w = Word::quoted("$HOME");
    assert!(!w.is_expandable());
    assert_eq!(w.text(), "$HOME");
}

#[test]
fn literal_word_is_expandable() {
    let w = Word::literal("$HOME");
    assert!(w.is_expandable());
}

#[test]
fn from_segments_merges_adjacent_same_kind_segments() {
    let w = Word::from_segments(vec![
        WordSegment::Expandable("a".to_string()),
        WordSegment::Expandable("b".to_string()),
        WordSegment::Protected("c".to_string()),
    ]);
    assert_eq!(w, Word::from_segments(vec![WordSegment::Expandable("ab".to_string()), WordSegment::Protected("c".to_string())]));
}
