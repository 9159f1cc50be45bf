use super::*;

#[test]
fn merge_takes_widest_bounds() {
    let a = Span::new(2, 5);
    let b = Span::new(0, 3);
    assert_eq!(a.merge(b), Span::new(0, 5));
}

#[test]
fn slice_extracts_text() {
    let src = "echo hello";
    assert_eq!(Span::new(5, 10).slice(src), "hello");
}

#[test]
fn slice_out_of_bounds_is_empty() {
    let src = "echo";
    assert_eq!(Span::new(10, 20).slice(src), "");
}

#[test]
fn context_snippet_underlines_span() {
    let snippet = context_snippet("echo | bad", Span::new(5, 6));
    let mut lines = snippet.lines();
    assert_eq!(lines.next(), Some("echo | bad"));
    assert_eq!(lines.next(), Some("     ^"));
}

#[test]
fn empty_span_has_zero_len() {
    let s = Span::empty(3);
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
}
