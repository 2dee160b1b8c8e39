use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.end - span.start, 10);
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn test_span_point() {
    let span = Span::point(7);
    assert_eq!(span.start, 7);
    assert_eq!(span.end, 7);
}

#[test]
fn test_span_extend_to() {
    let span = Span::new(3, 5);
    assert_eq!(span.extend_to(9), Span::new(3, 9));
    // Never shrinks.
    assert_eq!(span.extend_to(4), Span::new(3, 5));
}

#[test]
fn test_span_display_and_debug() {
    let span = Span::new(1, 4);
    assert_eq!(span.to_string(), "1..4");
    assert_eq!(format!("{span:?}"), "1..4");
}

#[test]
fn test_span_default_is_empty_at_zero() {
    assert_eq!(Span::default(), Span::point(0));
}
