use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn test_span_dummy_is_empty() {
    assert!(Span::DUMMY.is_empty());
    assert_eq!(Span::DUMMY, Span::default());
}

#[test]
fn test_span_inverted_is_empty() {
    let span = Span::new(20, 10);
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_debug() {
    assert_eq!(format!("{:?}", Span::new(3, 7)), "3..7");
}
