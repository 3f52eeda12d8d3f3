use crate::parsing::blocks::DocumentElement;

/// Validates parser output invariants.
///
/// Asserts that:
/// - Positions are 0-based and sequential
/// - Each span is in bounds and its slice equals `raw_text`
/// - Consecutive spans are separated by exactly one newline, and together
///   they cover the whole source
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &str, elements: &[DocumentElement]) {
    let n = source.len();
    let mut expected_start = 0usize;
    for (i, el) in elements.iter().enumerate() {
        assert_eq!(el.position, i, "position out of sequence at element {i}");
        assert!(
            el.span.start <= el.span.end && el.span.end <= n,
            "element span out of bounds: {:?} (source len: {})",
            el.span,
            n
        );
        assert_eq!(
            el.span.start, expected_start,
            "gap or overlap before element {i}: {:?}",
            el.span
        );
        assert_eq!(
            el.span.slice(source),
            el.raw_text,
            "raw text differs from source slice at element {i}"
        );
        expected_start = el.span.end + 1;
    }
    assert_eq!(
        expected_start,
        n + 1,
        "elements do not cover the whole source"
    );
}
