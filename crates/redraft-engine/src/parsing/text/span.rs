/// A byte range `[start, end)` into the source document.
///
/// Elements record the span they were parsed from so that slicing the source
/// with any element span reproduces its `raw_text` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, serde::Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `source` with this span.
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        let sp = Span { start: 3, end: 7 };
        assert_eq!(sp.len(), 4);
        assert!(!sp.is_empty());
        assert!(Span { start: 5, end: 5 }.is_empty());
    }

    #[test]
    fn inverted_span_is_empty() {
        let sp = Span { start: 9, end: 2 };
        assert_eq!(sp.len(), 0);
        assert!(sp.is_empty());
    }

    #[test]
    fn slice_reproduces_text() {
        let src = "hello world";
        assert_eq!(Span { start: 6, end: 11 }.slice(src), "world");
    }
}
