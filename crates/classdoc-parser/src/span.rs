//! Byte ranges into parsed source text.

use std::ops::Range;

/// A half-open byte range into a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "inverted span");
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The sub-span of `part`, which must be a slice of `text`, where `text`
    /// itself starts at this span's start offset.
    pub(crate) fn slice_of(&self, text: &str, part: &str) -> Span {
        let offset = (part.as_ptr() as usize).saturating_sub(text.as_ptr() as usize);
        let start = self.start + offset.min(text.len());
        Span::new(start..start + part.len())
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessors() {
        let span = Span::new(4..10);

        assert_eq!(span.start(), 4);
        assert_eq!(span.end(), 10);
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn test_slice_of_locates_sub_slice() {
        let text = "function Widget:draw()";
        let line_span = Span::new(100..100 + text.len());
        let class = &text[9..15];

        let span = line_span.slice_of(text, class);

        assert_eq!(span, Span::new(109..115));
    }
}
