#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod repl;

/// Byte offset into the scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(start),
            end: Position(end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The slice of `source` this span covers.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start.0..self.end.0]
    }

    /// Character column of the span start, for caret rendering.
    pub fn column_in(&self, source: &str) -> usize {
        source[..self.start.0].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn test_span_slice() {
        let source = "12 + 345";
        let span = Span::new(5, 8);
        assert_eq!(span.slice(source), "345");
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_column_counts_chars() {
        // "é" is two bytes wide but one column
        let source = "é+1";
        let span = Span::new(2, 3);
        assert_eq!(span.slice(source), "+");
        assert_eq!(span.column_in(source), 1);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_span_beyond_u32_offsets() {
        let start = u32::MAX as usize + 10;
        let span = Span::new(start, start + 3);
        assert_eq!(span.start.0, start);
        assert_eq!(span.len(), 3);
    }
}
