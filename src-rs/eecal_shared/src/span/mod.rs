//! Source location spans for mapping syntax nodes back to the input line

/// A span of source code
///
/// A span is a pair of source locations, representing the start and end of the
/// span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: SourceLocation,
    end: SourceLocation,
}

impl Span {
    /// Creates a new span from a start and end source location
    ///
    /// # Panics
    ///
    /// Panics if `start` comes after `end`.
    #[must_use]
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        assert!(
            start.offset <= end.offset,
            "start offset must be before end offset"
        );

        assert!(
            start.line < end.line || (start.line == end.line && start.column <= end.column),
            "start line and column must be before end line and column"
        );

        Self { start, end }
    }

    /// Returns the start source location
    #[must_use]
    pub const fn start(&self) -> &SourceLocation {
        &self.start
    }

    /// Returns the end source location
    #[must_use]
    pub const fn end(&self) -> &SourceLocation {
        &self.end
    }

    /// Returns the number of bytes covered by the span
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Returns `true` if the span covers no input
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the smallest span that covers both `self` and `other`
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let start = if self.start.offset <= other.start.offset {
            self.start
        } else {
            other.start
        };

        let end = if self.end.offset >= other.end.offset {
            self.end
        } else {
            other.end
        };

        Self::new(start, end)
    }
}

/// A source location
///
/// A source location is a position in the source code, represented by an
/// offset, line, and column.
///
/// Note that it is assumed that the offset corresponds to the line and column.
/// If this assumption is not correct, any code that relies on the line and
/// column for display purposes will be incorrect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// The offset from the beginning of the source code (0-indexed)
    pub offset: usize,
    /// The line number (1-indexed)
    pub line: usize,
    /// The column number (1-indexed)
    pub column: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn location(offset: usize) -> SourceLocation {
        SourceLocation {
            offset,
            line: 1,
            column: offset + 1,
        }
    }

    #[test]
    fn len_counts_bytes() {
        let span = Span::new(location(2), location(6));
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }

    #[test]
    fn merge_covers_both_spans() {
        let left = Span::new(location(0), location(3));
        let right = Span::new(location(6), location(9));

        let merged = left.merge(&right);
        assert_eq!(merged.start().offset, 0);
        assert_eq!(merged.end().offset, 9);
        assert_eq!(right.merge(&left), merged);
    }

    #[test]
    #[should_panic(expected = "start offset must be before end offset")]
    fn new_rejects_reversed_span() {
        let _ = Span::new(location(5), location(1));
    }
}
