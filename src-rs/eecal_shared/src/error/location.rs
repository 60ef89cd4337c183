/// Source location information for error reporting
///
/// Line and column numbers are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    /// Byte offset from the beginning of the source
    offset: usize,
    /// Line number where the error occurred (1-indexed)
    line: usize,
    /// Column number where the error occurred (1-indexed)
    column: usize,
    /// Optional length of the highlighted range
    length: Option<usize>,
    /// The source line content where the error occurred
    line_source: String,
}

impl ErrorLocation {
    fn new(source: &str, offset: usize, length: Option<usize>) -> Self {
        // the offset may sit just past the last character, e.g. when a line
        // ends before an expected operand
        assert!(
            offset <= source.len(),
            "offset ({}) must be less than or equal to the length of the source ({})",
            offset,
            source.len()
        );

        if let Some(length) = length {
            assert!(length > 0, "length must not be 0");
            assert!(
                offset + length <= source.len(),
                "offset + length ({}) must be less than or equal to the length of the source ({})",
                offset + length,
                source.len()
            );
            assert!(
                !source[offset..offset + length].contains('\n'),
                "span ({:?}) must not contain newlines",
                &source[offset..offset + length]
            );
        }

        let line_start = source[..offset]
            .rfind('\n')
            .map_or(0, |newline_idx| newline_idx + 1);

        // tabs are displayed as 4 columns
        let num_tabs = source[line_start..offset]
            .chars()
            .filter(|c| *c == '\t')
            .count();

        // columns count characters, not bytes, so `µ` counts once
        let column_without_tabs = source[line_start..offset].chars().count() + 1;
        let column = column_without_tabs + num_tabs * 3;

        let line = source[..offset].chars().filter(|c| *c == '\n').count() + 1;

        // an offset directly after a trailing newline points at an empty line
        let line_source = source
            .lines()
            .nth(line - 1)
            .unwrap_or_default()
            .replace('\t', "    ");

        Self {
            offset,
            line,
            column,
            length,
            line_source,
        }
    }

    /// Creates a new error location from source content and offset
    ///
    /// # Panics
    ///
    /// Panics if `offset` is past the end of `source`.
    #[must_use]
    pub fn from_source_and_offset(source: &str, offset: usize) -> Self {
        Self::new(source, offset, None)
    }

    /// Creates a new error location from source content and span
    ///
    /// # Panics
    ///
    /// Panics if the range is empty, runs past the end of `source`, or
    /// crosses a newline.
    #[must_use]
    pub fn from_source_and_span(source: &str, offset: usize, length: usize) -> Self {
        Self::new(source, offset, Some(length))
    }

    /// Moves a location computed against one line of `source` to the same
    /// place in the whole of `source`, where that line starts at `line_start`
    ///
    /// # Panics
    ///
    /// Panics if the moved location does not fit in `source`.
    #[must_use]
    pub fn relocate(&self, source: &str, line_start: usize) -> Self {
        Self::new(source, line_start + self.offset, self.length)
    }

    /// Returns the byte offset from the beginning of the source
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the line number where the error occurred (1-indexed)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number where the error occurred (1-indexed)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the length of the highlighted range
    #[must_use]
    pub fn length(&self) -> usize {
        // a single character when no length was given
        self.length.unwrap_or(1)
    }

    /// Returns the source line content where the error occurred
    #[must_use]
    pub fn line_source(&self) -> &str {
        &self.line_source
    }
}
