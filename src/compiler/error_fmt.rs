//! Error formatting with source context.
//!
//! Converts byte offsets into 1-based row/column locations and renders
//! rustc-style diagnostics for the command-line front end.

/// A 1-based row/column location in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub row: usize,
    pub column: usize,
}

impl SourceLocation {
    /// Computes the location of a byte offset by scanning every byte before it.
    ///
    /// Offsets past the end are clamped to the end of the source.
    pub fn from_offset(source: &str, index: usize) -> Self {
        let index = index.min(source.len());
        let mut row = 1;
        let mut column = 1;
        for &byte in &source.as_bytes()[..index] {
            if byte == b'\n' {
                row += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { row, column }
    }
}

/// Configuration for formatting an error with source context.
pub struct ErrorFormat<'a> {
    /// The error message (e.g., "Invalid token")
    pub message: &'a str,
    /// Source code
    pub source: &'a str,
    /// Byte position in source where error occurred
    pub position: usize,
    /// Filename to display
    pub filename: &'a str,
    /// Line offset to add (for definitions embedded in a larger file)
    pub line_offset: usize,
    /// Annotation shown next to the caret
    pub annotation: Option<String>,
    /// Help text
    pub help: Option<&'a str>,
}

impl<'a> ErrorFormat<'a> {
    /// Creates a new error format configuration.
    pub fn new(message: &'a str, source: &'a str, position: usize) -> Self {
        Self {
            message,
            source,
            position,
            filename: "input",
            line_offset: 0,
            annotation: None,
            help: None,
        }
    }

    /// Sets the filename.
    pub fn filename(mut self, filename: &'a str) -> Self {
        self.filename = filename;
        self
    }

    /// Sets the line offset.
    pub fn line_offset(mut self, offset: usize) -> Self {
        self.line_offset = offset;
        self
    }

    /// Sets the annotation.
    pub fn annotation(mut self, ann: String) -> Self {
        self.annotation = Some(ann);
        self
    }

    /// Sets the help text.
    pub fn help(mut self, help: &'a str) -> Self {
        self.help = Some(help);
        self
    }

    /// Formats the error with source context.
    ///
    /// Output format:
    /// ```text
    /// error: message
    ///  --> file:row:column
    ///   |
    /// N | source line content
    ///   |     ^ annotation
    /// help: suggestion
    /// ```
    pub fn format(&self) -> String {
        let loc = SourceLocation::from_offset(self.source, self.position);
        let absolute_row = loc.row + self.line_offset;

        let mut msg = format!("error: {}\n", self.message);
        msg.push_str(&format!(
            " --> {}:{}:{}\n",
            self.filename, absolute_row, loc.column
        ));

        let bytes = self.source.as_bytes();
        let position = self.position.min(bytes.len());
        let line_start = bytes[..position]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |pos| pos + 1);
        let line_end = bytes[position..]
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .map_or(bytes.len(), |pos| position + pos);

        let line_content = String::from_utf8_lossy(&bytes[line_start..line_end]);
        let expanded_content = line_content.replace('\t', "    ");

        // Visual column of the caret, counting tabs as four columns.
        let visual_column: usize = bytes[line_start..position]
            .iter()
            .map(|&b| if b == b'\t' { 4 } else { 1 })
            .sum();

        let leading_spaces = expanded_content.len() - expanded_content.trim_start().len();
        let trimmed_content = expanded_content.trim().to_string();
        let adjusted_column = visual_column.saturating_sub(leading_spaces);

        const MAX_LINE_LEN: usize = 80;
        const CONTEXT_CHARS: usize = 30;

        let (display_content, caret_column) = if trimmed_content.len() > MAX_LINE_LEN {
            let content_chars: Vec<char> = trimmed_content.chars().collect();
            let char_len = content_chars.len();

            let start = adjusted_column.saturating_sub(CONTEXT_CHARS).min(char_len);
            let end = (adjusted_column + CONTEXT_CHARS).min(char_len);

            let prefix = if start > 0 { "..." } else { "" };
            let suffix = if end < char_len { "..." } else { "" };

            let snippet: String = content_chars[start..end].iter().collect();
            (
                format!("{}{}{}", prefix, snippet, suffix),
                adjusted_column.saturating_sub(start) + prefix.len(),
            )
        } else {
            (trimmed_content, adjusted_column)
        };

        let width = absolute_row.to_string().len();
        let annotation = self.annotation.as_deref().unwrap_or("");

        msg.push_str(&format!("{:>width$} |\n", "", width = width));
        msg.push_str(&format!(
            "{:>width$} | {}\n",
            absolute_row,
            display_content,
            width = width
        ));
        let caret_line = format!(
            "{:>width$} | {:>col$}^ {}",
            "",
            "",
            annotation,
            width = width,
            col = caret_column
        );
        msg.push_str(caret_line.trim_end());
        msg.push('\n');

        if let Some(help) = self.help {
            msg.push_str(&format!("help: {}\n", help));
        }

        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_start() {
        assert_eq!(
            SourceLocation::from_offset("Name \"Foo\";", 0),
            SourceLocation { row: 1, column: 1 }
        );
    }

    #[test]
    fn test_location_counts_newlines() {
        let source = "a\nbb\n\nccc";
        let index = source.find("ccc").unwrap();
        let loc = SourceLocation::from_offset(source, index);
        assert_eq!(loc.row, 4);
        assert_eq!(loc.column, 1);

        let loc = SourceLocation::from_offset(source, 3);
        assert_eq!(loc, SourceLocation { row: 2, column: 2 });
    }

    #[test]
    fn test_location_clamps_past_end() {
        let loc = SourceLocation::from_offset("ab\n", 100);
        assert_eq!(loc, SourceLocation { row: 2, column: 1 });
    }

    #[test]
    fn test_error_format_basic() {
        let message = "Expected token Semicolon got: Symbol";
        let formatted = ErrorFormat::new(message, "Name \"Foo\" x", 11)
            .filename("test.nsl")
            .annotation("found: Symbol".to_string())
            .format();

        assert!(formatted.contains("error: Expected token Semicolon got: Symbol"));
        assert!(formatted.contains("--> test.nsl:1:12"));
        assert!(formatted.contains("1 | Name \"Foo\" x"));
        assert!(formatted.contains("  |            ^ found: Symbol"));
    }

    #[test]
    fn test_error_format_with_help() {
        let formatted = ErrorFormat::new("Expected '}'", "Bindings {", 10)
            .help("add a closing brace }")
            .format();

        assert!(formatted.contains("help: add a closing brace }"));
    }

    #[test]
    fn test_error_format_multiline() {
        let source = "Name \"A\";\n    Name \"B\";\n";
        let formatted = ErrorFormat::new("Name already set", source, 14)
            .filename("test.nsl")
            .format();

        assert!(formatted.contains("--> test.nsl:2:5"));
        // Leading indentation is stripped and the caret follows it.
        assert!(formatted.contains("2 | Name \"B\";"));
        assert!(formatted.contains("  | ^"));
    }

    #[test]
    fn test_error_format_line_offset() {
        let formatted = ErrorFormat::new("Invalid token", "x", 0)
            .line_offset(9)
            .format();
        assert!(formatted.contains("--> input:10:1"));
    }

    #[test]
    fn test_long_line_truncation_both_ends() {
        let long_line = concat!(
            "Uniforms \"Camera\" { float4x4 VeryLongMatrixName : SOME_SLOT; ",
            "float4x4 AnotherMatrixName : OTHER_SLOT; float4 Tail : TAIL; }",
        );
        let formatted = ErrorFormat::new("test error", long_line, 60)
            .filename("test.nsl")
            .format();

        assert!(
            formatted.contains("1 | ..."),
            "should have prefix ellipsis, got:\n{}",
            formatted
        );
        assert!(
            formatted.matches("...").count() >= 2,
            "should have both ellipses, got:\n{}",
            formatted
        );
    }

    #[test]
    fn test_short_line_not_truncated() {
        let formatted = ErrorFormat::new("test error", "Input { float3 Position }", 24).format();
        assert!(!formatted.contains("..."));
    }
}
