/// Pre-computed information about a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    /// 1-based line number
    pub line_num: usize,
    /// Byte offset where this line starts in the document
    pub byte_offset: usize,
    /// Length of the line in bytes (without line terminator)
    pub byte_len: usize,
    /// Number of bytes of leading whitespace (for substring extraction)
    pub indent: usize,
    /// Visual column width of leading whitespace, tabs expanded to the next multiple of 4
    pub visual_indent: usize,
    /// Whether the line is blank (empty or only whitespace)
    pub is_blank: bool,
    /// Whether this line is part of a fenced code block, delimiters included
    pub in_code_block: bool,
    /// Index into [`crate::lint_context::LintContext::code_blocks`] when `in_code_block` is set
    pub code_block_index: Option<usize>,
    /// Whether this line is an opening or closing fence
    pub is_code_fence: bool,
    /// Whether this line is a thematic break (---, ***, ___)
    pub is_horizontal_rule: bool,
    /// Whether this line underlines the previous line as a setext heading
    pub is_setext_underline: bool,
    /// Nesting depth of the innermost list item this line belongs to
    pub list_depth: Option<usize>,
    /// List item information if this line starts a list item
    /// Boxed to reduce LineInfo size: most lines are not list items
    pub list_item: Option<Box<ListItemInfo>>,
    /// Heading information if this line is a heading
    pub heading: Option<Box<HeadingInfo>>,
}

impl LineInfo {
    /// Get the line content as a string slice from the source document
    pub fn content<'a>(&self, source: &'a str) -> &'a str {
        &source[self.byte_offset..self.byte_offset + self.byte_len]
    }

    /// Whether the line sits inside a list item, either as its marker line or as continuation
    pub fn in_list(&self) -> bool {
        self.list_depth.is_some()
    }
}

/// Information about a list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemInfo {
    /// The marker used (`*`, `-`, `+`, or a number followed by `.` or `)`)
    pub marker: String,
    /// Whether it's ordered (true) or unordered (false)
    pub is_ordered: bool,
    /// The number for ordered lists
    pub number: Option<usize>,
    /// Visual column where the marker starts (0-based)
    pub marker_column: usize,
    /// Length of the whitespace run between marker and content
    pub spaces_after_marker: usize,
    /// Visual column where content after the marker starts
    pub content_column: usize,
    /// Number of enclosing list items (0 for top-level items)
    pub depth: usize,
    /// Line number of the enclosing item, if any
    pub parent_line: Option<usize>,
    /// Marker column of the enclosing item, if any
    pub parent_marker_column: Option<usize>,
    /// Whether any enclosing item is ordered
    pub has_ordered_ancestor: bool,
    /// Whether the item body spans two or more non-blank lines before its sibling or the list end
    pub is_multi_line: bool,
    /// Last non-blank line belonging to the item, nested items included
    pub end_line: usize,
}

impl ListItemInfo {
    /// The first character of the marker, e.g. `-` or `1`
    pub fn marker_char(&self) -> char {
        self.marker.chars().next().unwrap_or('-')
    }
}

/// Heading style type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// ATX style heading (# Heading)
    Atx,
    /// Setext style heading with = underline
    Setext1,
    /// Setext style heading with - underline
    Setext2,
}

/// Information about a heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingInfo {
    /// Heading level (1-6)
    pub level: u8,
    pub style: HeadingStyle,
    /// Heading text, closing sequence and surrounding whitespace removed
    pub text: String,
}

/// A fenced code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// 1-based line of the opening fence
    pub start_line: usize,
    /// 1-based line of the closing fence, or the last line when the block is unterminated
    pub end_line: usize,
    /// First word of the info string, if any
    pub language: Option<String>,
    /// Whether a matching closing fence was found
    pub closed: bool,
}

impl CodeBlock {
    /// Whether the given line lies strictly between the fences
    pub fn contains_body_line(&self, line_num: usize) -> bool {
        line_num > self.start_line && (line_num < self.end_line || (!self.closed && line_num == self.end_line))
    }
}
