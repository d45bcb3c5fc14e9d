//! The tokenized document every rule evaluates.
//!
//! [`LintContext::new`] splits the raw text into lines once and classifies fenced code
//! blocks, list items (with nesting depth and extent) and headings, without building a
//! full AST. Tokenizing never fails: anything unrecognized is left as plain text.

mod heading_detection;
mod line_computation;
mod list_blocks;
pub mod types;


pub use types::*;

/// An immutable, line-classified view of one Markdown document
#[derive(Debug, Clone)]
pub struct LintContext<'a> {
    pub content: &'a str,
    pub lines: Vec<LineInfo>,
    pub code_blocks: Vec<CodeBlock>,
}

impl<'a> LintContext<'a> {
    pub fn new(content: &'a str) -> Self {
        let (mut lines, code_blocks) = line_computation::compute_basic_line_info(content);
        heading_detection::detect_atx_headings(content, &mut lines);
        list_blocks::detect_list_items(content, &mut lines);
        heading_detection::detect_setext_headings(content, &mut lines);
        list_blocks::compute_list_structure(&mut lines);

        Self {
            content,
            lines,
            code_blocks,
        }
    }

    /// Get a line by its 1-based number
    pub fn line(&self, line_num: usize) -> Option<&LineInfo> {
        line_num.checked_sub(1).and_then(|idx| self.lines.get(idx))
    }

    /// Text of a line, without its terminator
    pub fn line_text(&self, line: &LineInfo) -> &'a str {
        line.content(self.content)
    }

    /// Iterate over `(line, text)` pairs
    pub fn lines_with_text(&self) -> impl Iterator<Item = (&LineInfo, &'a str)> + '_ {
        self.lines.iter().map(move |line| (line, line.content(self.content)))
    }

    /// The fenced code block a line belongs to, if any
    pub fn code_block_for(&self, line: &LineInfo) -> Option<&CodeBlock> {
        line.code_block_index.and_then(|idx| self.code_blocks.get(idx))
    }

    /// Iterate over headings in document order
    pub fn headings(&self) -> impl Iterator<Item = (&LineInfo, &HeadingInfo)> + '_ {
        self.lines
            .iter()
            .filter_map(|line| line.heading.as_deref().map(|heading| (line, heading)))
    }

    /// Iterate over list items in document order
    pub fn list_items(&self) -> impl Iterator<Item = (&LineInfo, &ListItemInfo)> + '_ {
        self.lines
            .iter()
            .filter_map(|line| line.list_item.as_deref().map(|item| (line, item)))
    }

    /// Nesting level of each line's list item, measured in steps of `indent_width`
    /// columns from its parent's marker. Indexed like [`LintContext::lines`].
    pub fn list_indent_levels(&self, indent_width: usize) -> Vec<Option<usize>> {
        list_blocks::indent_levels(&self.lines, indent_width)
    }

    pub fn has_list_items(&self) -> bool {
        self.lines.iter().any(|line| line.list_item.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Tokenize Markdown text into a [`LintContext`]
pub fn tokenize(content: &str) -> LintContext<'_> {
    LintContext::new(content)
}
