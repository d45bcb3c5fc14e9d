use super::types::*;

/// Width a tab advances to, per CommonMark
const TAB_STOP: usize = 4;

/// Split content into raw lines, returning `(byte_offset, text)` pairs.
///
/// Both `\n` and `\r\n` terminate a line; the terminator is not part of the text.
/// A trailing terminator does not produce an extra empty line.
pub(super) fn split_lines(content: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for raw in content.split_inclusive('\n') {
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);
        lines.push((offset, text));
        offset += raw.len();
    }
    lines
}

/// Visual width of the leading whitespace run, with tabs expanded to the next tab stop
pub(crate) fn visual_indent(line: &str) -> usize {
    let mut width = 0;
    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += TAB_STOP - (width % TAB_STOP),
            _ => break,
        }
    }
    width
}

/// An opening fence: its character, run length and info string
struct Fence<'a> {
    ch: char,
    len: usize,
    info: &'a str,
}

fn parse_fence(line: &str) -> Option<Fence<'_>> {
    let trimmed = line.trim_start_matches([' ', '\t']);
    let ch = trimmed.chars().next()?;
    if ch != '`' && ch != '~' {
        return None;
    }
    let len = trimmed.chars().take_while(|&c| c == ch).count();
    if len < 3 {
        return None;
    }
    let info = trimmed[len..].trim();
    // A backtick fence cannot carry backticks in its info string; that is an inline code span
    if ch == '`' && info.contains('`') {
        return None;
    }
    Some(Fence { ch, len, info })
}

fn is_closing_fence(line: &str, open: &Fence<'_>) -> bool {
    let trimmed = line.trim_start_matches([' ', '\t']);
    let len = trimmed.chars().take_while(|&c| c == open.ch).count();
    len >= open.len && trimmed[len..].trim().is_empty()
}

/// Check whether a line is a thematic break: three or more `-`, `*` or `_`, optionally
/// separated by spaces or tabs, with at most three spaces of indentation.
pub(crate) fn is_horizontal_rule_line(line: &str) -> bool {
    if visual_indent(line) > 3 {
        return false;
    }
    let trimmed = line.trim();
    let Some(first) = trimmed.chars().next() else {
        return false;
    };
    if !matches!(first, '-' | '*' | '_') {
        return false;
    }
    let mut count = 0;
    for c in trimmed.chars() {
        if c == first {
            count += 1;
        } else if c != ' ' && c != '\t' {
            return false;
        }
    }
    count >= 3
}

/// Pre-compute basic line information and fenced code blocks.
///
/// A fence toggles code-block state for the following lines until a closing fence of the
/// same character and at least the same length. An unterminated fence runs to the end
/// of the document.
pub(super) fn compute_basic_line_info(content: &str) -> (Vec<LineInfo>, Vec<CodeBlock>) {
    let raw_lines = split_lines(content);
    let mut lines = Vec::with_capacity(raw_lines.len());
    let mut code_blocks: Vec<CodeBlock> = Vec::new();
    let mut open_fence: Option<Fence<'_>> = None;

    for (i, &(byte_offset, text)) in raw_lines.iter().enumerate() {
        let line_num = i + 1;
        let indent = text.len() - text.trim_start_matches([' ', '\t']).len();
        let is_blank = text.trim().is_empty();

        let mut in_code_block = false;
        let mut is_code_fence = false;

        if let Some(fence) = &open_fence {
            in_code_block = true;
            if is_closing_fence(text, fence) {
                is_code_fence = true;
                open_fence = None;
                if let Some(block) = code_blocks.last_mut() {
                    block.end_line = line_num;
                    block.closed = true;
                }
            } else if let Some(block) = code_blocks.last_mut() {
                block.end_line = line_num;
            }
        } else if let Some(fence) = parse_fence(text) {
            in_code_block = true;
            is_code_fence = true;
            code_blocks.push(CodeBlock {
                start_line: line_num,
                end_line: line_num,
                language: fence
                    .info
                    .split_whitespace()
                    .next()
                    .map(|word| word.trim_matches(|c| c == '{' || c == '}').to_string())
                    .filter(|word| !word.is_empty()),
                closed: false,
            });
            open_fence = Some(fence);
        }

        let is_horizontal_rule = !in_code_block && is_horizontal_rule_line(text);

        lines.push(LineInfo {
            line_num,
            byte_offset,
            byte_len: text.len(),
            indent,
            visual_indent: visual_indent(text),
            is_blank,
            in_code_block,
            code_block_index: in_code_block.then(|| code_blocks.len() - 1),
            is_code_fence,
            is_horizontal_rule,
            is_setext_underline: false,
            list_depth: None,
            list_item: None,
            heading: None,
        });
    }

    if open_fence.is_some() {
        log::debug!("Unterminated code fence runs to end of document");
    }

    (lines, code_blocks)
}
