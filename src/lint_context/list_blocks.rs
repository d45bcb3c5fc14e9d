use super::line_computation::visual_indent;
use super::types::*;

/// A list marker found at the start of a line, before structural analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedListMarker {
    pub marker: String,
    pub is_ordered: bool,
    pub number: Option<usize>,
    pub marker_column: usize,
    pub spaces_after_marker: usize,
    pub content_column: usize,
}

/// Maximum digits in an ordered list marker, per CommonMark
const MAX_ORDERED_DIGITS: usize = 9;

/// Parse a list marker: leading whitespace, a marker (`-`, `*`, `+`, or digits followed by
/// `.` or `)`), a whitespace run, then non-empty content.
pub(crate) fn parse_list_marker(line: &str) -> Option<ParsedListMarker> {
    let indent_bytes = line.len() - line.trim_start_matches([' ', '\t']).len();
    let rest = &line[indent_bytes..];
    let marker_column = visual_indent(line);

    let (marker, is_ordered, number) = match rest.chars().next()? {
        c @ ('-' | '*' | '+') => (c.to_string(), false, None),
        c if c.is_ascii_digit() => {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.len() > MAX_ORDERED_DIGITS {
                return None;
            }
            let delimiter = rest[digits.len()..].chars().next()?;
            if delimiter != '.' && delimiter != ')' {
                return None;
            }
            let number = digits.parse::<usize>().ok();
            (format!("{digits}{delimiter}"), true, number)
        }
        _ => return None,
    };

    let after_marker = &rest[marker.len()..];
    let spaces_after_marker = after_marker.chars().take_while(|&c| c == ' ' || c == '\t').count();
    if spaces_after_marker == 0 {
        return None;
    }
    if after_marker[spaces_after_marker..].trim().is_empty() {
        return None;
    }

    Some(ParsedListMarker {
        content_column: marker_column + marker.chars().count() + spaces_after_marker,
        marker,
        is_ordered,
        number,
        marker_column,
        spaces_after_marker,
    })
}

/// Detect list item marker lines. Code, headings and thematic breaks are never list items.
pub(super) fn detect_list_items(content: &str, lines: &mut [LineInfo]) {
    for line in lines.iter_mut() {
        if line.in_code_block || line.is_blank || line.heading.is_some() || line.is_horizontal_rule {
            continue;
        }
        if let Some(parsed) = parse_list_marker(line.content(content)) {
            line.list_item = Some(Box::new(ListItemInfo {
                marker: parsed.marker,
                is_ordered: parsed.is_ordered,
                number: parsed.number,
                marker_column: parsed.marker_column,
                spaces_after_marker: parsed.spaces_after_marker,
                content_column: parsed.content_column,
                depth: 0,
                parent_line: None,
                parent_marker_column: None,
                has_ordered_ancestor: false,
                is_multi_line: false,
                end_line: line.line_num,
            }));
        }
    }
}

/// An item on the open-list stack
struct OpenItem {
    line_idx: usize,
    marker_column: usize,
    content_column: usize,
    is_ordered: bool,
}

/// Per-item counters collected while scanning
#[derive(Default, Clone, Copy)]
struct ItemSpan {
    non_blank_lines: usize,
    end_line: usize,
}

/// Compute list structure: nesting depth, parents, the lines each item spans,
/// and whether its body covers more than one non-blank line.
///
/// Nesting follows indentation deltas: an item whose marker sits further right than the
/// innermost open item's marker opens a new level; an item at the same column is a
/// sibling; an item further left closes levels until it finds its place.
///
/// Non-item lines close every open item whose content column lies to their right,
/// except paragraph text directly following item text (lazy continuation). Blank lines
/// keep the list open.
pub(super) fn compute_list_structure(lines: &mut [LineInfo]) {
    let mut stack: Vec<OpenItem> = Vec::new();
    let mut spans: Vec<ItemSpan> = vec![ItemSpan::default(); lines.len()];
    let mut prev_is_list_paragraph = false;

    for idx in 0..lines.len() {
        let line = &lines[idx];

        if let Some(item) = line.list_item.as_deref() {
            let marker_column = item.marker_column;
            while stack.last().is_some_and(|open| open.marker_column >= marker_column) {
                stack.pop();
            }
            let parent = stack.last();
            let depth = stack.len();
            let parent_line = parent.map(|open| lines[open.line_idx].line_num);
            let parent_marker_column = parent.map(|open| open.marker_column);
            let has_ordered_ancestor = stack.iter().any(|open| open.is_ordered);
            let content_column = item.content_column;
            let is_ordered = item.is_ordered;

            stack.push(OpenItem {
                line_idx: idx,
                marker_column,
                content_column,
                is_ordered,
            });

            let line = &mut lines[idx];
            if let Some(item) = line.list_item.as_deref_mut() {
                item.depth = depth;
                item.parent_line = parent_line;
                item.parent_marker_column = parent_marker_column;
                item.has_ordered_ancestor = has_ordered_ancestor;
            }
            line.list_depth = Some(depth);
            record_line(&stack, &mut spans, line.line_num);
            prev_is_list_paragraph = true;
            continue;
        }

        if line.is_blank {
            if !stack.is_empty() {
                lines[idx].list_depth = Some(stack.len() - 1);
            }
            prev_is_list_paragraph = false;
            continue;
        }

        // Lines inside a fence follow whatever its opening line decided
        if line.in_code_block && !is_opening_fence(line, idx, lines) {
            if !stack.is_empty() {
                lines[idx].list_depth = Some(stack.len() - 1);
                record_line(&stack, &mut spans, lines[idx].line_num);
            }
            prev_is_list_paragraph = false;
            continue;
        }

        let is_paragraph_text = !line.in_code_block
            && line.heading.is_none()
            && !line.is_horizontal_rule
            && !line.is_setext_underline;
        let lazy_continuation = is_paragraph_text && prev_is_list_paragraph;

        if !lazy_continuation {
            let indent = line.visual_indent;
            while stack.last().is_some_and(|open| open.content_column > indent) {
                stack.pop();
            }
        }

        if stack.is_empty() {
            prev_is_list_paragraph = false;
            continue;
        }

        let line = &mut lines[idx];
        line.list_depth = Some(stack.len() - 1);
        record_line(&stack, &mut spans, line.line_num);
        prev_is_list_paragraph = is_paragraph_text;
    }

    for (idx, line) in lines.iter_mut().enumerate() {
        if let Some(item) = line.list_item.as_deref_mut() {
            let span = spans[idx];
            item.is_multi_line = span.non_blank_lines >= 2;
            item.end_line = span.end_line.max(line.line_num);
        }
    }
}

/// Nesting level of every list item, counted in steps of `indent_width`.
///
/// A top-level item is level 0. A nested item sits `max(1, delta / indent_width)` levels
/// below its parent, where `delta` is the distance between the two markers, so a child
/// indented by twice the width under a top-level item is at level 2.
pub(super) fn indent_levels(lines: &[LineInfo], indent_width: usize) -> Vec<Option<usize>> {
    let width = indent_width.max(1);
    let mut levels: Vec<Option<usize>> = vec![None; lines.len()];

    for (idx, line) in lines.iter().enumerate() {
        let Some(item) = line.list_item.as_deref() else {
            continue;
        };
        let parent_level = item
            .parent_line
            .and_then(|parent| levels.get(parent - 1).copied().flatten());
        levels[idx] = Some(match (parent_level, item.parent_marker_column) {
            (Some(parent_level), Some(parent_column)) => {
                let delta = item.marker_column.saturating_sub(parent_column);
                parent_level + (delta / width).max(1)
            }
            _ => 0,
        });
    }
    levels
}

fn is_opening_fence(line: &LineInfo, idx: usize, lines: &[LineInfo]) -> bool {
    line.is_code_fence && (idx == 0 || lines[idx - 1].code_block_index != line.code_block_index)
}

/// Count a non-blank line towards every open item
fn record_line(stack: &[OpenItem], spans: &mut [ItemSpan], line_num: usize) {
    for open in stack {
        let span = &mut spans[open.line_idx];
        span.non_blank_lines += 1;
        span.end_line = line_num;
    }
}
