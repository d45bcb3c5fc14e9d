use regex::Regex;
use std::sync::LazyLock;

use super::types::*;

static ATX_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?[ \t]*$").expect("valid ATX heading regex"));
static SETEXT_UNDERLINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(=+|-+)[ \t]*$").expect("valid setext underline regex"));

/// Strip an optional ATX closing sequence (`## Title ##` -> `Title`)
fn strip_closing_sequence(text: &str) -> &str {
    let trimmed = text.trim_end();
    let without_hashes = trimmed.trim_end_matches('#');
    if without_hashes.len() == trimmed.len() {
        return trimmed;
    }
    if without_hashes.is_empty() {
        return "";
    }
    // The closing sequence must be preceded by whitespace
    if without_hashes.ends_with([' ', '\t']) {
        without_hashes.trim_end()
    } else {
        trimmed
    }
}

/// Parse an ATX heading, returning its level and text
pub(super) fn parse_atx_heading(line: &str) -> Option<(u8, String)> {
    let caps = ATX_HEADING_REGEX.captures(line)?;
    let level = caps.get(1).map_or(0, |m| m.len());
    let raw = caps.get(2).map_or("", |m| m.as_str());
    let text = strip_closing_sequence(raw).trim().to_string();
    u8::try_from(level).ok().map(|level| (level, text))
}

/// Detect ATX headings. Lines inside code blocks are never headings.
pub(super) fn detect_atx_headings(content: &str, lines: &mut [LineInfo]) {
    for line in lines.iter_mut() {
        if line.in_code_block || line.is_blank {
            continue;
        }
        if let Some((level, text)) = parse_atx_heading(line.content(content)) {
            line.heading = Some(Box::new(HeadingInfo {
                level,
                style: HeadingStyle::Atx,
                text,
            }));
        }
    }
}

/// Whether the paragraph ending at `prev_idx` belongs to a list item whose content
/// starts right of `underline_indent`. Such an underline cannot leave the item to turn
/// that paragraph into a heading.
fn paragraph_in_list_item(lines: &[LineInfo], prev_idx: usize, underline_indent: usize) -> bool {
    for line in lines[..=prev_idx].iter().rev() {
        if line.is_blank || line.in_code_block || line.heading.is_some() || line.is_horizontal_rule {
            return false;
        }
        if let Some(item) = line.list_item.as_deref() {
            return underline_indent < item.content_column;
        }
    }
    false
}

/// Detect setext headings (a paragraph line underlined with `=` or `-`).
///
/// Runs after list item detection: a list item line is never underlined into a heading,
/// so `- item` followed by `---` stays a list item and a thematic break. The same holds
/// for continuation text of an item (`- item\n  text\n---`) when the underline is not
/// indented into the item's content.
pub(super) fn detect_setext_headings(content: &str, lines: &mut [LineInfo]) {
    for i in 1..lines.len() {
        let (before, after) = lines.split_at_mut(i);
        if paragraph_in_list_item(before, i - 1, after[0].visual_indent) {
            continue;
        }
        let prev = &mut before[i - 1];
        let current = &mut after[0];

        if current.in_code_block || prev.in_code_block {
            continue;
        }
        let Some(caps) = SETEXT_UNDERLINE_REGEX.captures(current.content(content)) else {
            continue;
        };
        let prev_is_paragraph = !prev.is_blank
            && prev.heading.is_none()
            && prev.list_item.is_none()
            && !prev.is_horizontal_rule
            && !prev.is_setext_underline
            && prev.visual_indent < 4;
        if !prev_is_paragraph {
            continue;
        }

        let level = if caps.get(1).is_some_and(|m| m.as_str().starts_with('=')) {
            1
        } else {
            2
        };
        prev.heading = Some(Box::new(HeadingInfo {
            level,
            style: if level == 1 {
                HeadingStyle::Setext1
            } else {
                HeadingStyle::Setext2
            },
            text: prev.content(content).trim().to_string(),
        }));
        current.is_setext_underline = true;
        current.is_horizontal_rule = false;
    }
}
