//! Flat, position-based carving of a document into section spans.
//!
//! A section runs from just after its start marker to the earliest following
//! occurrence of any end marker. Documents are never parsed into a tree.

use regex::Regex;

/// A structural boundary in the source text.
#[derive(Debug, Clone)]
pub enum Marker {
    /// Case-sensitive substring.
    Literal(String),
    Pattern(Regex),
}

impl Marker {
    pub fn literal(text: impl Into<String>) -> Self {
        Marker::Literal(text.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Marker::Pattern(regex)
    }

    /// Byte range of the first occurrence at or after `from`.
    ///
    /// `from` must lie on a char boundary of `text`.
    pub fn find_from(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        match self {
            Marker::Literal(literal) if literal.is_empty() => None,
            Marker::Literal(literal) => text[from..]
                .find(literal.as_str())
                .map(|offset| (from + offset, from + offset + literal.len())),
            Marker::Pattern(regex) => regex.find_at(text, from).map(|m| (m.start(), m.end())),
        }
    }

    pub fn is_found_in(&self, text: &str) -> bool {
        self.find_from(text, 0).is_some()
    }
}

/// Returns the text between `start` and the positionally earliest end marker.
///
/// An absent start marker yields `""`; no end marker after the start runs the
/// span to the end of the text. The order of `ends` does not matter.
pub fn locate_section<'a, 'm>(
    text: &'a str,
    start: &Marker,
    ends: impl IntoIterator<Item = &'m Marker>,
) -> &'a str {
    let Some((_, body_start)) = start.find_from(text, 0) else {
        return "";
    };

    let body_end = ends
        .into_iter()
        .filter_map(|marker| marker.find_from(text, body_start))
        .map(|(position, _)| position)
        .min()
        .unwrap_or(text.len());

    &text[body_start..body_end]
}

/// CRLF and lone CR become LF; non-breaking and other layout spaces become plain spaces.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .map(|c| match c {
            '\r' | '\u{2028}' | '\u{2029}' => '\n',
            '\u{a0}' | '\u{2007}' | '\u{202f}' | '\t' => ' ',
            other => other,
        })
        .collect()
}

/// Splits a span into items, one per line.
///
/// When at least one line starts an item, a line that does not is a soft-wrapped
/// continuation of the previous item and is joined onto it. Without any item
/// markers every non-blank line is its own item.
pub fn split_items(span: &str, is_item_start: impl Fn(&str) -> bool) -> Vec<String> {
    let lines: Vec<&str> = span
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if !lines.iter().any(|line| is_item_start(line)) {
        return lines.into_iter().map(str::to_string).collect();
    }

    let mut items: Vec<String> = Vec::new();
    for line in lines {
        match items.last_mut() {
            Some(last) if !is_item_start(line) => {
                last.push(' ');
                last.push_str(line);
            }
            _ => items.push(line.to_string()),
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earliest_end_marker_wins_regardless_of_list_order() {
        let text = "START abc END1 def END2";
        let section = locate_section(
            text,
            &Marker::literal("START"),
            &[Marker::literal("END2"), Marker::literal("END1")],
        );
        assert_eq!(section, " abc ");
    }

    #[test]
    fn missing_start_marker_yields_empty_span() {
        let section = locate_section("abc END", &Marker::literal("START"), &[Marker::literal("END")]);
        assert_eq!(section, "");
    }

    #[test]
    fn missing_end_marker_runs_to_end_of_text() {
        let section = locate_section("intro START tail", &Marker::literal("START"), &[Marker::literal("END")]);
        assert_eq!(section, " tail");
    }

    #[test]
    fn end_markers_before_the_start_are_ignored() {
        let text = "END1 START body END1 rest";
        let section = locate_section(text, &Marker::literal("START"), &[Marker::literal("END1")]);
        assert_eq!(section, " body ");
    }

    #[test]
    fn pattern_markers_respect_line_anchors() {
        let start = Marker::pattern(Regex::new(r"(?im)^references[ \t]*:?").unwrap());
        let end = Marker::pattern(Regex::new(r"(?im)^annex").unwrap());
        let text = "see references below\nREFERENCES:\nSmith, Logic, 2019\nAnnex A";
        assert_eq!(locate_section(text, &start, [&end]), "\nSmith, Logic, 2019\n");
    }

    #[test]
    fn empty_literal_never_matches() {
        assert!(!Marker::literal("").is_found_in("anything"));
    }

    #[test]
    fn normalizes_crlf_and_layout_spaces() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\u{a0}d"), "a\nb\nc d");
    }

    #[test]
    fn continuation_lines_join_previous_item() {
        let span = "- first item that\nwraps here\n- second\n\n- third";
        let items = split_items(span, |line| line.starts_with('-'));
        assert_eq!(items, vec!["- first item that wraps here", "- second", "- third"]);
    }

    #[test]
    fn without_markers_each_line_is_an_item() {
        let items = split_items("sets\n\nfunctions\n", |line| line.starts_with('-'));
        assert_eq!(items, vec!["sets", "functions"]);
    }
}
