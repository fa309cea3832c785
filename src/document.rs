// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Whole-document conversion.
//!
//! The document is split on `\n`, each line is rendered by
//! [`line::classify`], and consecutive list items are wrapped in a single
//! `<ul>` ... `</ul>` pair.

use crate::line;
use std::fmt::Write;

const LIST_OPEN: &str = "<ul>";
const LIST_CLOSE: &str = "</ul>";

/// Converts a Markdown document to an HTML fragment.
///
/// Never fails. Fragments are concatenated with no separator, and an empty
/// document produces an empty string.
///
/// # Example
///
/// ```
/// use mdlite::document::convert;
///
/// assert_eq!(convert("* a\n* b"), "<ul><li>a</li><li>b</li></ul>");
/// assert_eq!(convert(""), "");
/// ```
#[must_use]
pub fn convert(markdown: &str) -> String {
    let (mut out, list_open) = lines(markdown).map(line::classify).fold(
        (String::new(), false),
        |(mut out, list_open), block| {
            let is_item = block.is_list_item();
            if is_item && !list_open {
                out.push_str(LIST_OPEN);
            } else if !is_item && list_open {
                out.push_str(LIST_CLOSE);
            }
            write!(out, "{block}").unwrap();
            (out, is_item)
        },
    );

    if list_open {
        out.push_str(LIST_CLOSE);
    }
    out
}

/// Splits a document into lines.
///
/// Only `\n` separates lines, so a `\r` stays on the end of its line.
/// Empty lines at the end of the document are dropped; interior empty lines
/// are kept and become empty paragraphs.
pub fn lines(markdown: &str) -> impl Iterator<Item = &str> {
    let body = markdown.trim_end_matches('\n');
    (!body.is_empty())
        .then(|| body.split('\n'))
        .into_iter()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(markdown: &str) -> Vec<&str> {
        lines(markdown).collect()
    }

    #[test]
    fn converts_mixed_document() {
        assert_eq!(
            convert("# Header\n* Item 1\n* Item 2\nParagraph text"),
            "<h1>Header</h1><ul><li>Item 1</li><li>Item 2</li></ul><p>Paragraph text</p>"
        );
    }

    #[test]
    fn empty_document_is_empty() {
        assert_eq!(convert(""), "");
        assert_eq!(convert("\n\n"), "");
    }

    #[test]
    fn closes_list_at_end_of_document() {
        assert_eq!(convert("* only"), "<ul><li>only</li></ul>");
    }

    #[test]
    fn separate_runs_get_separate_lists() {
        assert_eq!(
            convert("* a\ntext\n* b\n* c"),
            "<ul><li>a</li></ul><p>text</p><ul><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn header_closes_list() {
        assert_eq!(
            convert("* a\n## Next"),
            "<ul><li>a</li></ul><h2>Next</h2>"
        );
    }

    #[test]
    fn blank_line_between_items_splits_list() {
        assert_eq!(
            convert("* a\n\n* b"),
            "<ul><li>a</li></ul><p></p><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn trailing_newline_adds_nothing() {
        assert_eq!(convert("Hello world\n"), "<p>Hello world</p>");
        assert_eq!(convert("* a\n"), "<ul><li>a</li></ul>");
    }

    #[test]
    fn splits_only_on_line_feed() {
        assert_eq!(collect("a\r\nb"), ["a\r", "b"]);
        assert_eq!(convert("a\r\nb"), "<p>a\r</p><p>b</p>");
    }

    #[test]
    fn keeps_leading_and_interior_empty_lines() {
        assert_eq!(collect("\na\n\nb\n\n"), ["", "a", "", "b"]);
    }

    #[test]
    fn no_lines_for_empty_input() {
        assert!(collect("").is_empty());
        assert!(collect("\n").is_empty());
    }
}
