// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Classification and rendering of a single line.
//!
//! A line is a header if it starts with `#`, a list item if it starts with
//! `* `, and a paragraph otherwise. The first rule that matches wins.
//!
//! ```
//! use mdlite::line::{Block, classify, render_line};
//!
//! assert_eq!(render_line("## Title"), "<h2>Title</h2>");
//! assert_eq!(render_line("* __item__"), "<li><strong>item</strong></li>");
//! assert!(classify("* item").is_list_item());
//! assert_eq!(classify("plain"), Block::Paragraph("plain".into()));
//! ```

use crate::emphasis::apply_emphasis;
use std::fmt;

/// A classified line, ready to render.
///
/// The [`Display`](fmt::Display) implementation produces the HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A header built from a leading run of `#`.
    Header {
        /// Number of leading `#` characters.
        ///
        /// Not clamped: seven hashes render as `<h7>`.
        level: usize,
        /// Trimmed header text. Emphasis is not applied to headers.
        content: String,
    },
    /// A `* ` list item, with emphasis already applied.
    ListItem(String),
    /// Any other line, with emphasis already applied.
    Paragraph(String),
}

impl Block {
    /// Returns `true` for list items, which the document wraps in `<ul>`.
    #[must_use]
    pub const fn is_list_item(&self) -> bool {
        matches!(self, Self::ListItem(_))
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header { level, content } => write!(f, "<h{level}>{content}</h{level}>"),
            Self::ListItem(content) => write!(f, "<li>{content}</li>"),
            Self::Paragraph(content) => write!(f, "<p>{content}</p>"),
        }
    }
}

/// Classifies a line as a header, list item, or paragraph.
#[must_use]
pub fn classify(line: &str) -> Block {
    header(line)
        .or_else(|| list_item(line))
        .unwrap_or_else(|| paragraph(line))
}

/// Renders a line to its HTML fragment.
#[must_use]
pub fn render_line(line: &str) -> String {
    classify(line).to_string()
}

/// Matches a leading run of `#`.
///
/// The character right after the hashes is skipped whatever it is, and the
/// rest is trimmed. A line of only hashes is a header with empty content.
fn header(line: &str) -> Option<Block> {
    let rest = line.trim_start_matches('#');
    let level = line.len() - rest.len();
    if level == 0 {
        return None;
    }

    let mut chars = rest.chars();
    chars.next();
    Some(Block::Header {
        level,
        content: chars.as_str().trim().to_owned(),
    })
}

fn list_item(line: &str) -> Option<Block> {
    line.strip_prefix("* ")
        .map(|item| Block::ListItem(apply_emphasis(item)))
}

fn paragraph(line: &str) -> Block {
    Block::Paragraph(apply_emphasis(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headers_by_level() {
        assert_eq!(render_line("# Title"), "<h1>Title</h1>");
        assert_eq!(render_line("## Title"), "<h2>Title</h2>");
        assert_eq!(render_line("###### Title"), "<h6>Title</h6>");
    }

    #[test]
    fn does_not_clamp_header_level() {
        assert_eq!(render_line("####### Title"), "<h7>Title</h7>");
    }

    #[test]
    fn trims_header_content() {
        assert_eq!(render_line("#   Title  "), "<h1>Title</h1>");
    }

    #[test]
    fn skips_one_character_after_hashes() {
        assert_eq!(render_line("#Title"), "<h1>itle</h1>");
    }

    #[test]
    fn skips_multibyte_character_after_hashes() {
        assert_eq!(render_line("#éTitle"), "<h1>Title</h1>");
    }

    #[test]
    fn hash_only_line_is_empty_header() {
        assert_eq!(render_line("#"), "<h1></h1>");
        assert_eq!(render_line("###"), "<h3></h3>");
        assert_eq!(render_line("# "), "<h1></h1>");
    }

    #[test]
    fn does_not_apply_emphasis_to_headers() {
        assert_eq!(render_line("# _Title_"), "<h1>_Title_</h1>");
    }

    #[test]
    fn header_wins_over_list_marker() {
        assert_eq!(
            classify("# * item"),
            Block::Header {
                level: 1,
                content: "* item".into()
            }
        );
    }

    #[test]
    fn renders_list_item() {
        assert_eq!(render_line("* List item"), "<li>List item</li>");
        assert_eq!(render_line("* "), "<li></li>");
    }

    #[test]
    fn applies_emphasis_to_list_item() {
        assert_eq!(
            render_line("* __Bold Item__"),
            "<li><strong>Bold Item</strong></li>"
        );
        assert_eq!(render_line("* _Italic Item_"), "<li><em>Italic Item</em></li>");
    }

    #[test]
    fn list_marker_needs_space() {
        assert_eq!(render_line("*item"), "<p>*item</p>");
        assert_eq!(render_line(" * item"), "<p> * item</p>");
    }

    #[test]
    fn renders_paragraph() {
        assert_eq!(render_line("Hello world"), "<p>Hello world</p>");
        assert_eq!(render_line(""), "<p></p>");
    }

    #[test]
    fn applies_emphasis_to_paragraph() {
        assert_eq!(render_line("_Italic_"), "<p><em>Italic</em></p>");
    }

    #[test]
    fn keeps_carriage_return_in_paragraph() {
        assert_eq!(render_line("text\r"), "<p>text\r</p>");
    }

    #[test]
    fn only_list_items_report_list_item() {
        assert!(classify("* a").is_list_item());
        assert!(!classify("# a").is_list_item());
        assert!(!classify("a").is_list_item());
    }
}
