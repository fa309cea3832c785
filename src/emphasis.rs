// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Bold and italic substitution within a single line.
//!
//! Each style is a single leftmost, greedy substitution: only the first
//! match is replaced, and the captured text runs to the *last* closing
//! marker on the line. Several emphasised spans on one line therefore
//! collapse into one.
//!
//! ```
//! use mdlite::emphasis::apply_emphasis;
//!
//! assert_eq!(apply_emphasis("__Bold__ and _it_"), "<strong>Bold</strong> and <em>it</em>");
//! assert_eq!(apply_emphasis("_a_ and _b_"), "<em>a_ and _b</em>");
//! ```

use regex::Regex;
use std::sync::LazyLock;

// Emphasis never spans a line terminator, including a stray `\r`,
// NEL, or the Unicode line and paragraph separators.
static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__([^\r\n\x{85}\x{2028}\x{2029}]+)__").expect("invalid bold regex")
});

static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_([^\r\n\x{85}\x{2028}\x{2029}]+)_").expect("invalid italic regex")
});

/// Replaces the first `__text__` span with `<strong>` and then the first
/// `_text_` span of the result with `<em>`.
///
/// Bold runs first so that its double underscores are consumed before the
/// italic pattern sees them. No HTML escaping is performed.
#[must_use]
pub fn apply_emphasis(text: &str) -> String {
    let bold = BOLD.replace(text, "<strong>${1}</strong>");
    ITALIC.replace(&bold, "<em>${1}</em>").into_owned()
}
