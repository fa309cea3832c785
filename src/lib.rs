// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Convert a small subset of Markdown to HTML.
//!
//! The supported syntax is deliberately tiny and line-oriented:
//!
//! - `#` through `######` (and beyond) headers
//! - `* ` unordered list items
//! - `__bold__` and `_italic_` emphasis
//! - everything else becomes a paragraph
//!
//! The output is an HTML fragment with no surrounding document and no
//! whitespace between elements. Input text is not HTML-escaped.
//!
//! # Example
//!
//! ```
//! let html = mdlite::convert("# Header\n* Item 1\n* Item 2\nParagraph text");
//!
//! assert_eq!(
//!     html,
//!     "<h1>Header</h1><ul><li>Item 1</li><li>Item 2</li></ul><p>Paragraph text</p>"
//! );
//! ```
//!
//! # Modules
//!
//! - [`document`]: splits a document into lines and wraps list runs in `<ul>`
//! - [`line`]: classifies and renders a single line
//! - [`emphasis`]: bold and italic substitution within a line

#![deny(missing_docs)]

pub mod document;
pub mod emphasis;
pub mod line;

pub use document::convert;
