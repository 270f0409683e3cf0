// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting for rendered suggestions.
//!
//! The query is escaped before it becomes a pattern, so `c++` or `(k8s` are
//! matched literally. Anything that still goes wrong while building the
//! pattern degrades to the plain text. A highlight is decoration; it must
//! never take a suggestion down with it.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Longest query we build a pattern for, in characters.
pub const MAX_HIGHLIGHT_QUERY: usize = 256;

/// Compiled program size cap handed to the regex builder.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// A run of text, either untouched or matching the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

impl<'a> Fragment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Fragment::Plain(s) | Fragment::Match(s) => s,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Fragment::Match(_))
    }
}

/// Case-insensitive literal pattern for `query`.
pub fn highlight_pattern(query: &str) -> Result<Regex> {
    let len = query.chars().count();
    if len > MAX_HIGHLIGHT_QUERY {
        return Err(Error::QueryTooLong {
            len,
            max: MAX_HIGHLIGHT_QUERY,
        });
    }
    let pattern = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?;
    Ok(pattern)
}

/// Split `text` into plain and matching fragments.
///
/// Empty or whitespace-only queries highlight nothing. If the pattern cannot
/// be built the whole text comes back as one plain fragment.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Fragment<'a>> {
    let query = query.trim();
    if query.is_empty() || text.is_empty() {
        return vec![Fragment::Plain(text)];
    }

    let pattern = match highlight_pattern(query) {
        Ok(pattern) => pattern,
        Err(e) => {
            tracing::warn!(error = %e, "highlight disabled for query");
            return vec![Fragment::Plain(text)];
        }
    };

    let mut fragments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            fragments.push(Fragment::Plain(&text[last..found.start()]));
        }
        fragments.push(Fragment::Match(found.as_str()));
        last = found.end();
    }
    if last < text.len() {
        fragments.push(Fragment::Plain(&text[last..]));
    }
    fragments
}

/// Render `text` with every match wrapped in `open`/`close`.
///
/// ```
/// use certsearch::mark;
///
/// assert_eq!(mark("Certified Kubernetes", "kube", "<mark>", "</mark>"),
///            "Certified <mark>Kube</mark>rnetes");
/// ```
pub fn mark(text: &str, query: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for fragment in highlight(text, query) {
        match fragment {
            Fragment::Plain(s) => out.push_str(s),
            Fragment::Match(s) => {
                out.push_str(open);
                out.push_str(s);
                out.push_str(close);
            }
        }
    }
    out
}

/// Render `text` as HTML with every match wrapped in `<mark>`.
///
/// Catalog text is escaped before wrapping, so markup in a record shows up
/// as text instead of being interpreted.
///
/// ```
/// use certsearch::mark_html;
///
/// assert_eq!(mark_html("Q&A <live>", "a"), "Q&amp;<mark>A</mark> &lt;live&gt;");
/// ```
pub fn mark_html(text: &str, query: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for fragment in highlight(text, query) {
        match fragment {
            Fragment::Plain(s) => escape_html_into(&mut out, s),
            Fragment::Match(s) => {
                out.push_str("<mark>");
                escape_html_into(&mut out, s);
                out.push_str("</mark>");
            }
        }
    }
    out
}

fn escape_html_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}
