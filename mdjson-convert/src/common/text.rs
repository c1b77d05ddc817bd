//! Inline text joining and splitting.
//!
//! `join_inline_text` and `split_inline_text` are inverses from normalized
//! text onward: joining collapses every run of `Space` elements to a single
//! space and drops unsupported inlines, so irregular spacing and formatting
//! are already lost when a document is first read. Splitting a joined
//! string back produces a clean `Str`/`Space` interleaving.

use crate::ast::Inline;

/// Join an inline sequence into a plain string.
///
/// Only `Str` and `Space` contribute; anything else is omitted. Spaces are
/// emitted only between text, never leading or trailing, and runs collapse
/// to one.
pub fn join_inline_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for inline in inlines {
        match inline {
            Inline::Str(value) => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(value);
                pending_space = false;
            }
            Inline::Space => pending_space = true,
            Inline::Unsupported => {}
        }
    }
    out
}

/// Split a plain string into an inline sequence.
///
/// Tokenizes on whitespace and interleaves `Str` and `Space`, with no
/// leading or trailing `Space`.
pub fn split_inline_text(text: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for word in text.split_whitespace() {
        if !inlines.is_empty() {
            inlines.push(Inline::Space);
        }
        inlines.push(Inline::Str(word.to_string()));
    }
    inlines
}
