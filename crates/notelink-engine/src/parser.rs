//! Wiki-link extraction from note content.
//!
//! A link token is `[[Target]]` or `[[Target|Display]]`, matched by a
//! single left-to-right scan for non-overlapping occurrences.
//!
//! # Rules
//!
//! 1. `Target` and `Display` are trimmed of surrounding whitespace
//! 2. `Display` defaults to `Target` when omitted (or empty after trim)
//! 3. An occurrence whose trimmed target is empty is dropped silently
//! 4. Malformed sequences simply fail to match; parsing never errors
//! 5. Offsets are character offsets into the scanned string, spanning the
//!    full `[[...]]` token, for later highlighting/editing
//!
//! Parsing is pure (no store access). Marking occurrences as resolved
//! against a live title index is a separate, batchable step,
//! [`resolve_occurrences`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// `[[Target]]` or `[[Target|Display]]`; brackets and pipes are excluded
/// from the target so nested or unbalanced sequences fail to match.
static LINK_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[([^\[\]|]*)(?:\|([^\[\]]*))?\]\]").expect("link token pattern is valid")
});

/// A single `[[...]]` reference found in note content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOccurrence {
    /// Trimmed title the link points at.
    pub target_title: String,
    /// Trimmed display text; equals `target_title` when no explicit
    /// display was given.
    pub display_text: String,
    /// Character offset of the opening `[[`.
    pub start_offset: usize,
    /// Character offset one past the closing `]]`.
    pub end_offset: usize,
    /// Whether the target matches an existing note title. Always `false`
    /// after parsing; set only by [`resolve_occurrences`].
    pub exists: bool,
}

/// Extract wiki-link occurrences from note content, in document order.
pub fn parse_links(content: &str) -> Vec<LinkOccurrence> {
    let mut occurrences = Vec::new();

    // The regex yields byte offsets; track a running character count so
    // each match converts in a single pass over the content.
    let mut byte_cursor = 0usize;
    let mut char_cursor = 0usize;

    for caps in LINK_TOKEN.captures_iter(content) {
        let token = caps.get(0).expect("group 0 always present");

        char_cursor += content[byte_cursor..token.start()].chars().count();
        let start_offset = char_cursor;
        char_cursor += content[token.start()..token.end()].chars().count();
        byte_cursor = token.end();
        let end_offset = char_cursor;

        let target = caps.get(1).map_or("", |m| m.as_str()).trim();
        if target.is_empty() {
            // [[]] and whitespace-only targets are noops, not errors.
            continue;
        }

        let display = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|d| !d.is_empty())
            .unwrap_or(target);

        occurrences.push(LinkOccurrence {
            target_title: target.to_string(),
            display_text: display.to_string(),
            start_offset,
            end_offset,
            exists: false,
        });
    }

    occurrences
}

/// Mark each occurrence whose target exactly matches a known title.
///
/// Exact string match; no normalization of case or whitespace.
pub fn resolve_occurrences(occurrences: &mut [LinkOccurrence], known_titles: &HashSet<String>) {
    for occurrence in occurrences.iter_mut() {
        if known_titles.contains(&occurrence.target_title) {
            occurrence.exists = true;
        }
    }
}
