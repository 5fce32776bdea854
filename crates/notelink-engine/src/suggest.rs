//! Title autocomplete and existence checks.
//!
//! Both operations degrade to an empty result on store failure instead of
//! raising, so autocomplete and link-badge rendering never block the rest of
//! the app on a transient backend error.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use notelink_core::defaults::MAX_TITLE_SUGGESTIONS;

use crate::engine::LinkEngine;

impl LinkEngine {
    /// Ranked title suggestions for a partial input.
    ///
    /// Empty (post-trim) input returns an empty list without fetching.
    /// Matching is a case-insensitive substring test; ranking is exact
    /// match, then prefix matches, then remaining substring matches, with
    /// ties inside a tier broken by lexicographic order of the
    /// original-case title. Capped at [`MAX_TITLE_SUGGESTIONS`].
    pub async fn get_note_title_suggestions(&self, partial: &str) -> Vec<String> {
        if partial.trim().is_empty() {
            return Vec::new();
        }

        let notes = match self.store().get_all_notes().await {
            Ok(notes) => notes,
            Err(e) => {
                warn!(
                    op = "get_note_title_suggestions",
                    error = %e,
                    "store fetch failed; degrading to empty suggestions"
                );
                return Vec::new();
            }
        };

        let needle = partial.to_lowercase();
        let mut exact = Vec::new();
        let mut prefix = Vec::new();
        let mut substring = Vec::new();

        for note in notes {
            let haystack = note.title.to_lowercase();
            if haystack == needle {
                exact.push(note.title);
            } else if haystack.starts_with(&needle) {
                prefix.push(note.title);
            } else if haystack.contains(&needle) {
                substring.push(note.title);
            }
        }

        exact.sort();
        prefix.sort();
        substring.sort();

        let mut suggestions = exact;
        suggestions.extend(prefix);
        suggestions.extend(substring);
        suggestions.truncate(MAX_TITLE_SUGGESTIONS);

        debug!(
            op = "get_note_title_suggestions",
            partial,
            result_count = suggestions.len(),
            "ranked title suggestions"
        );
        suggestions
    }

    /// Map each given title to whether a note with that exact title exists.
    ///
    /// Empty input returns an empty map immediately, with no fetch.
    pub async fn check_notes_exist(&self, titles: &[String]) -> HashMap<String, bool> {
        if titles.is_empty() {
            return HashMap::new();
        }

        let notes = match self.store().get_all_notes().await {
            Ok(notes) => notes,
            Err(e) => {
                warn!(
                    op = "check_notes_exist",
                    error = %e,
                    "store fetch failed; degrading to empty existence map"
                );
                return HashMap::new();
            }
        };

        let existing: HashSet<String> = notes.into_iter().map(|n| n.title).collect();
        titles
            .iter()
            .map(|title| (title.clone(), existing.contains(title)))
            .collect()
    }
}
