//! Backlink lookup: which notes reference a given title.

use tracing::debug;

use notelink_core::{Error, Note, Result};

use crate::engine::LinkEngine;

impl LinkEngine {
    /// Return every note whose `outgoing_links` contains `target_title` by
    /// exact string equality.
    ///
    /// No inverted index is maintained: one full fetch per call, O(N) scan.
    /// Correctness holds by definition — the answer is always computed from
    /// the current full set — and N is bounded by a single user's personal
    /// collection.
    pub async fn get_backlinks(&self, target_title: &str) -> Result<Vec<Note>> {
        let notes = self
            .store()
            .get_all_notes()
            .await
            .map_err(|e| Error::store("get_backlinks", e))?;

        let backlinks: Vec<Note> = notes
            .into_iter()
            .filter(|note| note.outgoing_links.iter().any(|t| t == target_title))
            .collect();

        debug!(
            op = "get_backlinks",
            target_title,
            result_count = backlinks.len(),
            "collected backlinks"
        );
        Ok(backlinks)
    }
}
