//! Rename cascade: rewrite every note that references a renamed title.
//!
//! The cascade is a saga over independent per-note updates — there is no
//! cross-note transaction. All intended rewrites are computed up front from
//! one snapshot, applied sequentially, and the outcome reports which note
//! ids succeeded and which failed so the caller can retry only the failed
//! subset. Re-running after a partial failure is idempotent: already-updated
//! notes no longer match the old title and are skipped on re-scan.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use notelink_core::{Error, Note, Result};

use crate::engine::LinkEngine;

/// A per-note update that could not be persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameFailure {
    pub note_id: Uuid,
    /// Store failure message, preserved for display; the cascade itself
    /// does not retry.
    pub error: String,
}

/// Result of one cascade run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameOutcome {
    /// Notes whose rewrite was persisted.
    pub renamed: Vec<Uuid>,
    /// Notes whose rewrite failed; retry by re-running the cascade.
    pub failed: Vec<RenameFailure>,
}

impl RenameOutcome {
    /// True when every intended update was persisted.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl LinkEngine {
    /// Cascade a title rename across all referencing notes.
    ///
    /// Affected notes are those whose `outgoing_links` contains `old_title`
    /// exactly. Each gets its `content` rewritten by literal substring
    /// replacement of the `[[old_title]]` and `[[old_title|` forms, and
    /// every `outgoing_links` entry equal to `old_title` replaced.
    /// Whitespace variants inside the brackets (`[[ old_title ]]`) are left
    /// untouched.
    ///
    /// A failed initial fetch is a wrapped store error. Per-note write
    /// failures do not abort the remaining writes; they are collected in
    /// the returned [`RenameOutcome`].
    pub async fn update_links_on_rename(
        &self,
        old_title: &str,
        new_title: &str,
    ) -> Result<RenameOutcome> {
        let notes = self
            .store()
            .get_all_notes()
            .await
            .map_err(|e| Error::store("update_links_on_rename", e))?;

        // Compute the full set of intended updates before touching the store.
        let updates: Vec<Note> = notes
            .into_iter()
            .filter(|note| note.outgoing_links.iter().any(|t| t == old_title))
            .map(|note| rewrite_links(note, old_title, new_title))
            .collect();

        let mut outcome = RenameOutcome::default();
        for note in &updates {
            match self.store().update_note(note.id, note).await {
                Ok(()) => outcome.renamed.push(note.id),
                Err(e) => {
                    warn!(
                        op = "update_links_on_rename",
                        note_id = %note.id,
                        error = %e,
                        "per-note rename update failed; continuing with remaining notes"
                    );
                    outcome.failed.push(RenameFailure {
                        note_id: note.id,
                        error: e.to_string(),
                    });
                }
            }
        }

        debug!(
            op = "update_links_on_rename",
            old_title,
            new_title,
            renamed_count = outcome.renamed.len(),
            failed_count = outcome.failed.len(),
            "rename cascade finished"
        );
        Ok(outcome)
    }
}

/// Rewrite one note's content and structured link list for a rename.
fn rewrite_links(mut note: Note, old_title: &str, new_title: &str) -> Note {
    let old_closed = format!("[[{old_title}]]");
    let new_closed = format!("[[{new_title}]]");
    let old_piped = format!("[[{old_title}|");
    let new_piped = format!("[[{new_title}|");

    note.content = note
        .content
        .replace(&old_closed, &new_closed)
        .replace(&old_piped, &new_piped);

    for target in note.outgoing_links.iter_mut() {
        if target == old_title {
            *target = new_title.to_string();
        }
    }
    note
}
