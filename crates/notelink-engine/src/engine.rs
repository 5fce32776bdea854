//! The engine facade over an injected [`NoteStore`].

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use notelink_core::{Error, Note, NoteStore, Result};

use crate::parser::{resolve_occurrences, LinkOccurrence};

/// Note-linking engine.
///
/// Constructed with an explicit store reference — no ambient global state —
/// so unit tests can run against an in-memory fake. Cloning is cheap and
/// shares the same store.
#[derive(Clone)]
pub struct LinkEngine {
    store: Arc<dyn NoteStore>,
}

impl LinkEngine {
    /// Create an engine over the given store.
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &dyn NoteStore {
        self.store.as_ref()
    }

    /// Fetch a note by exact title.
    ///
    /// Store failures are wrapped with the operation name.
    pub async fn get_note_by_title(&self, title: &str) -> Result<Option<Note>> {
        self.store
            .get_note_by_title(title)
            .await
            .map_err(|e| Error::store("get_note_by_title", e))
    }

    /// Mark parsed occurrences against the live title index.
    ///
    /// One full fetch, then exact-match resolution in memory. Parsing stays
    /// synchronous; this is the batchable half.
    pub async fn resolve_links(&self, occurrences: &mut [LinkOccurrence]) -> Result<()> {
        let notes = self
            .store
            .get_all_notes()
            .await
            .map_err(|e| Error::store("resolve_links", e))?;

        let known_titles: HashSet<String> = notes.into_iter().map(|n| n.title).collect();
        resolve_occurrences(occurrences, &known_titles);

        debug!(
            op = "resolve_links",
            occurrence_count = occurrences.len(),
            resolved_count = occurrences.iter().filter(|o| o.exists).count(),
            "resolved link occurrences"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockNoteStore;
    use crate::parser::parse_links;

    #[tokio::test]
    async fn test_get_note_by_title_passes_through() {
        let store = MockNoteStore::new().with_note(Note::new("A", "body"));
        let engine = LinkEngine::new(Arc::new(store));

        let found = engine.get_note_by_title("A").await.unwrap();
        assert_eq!(found.unwrap().title, "A");

        let missing = engine.get_note_by_title("B").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_get_note_by_title_wraps_store_failure() {
        let store = MockNoteStore::new().fail_get_note_by_title();
        let engine = LinkEngine::new(Arc::new(store));

        let err = engine.get_note_by_title("A").await.unwrap_err();
        assert_eq!(err.operation(), Some("get_note_by_title"));
    }

    #[tokio::test]
    async fn test_resolve_links_marks_existing_titles() {
        let store = MockNoteStore::new().with_note(Note::new("Project Plan", ""));
        let engine = LinkEngine::new(Arc::new(store));

        let mut occurrences = parse_links("[[Project Plan]] and [[Ghost]]");
        engine.resolve_links(&mut occurrences).await.unwrap();

        assert!(occurrences[0].exists);
        assert!(!occurrences[1].exists);
    }

    #[tokio::test]
    async fn test_resolve_links_wraps_store_failure() {
        let store = MockNoteStore::new().fail_get_all_notes();
        let engine = LinkEngine::new(Arc::new(store));

        let mut occurrences = parse_links("[[A]]");
        let err = engine.resolve_links(&mut occurrences).await.unwrap_err();
        assert_eq!(err.operation(), Some("resolve_links"));
        assert!(!occurrences[0].exists);
    }
}
