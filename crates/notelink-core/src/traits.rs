//! Core traits for notelink abstractions.
//!
//! These traits define the interfaces that concrete implementations must
//! satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::Note;

/// Result type for store-level operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The note collection the engine operates over.
///
/// The engine is injected with a `NoteStore` at construction time and holds
/// no other state: every operation re-derives its view from a fresh
/// `get_all_notes` fetch, so two concurrent callers may observe different
/// snapshots. Cancellation, timeouts, and retry policy belong to the store
/// implementation or the caller, never to the engine.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Fetch the full note collection.
    async fn get_all_notes(&self) -> StoreResult<Vec<Note>>;

    /// Fetch a note by exact title, or `None` if no note matches. Under
    /// duplicate titles the store returns its first match.
    async fn get_note_by_title(&self, title: &str) -> StoreResult<Option<Note>>;

    /// Replace the stored note with the given id.
    async fn update_note(&self, id: Uuid, note: &Note) -> StoreResult<()>;

    /// Persist a new note, returning its assigned id.
    async fn create_note(&self, note: Note) -> StoreResult<Uuid>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    /// Minimal store proving the trait is object-safe and implementable
    /// without interior state.
    struct EmptyStore;

    #[async_trait]
    impl NoteStore for EmptyStore {
        async fn get_all_notes(&self) -> StoreResult<Vec<Note>> {
            Ok(Vec::new())
        }

        async fn get_note_by_title(&self, _title: &str) -> StoreResult<Option<Note>> {
            Ok(None)
        }

        async fn update_note(&self, id: Uuid, _note: &Note) -> StoreResult<()> {
            Err(StoreError::Validation(format!("no note with id {id}")))
        }

        async fn create_note(&self, note: Note) -> StoreResult<Uuid> {
            Ok(note.id)
        }
    }

    #[tokio::test]
    async fn test_trait_usable_as_trait_object() {
        let store: Box<dyn NoteStore> = Box::new(EmptyStore);

        assert!(store.get_all_notes().await.unwrap().is_empty());
        assert!(store.get_note_by_title("A").await.unwrap().is_none());

        let note = Note::new("A", "");
        let err = store.update_note(note.id, &note).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.create_note(note.clone()).await.unwrap(), note.id);
    }
}
