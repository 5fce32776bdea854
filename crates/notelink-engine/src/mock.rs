//! Mock note store for deterministic testing.
//!
//! Provides an in-memory [`NoteStore`] double with a call log and
//! per-method failure injection, so engine behavior — including
//! no-fetch-on-empty-input guarantees and partial rename failures — can be
//! asserted without a live backend.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use notelink_core::Note;
//! use notelink_engine::{mock::MockNoteStore, LinkEngine};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = MockNoteStore::new().with_note(Note::new("A", "see [[B]]"));
//! let engine = LinkEngine::new(Arc::new(store.clone()));
//!
//! engine.get_backlinks("B").await.unwrap();
//! assert_eq!(store.call_count("get_all_notes"), 1);
//! # }
//! ```

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use notelink_core::{Note, NoteStore, StoreError, StoreResult};

/// One recorded store invocation.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub operation: &'static str,
}

#[derive(Default)]
struct MockState {
    notes: Vec<Note>,
    calls: Vec<MockCall>,
    fail_get_all_notes: bool,
    fail_get_note_by_title: bool,
    fail_update_ids: HashSet<Uuid>,
}

/// In-memory note store double.
///
/// Clones share state, so a test can hand one clone to the engine and keep
/// another for assertions.
#[derive(Clone, Default)]
pub struct MockNoteStore {
    state: Arc<Mutex<MockState>>,
}

impl MockNoteStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a note (builder style).
    pub fn with_note(self, note: Note) -> Self {
        self.lock().notes.push(note);
        self
    }

    /// Make `get_all_notes` fail with a connection error.
    pub fn fail_get_all_notes(self) -> Self {
        self.lock().fail_get_all_notes = true;
        self
    }

    /// Make `get_note_by_title` fail with a connection error.
    pub fn fail_get_note_by_title(self) -> Self {
        self.lock().fail_get_note_by_title = true;
        self
    }

    /// Make `update_note` fail for the given note id.
    pub fn fail_update_of(self, id: Uuid) -> Self {
        self.lock().fail_update_ids.insert(id);
        self
    }

    /// Remove all injected failures.
    pub fn clear_failures(&self) {
        let mut state = self.lock();
        state.fail_get_all_notes = false;
        state.fail_get_note_by_title = false;
        state.fail_update_ids.clear();
    }

    /// Number of recorded calls to the named operation.
    pub fn call_count(&self, operation: &str) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    /// Snapshot of a stored note.
    pub fn note_by_id(&self, id: Uuid) -> Option<Note> {
        self.lock().notes.iter().find(|n| n.id == id).cloned()
    }

    /// Snapshot of all stored notes.
    pub fn notes(&self) -> Vec<Note> {
        self.lock().notes.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state lock poisoned")
    }

    fn record(&self, operation: &'static str) {
        self.lock().calls.push(MockCall { operation });
    }
}

#[async_trait]
impl NoteStore for MockNoteStore {
    async fn get_all_notes(&self) -> StoreResult<Vec<Note>> {
        self.record("get_all_notes");
        let state = self.lock();
        if state.fail_get_all_notes {
            return Err(StoreError::Connection("injected failure".to_string()));
        }
        Ok(state.notes.clone())
    }

    async fn get_note_by_title(&self, title: &str) -> StoreResult<Option<Note>> {
        self.record("get_note_by_title");
        let state = self.lock();
        if state.fail_get_note_by_title {
            return Err(StoreError::Connection("injected failure".to_string()));
        }
        Ok(state.notes.iter().find(|n| n.title == title).cloned())
    }

    async fn update_note(&self, id: Uuid, note: &Note) -> StoreResult<()> {
        self.record("update_note");
        let mut state = self.lock();
        if state.fail_update_ids.contains(&id) {
            return Err(StoreError::Backend("injected failure".to_string()));
        }
        match state.notes.iter_mut().find(|n| n.id == id) {
            Some(stored) => {
                *stored = note.clone();
                stored.updated_at_utc = Utc::now();
                Ok(())
            }
            None => Err(StoreError::Validation(format!("no note with id {id}"))),
        }
    }

    async fn create_note(&self, mut note: Note) -> StoreResult<Uuid> {
        self.record("create_note");
        let mut state = self.lock();
        note.id = Uuid::new_v4();
        let id = note.id;
        state.notes.push(note);
        Ok(id)
    }
}
