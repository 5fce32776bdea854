//! Core data models for notelink.
//!
//! These types are shared between the store collaborator and the engine and
//! represent the core domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A note in the user's collection.
///
/// Owned by the [`NoteStore`](crate::traits::NoteStore); the engine only
/// reads notes and, during a rename cascade, writes rewritten copies back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    /// Display key for the note. Intended to be unique, but uniqueness is
    /// not enforced anywhere in this engine; lookups under duplicate titles
    /// resolve to the first match.
    pub title: String,
    /// Raw note text, including in-text `[[Title]]` references.
    pub content: String,
    /// Ordered target titles of this note's wiki-links. Maintained by the
    /// caller after parsing on edit; the engine never re-parses `content`
    /// to infer it.
    pub outgoing_links: Vec<String>,
    pub tags: Vec<String>,
    pub created_at_utc: DateTime<Utc>,
    pub updated_at_utc: DateTime<Utc>,
}

impl Note {
    /// Construct a note with a fresh id and current timestamps.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            outgoing_links: Vec::new(),
            tags: Vec::new(),
            created_at_utc: now,
            updated_at_utc: now,
        }
    }

    /// Builder-style setter for `outgoing_links`.
    pub fn with_outgoing_links(mut self, links: Vec<String>) -> Self {
        self.outgoing_links = links;
        self
    }

    /// Builder-style setter for `tags`.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
