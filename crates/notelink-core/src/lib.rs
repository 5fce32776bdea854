//! # notelink-core
//!
//! Core types, traits, and abstractions for the notelink engine.
//!
//! This crate provides the foundational data structures and trait
//! definitions that the engine crate depends on: the [`Note`] domain model,
//! the [`NoteStore`] collaborator contract, the error taxonomy, and shared
//! default constants.

pub mod defaults;
pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result, StoreError};
pub use models::Note;
pub use traits::{NoteStore, StoreResult};
