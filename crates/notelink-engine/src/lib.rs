//! # notelink-engine
//!
//! The note-linking / knowledge-graph engine: parses wiki-style `[[Title]]`
//! references embedded in free-text notes, answers backlink queries,
//! cascades title renames across referencing notes, derives a
//! visualization-ready graph on demand, and ranks title autocompletions.
//!
//! The engine is an in-process library layered over an injected
//! [`NoteStore`](notelink_core::NoteStore). It holds no mutable state of its
//! own: every operation performs one bulk read (the rename cascade adds N
//! sequential writes) and then synchronous in-memory computation. Nothing is
//! cached — "current" always means "as of the last full fetch".
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Recoverable issue, degraded-to-empty fallback or skipped write |
//! | DEBUG | Operation completions with result counts |
//! | TRACE | Per-note iteration detail |

pub mod backlinks;
pub mod engine;
pub mod graph;
pub mod mock;
pub mod parser;
pub mod rename;
pub mod suggest;

// Re-export commonly used types at crate root
pub use engine::LinkEngine;
pub use graph::{GraphEdge, GraphNode, NoteGraph};
pub use parser::{parse_links, resolve_occurrences, LinkOccurrence};
pub use rename::{RenameFailure, RenameOutcome};
