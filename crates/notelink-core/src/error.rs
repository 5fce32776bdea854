//! Error types for the notelink engine.

use thiserror::Error;

/// Result type alias using notelink's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure surfaced by a [`NoteStore`](crate::traits::NoteStore)
/// implementation.
///
/// The engine never inspects the variant; it only decides at its own
/// boundary whether to wrap the failure with the operation name or degrade
/// to an empty result.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend unreachable (network, DNS, timeout).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Authentication/authorization failed at the store.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The store rejected the record (schema or constraint violation).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other store-side failure.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Core error type for notelink operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A store call failed inside an engine operation. Carries the name of
    /// the engine operation that was running so callers can tell which
    /// feature degraded.
    #[error("{operation} failed: {source}")]
    Store {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    /// A note referenced by title does not exist.
    #[error("Note not found: {0}")]
    NoteNotFound(String),
}

impl Error {
    /// Wrap a store failure with the engine operation it occurred in.
    pub fn store(operation: &'static str, source: StoreError) -> Self {
        Error::Store { operation, source }
    }

    /// The engine operation a wrapped store failure occurred in, if any.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::Store { operation, .. } => Some(operation),
            _ => None,
        }
    }
}
