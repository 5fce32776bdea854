//! Centralized default constants for notelink.
//!
//! **This module is the single source of truth** for shared default values.
//! Both crates reference these constants instead of defining their own magic
//! numbers. When adding new constants, document the rationale for the chosen
//! value.

// =============================================================================
// SUGGESTIONS
// =============================================================================

/// Maximum number of title suggestions returned by autocomplete.
///
/// Ten entries fit a dropdown without scrolling; anything past the first
/// screen of an autocomplete list is effectively invisible to the user.
pub const MAX_TITLE_SUGGESTIONS: usize = 10;
