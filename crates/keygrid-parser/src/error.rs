//! Error type for keymap parsing.
//!
//! Structural problems in a diagram are never errors: malformed rectangles
//! and unterminated blocks are skipped. Only two conditions reach the caller.

use std::io;

use thiserror::Error;

/// Error returned by [`parse_keymaps`](crate::parse_keymaps).
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying line source failed; parsing stopped at that point.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The whole input produced no keymap with at least one key.
    #[error("no keymap found")]
    NotFound,
}

impl ParseError {
    /// Returns `true` for [`ParseError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, ParseError::NotFound)
    }
}
