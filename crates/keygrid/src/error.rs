//! Error types for Keygrid operations.
//!
//! This module provides the main error type [`KeygridError`] which wraps
//! the error conditions that can occur while reading, parsing and rendering
//! keyboard diagrams.

use std::io;

use thiserror::Error;

use keygrid_parser::ParseError;

/// The main error type for Keygrid operations.
#[derive(Debug, Error)]
pub enum KeygridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for KeygridError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl KeygridError {
    /// Returns `true` if the source parsed cleanly but contained no keymap.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Parse(err) if err.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_detected() {
        let err = KeygridError::from(ParseError::NotFound);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), ParseError::NotFound.to_string());
    }

    #[test]
    fn test_export_error_is_boxed() {
        let err = KeygridError::from(crate::export::Error::Render("no keys".to_string()));
        assert!(matches!(err, KeygridError::Export(_)));
        assert_eq!(err.to_string(), "Export error: Render error: no keys");
    }

    #[test]
    fn test_config_message() {
        let err = KeygridError::Config("`source.h_scale` must be greater than zero".to_string());
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
