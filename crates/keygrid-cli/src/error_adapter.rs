//! Error adapter for converting KeygridError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use keygrid::{KeygridError, ParseError};

/// Adapter that renders a [`KeygridError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a KeygridError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            KeygridError::Io(_) | KeygridError::Parse(ParseError::Io(_)) => "keygrid::io",
            KeygridError::Parse(ParseError::NotFound) => "keygrid::not_found",
            KeygridError::Config(_) => "keygrid::config",
            KeygridError::Export(_) => "keygrid::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.0.is_not_found() {
            return Some(Box::new(
                "keymaps are read from comment blocks opened with `/* <title>` and closed \
                 with `*/`, drawn with ─│┌┐└┘├┤┴┬┼",
            ));
        }
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
