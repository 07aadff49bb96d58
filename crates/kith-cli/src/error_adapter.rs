//! Error adapter for converting KithError to miette diagnostics.
//!
//! None of the library errors carry source spans (the input is a JSON
//! document, not a DSL), so the adapter only supplies an error code per
//! variant and lets miette handle the formatting.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use kith::KithError;

/// Adapter wrapping a [`KithError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a KithError);

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
            KithError::Io(_) => "kith::io",
            KithError::Data(_) => "kith::data",
            KithError::Export(_) => "kith::export",
            KithError::Server(_) => "kith::server",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            KithError::Data(_) => Some(Box::new(
                "the people document must be a JSON array of person objects",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
