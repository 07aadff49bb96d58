//! Error types for Kith operations.
//!
//! This module provides the main error type [`KithError`] which wraps the
//! error conditions that can occur outside the layout computation itself.
//! The layout engine is total over its input by design: malformed or
//! dangling data degrades to an empty or partial picture, never an error.

use std::io;

use thiserror::Error;

/// The main error type for Kith operations.
#[derive(Debug, Error)]
pub enum KithError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid people document: {0}")]
    Data(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),

    #[error("Server error: {0}")]
    Server(String),
}
