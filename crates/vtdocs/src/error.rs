//! Error types for vtdocs.
//!
//! This module defines the crate-wide error type. Clipboard failures have
//! their own enum in [`crate::clipboard`] and convert into [`Error`].

use std::path::PathBuf;
use thiserror::Error;

use crate::clipboard::ClipboardError;

/// The main error type for vtdocs operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Widget Errors ===
    /// A tab group was constructed without any examples.
    #[error("tab group must contain at least one code example")]
    EmptyTabGroup,

    /// A tab index outside the group was selected.
    #[error("tab index {index} out of range for a group of {len}")]
    TabOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of tabs in the group.
        len: usize,
    },

    /// No tab carries the requested label.
    #[error("no tab labelled '{0}'")]
    UnknownTab(String),

    /// Copying a code sample to the clipboard failed.
    #[error("copy failed: {0}")]
    Clipboard(#[from] ClipboardError),

    // === Site Errors ===
    /// No page is registered for the path.
    #[error("no page for path '{0}'")]
    UnknownRoute(String),

    /// A page has no code group at the requested position.
    #[error("page '{path}' has no code group #{group}")]
    UnknownCodeGroup {
        /// Path of the page.
        path: String,
        /// The requested group number.
        group: usize,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a rendered page.
    #[error("failed to write {path}: {source}")]
    PageWrite {
        /// Destination file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for vtdocs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create an unknown route error.
    #[must_use]
    pub fn unknown_route(path: impl Into<String>) -> Self {
        Self::UnknownRoute(path.into())
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from the clipboard.
    #[must_use]
    pub fn is_clipboard_error(&self) -> bool {
        matches!(self, Self::Clipboard(_))
    }

    /// Check if this error is a user addressing mistake (bad path, tab or group).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownRoute(_)
                | Self::UnknownTab(_)
                | Self::UnknownCodeGroup { .. }
                | Self::TabOutOfRange { .. }
        )
    }
}
