//! Error types for the coordinator library.

use std::path::PathBuf;

use jiff::{SignedDuration, Timestamp};
use thiserror::Error;

/// Comprehensive error type for all coordinator operations.
///
/// Validation variants are caller-correctable and are surfaced before any
/// side effect is attempted. [`Persistence`](CoordinatorError::Persistence)
/// is fatal to the enclosing create/remove operation; the in-memory list
/// stays at its last durably flushed state. Adapter failures never appear
/// here: they degrade the corresponding side effect to
/// [`SideEffect::Skipped`](crate::models::SideEffect::Skipped) and are only
/// logged.
#[derive(Error, Debug)]
pub enum CoordinatorError {
    /// A required text field was empty after trimming whitespace
    #[error("Required field '{field}' must not be empty")]
    MissingField { field: &'static str },
    /// The scheduled instant is in the past or inside the minimum lead time
    #[error("Scheduled time {scheduled_at} must be at least {lead_time:#} in the future")]
    PastOrTooSoon {
        scheduled_at: Timestamp,
        lead_time: SignedDuration,
    },
    /// Saving the event list failed; the operation did not take effect
    #[error("Could not save the event list: {message}")]
    Persistence { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

impl CoordinatorError {
    /// Creates a persistence error with a message.
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Returns true if this error means the event list could not be flushed.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }
}

/// Failure of a single external-adapter call.
///
/// These errors stay inside the adapter boundary: the coordinator converts
/// them to a [`SkipReason`](crate::models::SkipReason) on create and swallows
/// them entirely on teardown.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The platform permission backing this adapter was not granted
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    /// The adapter accepted the request but could not complete it
    #[error("{0}")]
    Failed(String),
    /// An I/O fault while talking to the adapter's backing store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for coordinator operations
pub type Result<T> = std::result::Result<T, CoordinatorError>;
