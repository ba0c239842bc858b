//! Side-effect outcome tracking for external-system references.

use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

/// Outcome of one best-effort external side effect (notification scheduling
/// or calendar entry creation).
///
/// Modeled as a tagged outcome rather than a nullable reference so that an
/// absent reference always carries the reason it is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SideEffect {
    /// The adapter accepted the request and returned an identifier
    Scheduled { reference: String },
    /// The request was not attempted or failed; the reason is retained
    Skipped { reason: SkipReason },
}

/// Why a side effect ended up without an external reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The platform permission backing the adapter was not granted
    PermissionDenied,
    /// The adapter reported a failure
    AdapterFailure,
    /// The adapter call exceeded the bounded per-call timeout
    TimedOut,
    /// No dedicated calendar could be resolved, so no entry was requested
    CalendarUnavailable,
}

impl SideEffect {
    /// Wraps an adapter result, logging nothing; the caller owns diagnostics.
    pub fn from_outcome(outcome: Result<String, AdapterError>) -> Self {
        match outcome {
            Ok(reference) => Self::Scheduled { reference },
            Err(err) => Self::Skipped {
                reason: SkipReason::from(&err),
            },
        }
    }

    /// Returns the external identifier, if the adapter accepted the request.
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::Scheduled { reference } => Some(reference),
            Self::Skipped { .. } => None,
        }
    }

    /// Returns true if the adapter accepted the request.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled { .. })
    }
}

impl From<&AdapterError> for SkipReason {
    fn from(err: &AdapterError) -> Self {
        match err {
            AdapterError::PermissionDenied(_) => Self::PermissionDenied,
            AdapterError::Failed(_) | AdapterError::Io(_) => Self::AdapterFailure,
        }
    }
}
