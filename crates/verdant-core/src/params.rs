//! Parameter structures for Verdant operations
//!
//! These structures form the presentation-facing contract of the coordinator
//! and carry no framework-specific derives, so interface layers (the CLI, or
//! any future surface) can wrap them with their own argument types and
//! convert via `From`/`Into`.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A user-authored draft of a plant care reminder.
///
/// Drafts carry the raw user input; trimming and validation happen inside
/// [`Coordinator::create`](crate::coordinator::Coordinator::create). The
/// scheduled instant must be strictly in the future by at least the minimum
/// lead time at creation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDraft {
    /// Title of the reminder (required, trimmed on create)
    pub title: String,
    /// Name of the plant (required, trimmed on create)
    pub plant: String,
    /// Optional free-form notes
    pub description: Option<String>,
    /// Absolute instant the reminder should fire
    pub scheduled_at: Timestamp,
}
