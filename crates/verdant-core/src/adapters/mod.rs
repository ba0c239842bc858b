//! External-system adapter contracts and shipped implementations.
//!
//! The coordinator fans out to two independent, fallible device-side
//! collaborators: a one-shot notification scheduler and a calendar store.
//! Both are narrow async traits so hosts can plug in platform backends and
//! tests can inject faults.
//!
//! The implementations shipped here ([`SpoolScheduler`] and
//! [`FileCalendar`]) back both contracts with local JSON files, which is
//! what the CLI uses. They honor the full contract semantics: idempotent
//! teardown that swallows "not found", and name-based calendar reuse before
//! creation.

use async_trait::async_trait;
use jiff::Timestamp;

use crate::error::AdapterError;

pub mod local_calendar;
pub mod spool;

pub use local_calendar::FileCalendar;
pub use spool::SpoolScheduler;

/// A timed calendar entry to be created in the dedicated calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    /// Entry title as shown in the calendar
    pub title: String,
    /// Free-form notes attached to the entry
    pub notes: String,
    /// Start of the entry
    pub start: Timestamp,
    /// End of the entry
    pub end: Timestamp,
}

/// One-shot local notification scheduling.
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Acquires the notification permission. Idempotent; a denied prompt
    /// returns [`AdapterError::PermissionDenied`] rather than panicking, and
    /// later `schedule` calls must keep failing the same way instead of
    /// raising.
    async fn request_permission(&self) -> Result<(), AdapterError>;

    /// Schedules a one-shot notification for a future instant and returns
    /// its opaque identifier.
    async fn schedule(&self, at: Timestamp, body: &str) -> Result<String, AdapterError>;

    /// Cancels a previously scheduled notification. Idempotent; an unknown
    /// identifier is success.
    async fn cancel(&self, reference: &str) -> Result<(), AdapterError>;
}

/// Device calendar access scoped to this application's dedicated calendar.
#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Returns the identifier of the calendar with the given name, creating
    /// it if it does not exist yet. Idempotent by name lookup.
    async fn ensure_calendar(&self, name: &str) -> Result<String, AdapterError>;

    /// Creates a timed entry in the given calendar and returns its opaque
    /// identifier.
    async fn create_entry(
        &self,
        calendar_id: &str,
        entry: CalendarEntry,
    ) -> Result<String, AdapterError>;

    /// Deletes an entry. Idempotent; an unknown identifier is success.
    async fn delete_entry(&self, reference: &str) -> Result<(), AdapterError>;
}
