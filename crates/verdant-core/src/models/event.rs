//! Plant event model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::SideEffect;

/// A single scheduled watering/care reminder with its external-system
/// references.
///
/// Events are created only through
/// [`Coordinator::create`](crate::coordinator::Coordinator::create), are
/// never mutated, and are destroyed only through
/// [`Coordinator::remove`](crate::coordinator::Coordinator::remove).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantEvent {
    /// Opaque unique identifier, immutable once created
    pub id: String,

    /// Title of the reminder (trimmed, non-empty)
    pub title: String,

    /// Name of the plant the reminder is for (trimmed, non-empty)
    pub plant: String,

    /// Free-form notes, possibly empty
    #[serde(default)]
    pub description: String,

    /// Absolute instant the reminder fires (UTC, ISO-8601 on the wire)
    pub scheduled_at: Timestamp,

    /// Outcome of the one-shot notification scheduling request
    pub notification: SideEffect,

    /// Outcome of the calendar entry creation request
    pub calendar_entry: SideEffect,
}

impl PlantEvent {
    /// Returns the scheduled notification identifier, if one exists.
    pub fn notification_reference(&self) -> Option<&str> {
        self.notification.reference()
    }

    /// Returns the calendar entry identifier, if one exists.
    pub fn calendar_reference(&self) -> Option<&str> {
        self.calendar_entry.reference()
    }
}

/// Re-establishes the ascending `scheduled_at` ordering of an event list.
///
/// The sort is stable: events with equal instants keep their original
/// relative order.
pub fn sort_by_schedule(events: &mut [PlantEvent]) {
    events.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
}
