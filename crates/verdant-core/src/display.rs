//! Display wrappers for presenting events outside the core.
//!
//! Domain models stay presentation-free; this module provides the `Display`
//! implementations and contextual wrappers the CLI renders. The same event
//! can be formatted as a compact listing line (within [`EventListing`]) or
//! with full details (standalone `Display`).

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::models::{PlantEvent, SideEffect, SkipReason};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::PermissionDenied => "permission denied",
            Self::AdapterFailure => "adapter failure",
            Self::TimedOut => "timed out",
            Self::CalendarUnavailable => "calendar unavailable",
        };
        write!(f, "{reason}")
    }
}

impl fmt::Display for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduled { reference } => write!(f, "scheduled ({reference})"),
            Self::Skipped { reason } => write!(f, "skipped: {reason}"),
        }
    }
}

impl fmt::Display for PlantEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.title, self.plant)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- When: {}", LocalDateTime(&self.scheduled_at))?;
        if !self.description.is_empty() {
            writeln!(f, "- Notes: {}", self.description)?;
        }
        writeln!(f, "- Notification: {}", self.notification)?;
        write!(f, "- Calendar entry: {}", self.calendar_entry)
    }
}

/// Wrapper type for displaying a list of events as compact lines.
pub struct EventListing(pub Vec<PlantEvent>);

impl fmt::Display for EventListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No watering reminders scheduled.");
        }

        writeln!(f, "# Watering Reminders")?;
        writeln!(f)?;
        for event in &self.0 {
            let badges = match (
                event.notification.is_scheduled(),
                event.calendar_entry.is_scheduled(),
            ) {
                (true, true) => String::new(),
                (notification, calendar) => {
                    let mut missing = Vec::new();
                    if !notification {
                        missing.push("no notification");
                    }
                    if !calendar {
                        missing.push("no calendar entry");
                    }
                    format!(" [{}]", missing.join(", "))
                }
            };
            writeln!(
                f,
                "- {} — {} ({}){}  `{}`",
                LocalDateTime(&event.scheduled_at),
                event.title,
                event.plant,
                badges,
                event.id,
            )?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying the result of a create operation.
pub struct CreateResult {
    pub event: PlantEvent,
}

impl CreateResult {
    /// Create a new CreateResult wrapper.
    pub fn new(event: PlantEvent) -> Self {
        Self { event }
    }
}

impl fmt::Display for CreateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created reminder with ID: {}", self.event.id)?;
        writeln!(f)?;
        write!(f, "{}", self.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SideEffect, SkipReason};

    fn test_event() -> PlantEvent {
        PlantEvent {
            id: "id-1".to_string(),
            title: "Water".to_string(),
            plant: "Fern".to_string(),
            description: "bottom shelf".to_string(),
            scheduled_at: Timestamp::from_second(1_750_000_000).expect("valid instant"),
            notification: SideEffect::Scheduled {
                reference: "n-1".to_string(),
            },
            calendar_entry: SideEffect::Skipped {
                reason: SkipReason::PermissionDenied,
            },
        }
    }

    #[test]
    fn event_display_includes_references_and_reasons() {
        let output = test_event().to_string();
        assert!(output.contains("# Water (Fern)"));
        assert!(output.contains("- ID: id-1"));
        assert!(output.contains("- Notes: bottom shelf"));
        assert!(output.contains("- Notification: scheduled (n-1)"));
        assert!(output.contains("- Calendar entry: skipped: permission denied"));
    }

    #[test]
    fn empty_listing_has_a_friendly_message() {
        assert_eq!(
            EventListing(Vec::new()).to_string(),
            "No watering reminders scheduled."
        );
    }

    #[test]
    fn listing_flags_missing_side_effects() {
        let output = EventListing(vec![test_event()]).to_string();
        assert!(output.contains("# Watering Reminders"));
        assert!(output.contains("[no calendar entry]"));
        assert!(output.contains("`id-1`"));
    }

    #[test]
    fn create_result_announces_the_id() {
        let output = CreateResult::new(test_event()).to_string();
        assert!(output.starts_with("Created reminder with ID: id-1"));
    }
}
