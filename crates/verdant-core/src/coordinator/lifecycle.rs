//! Create and remove operations for the Coordinator.

use jiff::Timestamp;
use log::warn;
use uuid::Uuid;

use super::{Coordinator, CALENDAR_NAME, ENTRY_DURATION, MIN_LEAD_TIME};
use crate::{
    adapters::CalendarEntry,
    error::{CoordinatorError, Result},
    models::{sort_by_schedule, PlantEvent, SideEffect, SkipReason},
    params::EventDraft,
};

/// A draft that passed validation, with trimmed text fields.
struct ValidatedDraft {
    title: String,
    plant: String,
    description: String,
    scheduled_at: Timestamp,
}

impl ValidatedDraft {
    /// Notification body: `"{title} • {plant}"`, with the description
    /// appended when present.
    fn notification_body(&self) -> String {
        let mut body = format!("{} • {}", self.title, self.plant);
        if !self.description.is_empty() {
            body.push_str(" — ");
            body.push_str(&self.description);
        }
        body
    }

    /// Calendar entry title: `"{title} ({plant})"`.
    fn calendar_title(&self) -> String {
        format!("{} ({})", self.title, self.plant)
    }
}

/// Validates a draft, short-circuiting on the first failure.
fn validate(draft: &EventDraft, now: Timestamp) -> Result<ValidatedDraft> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(CoordinatorError::MissingField { field: "title" });
    }
    let plant = draft.plant.trim();
    if plant.is_empty() {
        return Err(CoordinatorError::MissingField { field: "plant" });
    }
    if draft.scheduled_at
        < now
            .saturating_add(MIN_LEAD_TIME)
            .expect("absolute-duration arithmetic is infallible")
    {
        return Err(CoordinatorError::PastOrTooSoon {
            scheduled_at: draft.scheduled_at,
            lead_time: MIN_LEAD_TIME,
        });
    }

    Ok(ValidatedDraft {
        title: title.to_string(),
        plant: plant.to_string(),
        description: draft
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        scheduled_at: draft.scheduled_at,
    })
}

impl Coordinator {
    /// Creates a new reminder from a user-authored draft.
    ///
    /// Validates the draft, requests the notification and the calendar entry
    /// concurrently, and persists the new event with whichever references
    /// succeeded. Neither side effect is rolled back if the other fails:
    /// there is no external system that could apply both atomically, so
    /// partial success degrades the record instead of blocking creation.
    ///
    /// # Errors
    ///
    /// Returns `CoordinatorError::MissingField` or
    /// `CoordinatorError::PastOrTooSoon` for invalid drafts (no side effects
    /// are attempted), and `CoordinatorError::Persistence` when the updated
    /// list cannot be flushed; in that case the in-memory list keeps its
    /// previous contents and no partial record is visible to callers.
    pub async fn create(&self, draft: &EventDraft) -> Result<PlantEvent> {
        self.initialize().await;
        let mut state = self.state.lock().await;

        let validated = validate(draft, Timestamp::now())?;

        // Re-resolve the dedicated calendar if initialization could not.
        if state.calendar_id.is_none() {
            match self.bounded(self.calendar.ensure_calendar(CALENDAR_NAME)).await {
                Ok(id) => state.calendar_id = Some(id),
                Err(err) => warn!("Could not resolve calendar '{CALENDAR_NAME}': {err}"),
            }
        }

        let body = validated.notification_body();
        let notification_request =
            self.bounded(self.scheduler.schedule(validated.scheduled_at, &body));
        let calendar_request = async {
            match state.calendar_id.as_deref() {
                Some(calendar_id) => self
                    .bounded(self.calendar.create_entry(
                        calendar_id,
                        CalendarEntry {
                            title: validated.calendar_title(),
                            notes: validated.description.clone(),
                            start: validated.scheduled_at,
                            end: validated
                                .scheduled_at
                                .saturating_add(ENTRY_DURATION)
                                .expect("absolute-duration arithmetic is infallible"),
                        },
                    ))
                    .await
                    .map(Some),
                None => Ok(None),
            }
        };

        // Both requests are independent; issue them concurrently and wait
        // for both to settle before composing the event.
        let (notification_outcome, calendar_outcome) =
            tokio::join!(notification_request, calendar_request);

        let notification = match notification_outcome {
            Ok(reference) => SideEffect::Scheduled { reference },
            Err(err) => {
                warn!("Notification scheduling failed: {err}");
                SideEffect::Skipped {
                    reason: err.skip_reason(),
                }
            }
        };
        let calendar_entry = match calendar_outcome {
            Ok(Some(reference)) => SideEffect::Scheduled { reference },
            Ok(None) => SideEffect::Skipped {
                reason: SkipReason::CalendarUnavailable,
            },
            Err(err) => {
                warn!("Calendar entry creation failed: {err}");
                SideEffect::Skipped {
                    reason: err.skip_reason(),
                }
            }
        };

        let event = PlantEvent {
            id: Uuid::new_v4().to_string(),
            title: validated.title,
            plant: validated.plant,
            description: validated.description,
            scheduled_at: validated.scheduled_at,
            notification,
            calendar_entry,
        };

        // Persist a candidate list first; the in-memory list only moves
        // forward once the flush succeeded.
        let mut candidate = state.events.clone();
        candidate.push(event.clone());
        sort_by_schedule(&mut candidate);
        self.store.save(&candidate).await?;
        state.events = candidate;

        Ok(event)
    }

    /// Removes a reminder by identifier, tearing down both of its external
    /// references.
    ///
    /// Teardown is best-effort: a notification that cannot be cancelled or a
    /// calendar entry that cannot be deleted is logged and otherwise
    /// ignored, so the user can always remove the record itself. Removing an
    /// identifier that is not in the list is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns `CoordinatorError::Persistence` when the shrunk list cannot
    /// be flushed; the in-memory list then keeps its previous contents.
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.initialize().await;
        let mut state = self.state.lock().await;

        let Some(event) = state.events.iter().find(|e| e.id == id).cloned() else {
            return Ok(());
        };

        if let Some(reference) = event.notification_reference() {
            if let Err(err) = self.bounded(self.scheduler.cancel(reference)).await {
                warn!("Could not cancel notification {reference}: {err}");
            }
        }
        if let Some(reference) = event.calendar_reference() {
            if let Err(err) = self.bounded(self.calendar.delete_entry(reference)).await {
                warn!("Could not delete calendar entry {reference}: {err}");
            }
        }

        let candidate: Vec<PlantEvent> = state
            .events
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        self.store.save(&candidate).await?;
        state.events = candidate;

        Ok(())
    }
}
