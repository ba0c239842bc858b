//! Event lifecycle coordinator.
//!
//! This module provides the main [`Coordinator`] interface of the Verdant
//! reminder system. The coordinator owns the in-memory event list and is the
//! only component allowed to mutate it: it validates drafts, fans out the
//! two best-effort side effects, stitches the generated identifiers onto the
//! persisted record, and guarantees that every created side effect has a
//! matching teardown on delete.
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────────┐    ┌──────────────────┐
//! │  Presentation    │    │     Coordinator      │───▶│  EventStore      │
//! │  (CLI or other   │───▶│  validate / fan out  │    ├──────────────────┤
//! │   contract user) │    │  / merge / persist   │───▶│  Notification +  │
//! └──────────────────┘    └──────────────────────┘    │  Calendar        │
//!                                                     └──────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Coordinator`] instances with
//!   configured adapters and default XDG file locations
//! - [`lifecycle`]: The create/remove operations with their side-effect
//!   fan-out and teardown pairing
//!
//! ## Design Principles
//!
//! 1. **Single writer**: all mutation and persistence happens under one
//!    async mutex, so the in-memory list always matches the last successful
//!    flush
//! 2. **Best effort side effects**: scheduling and calendar failures degrade
//!    the record instead of failing the operation
//! 3. **Fail-soft startup**: missing permissions or unreadable persisted
//!    state never prevent the coordinator from coming up

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use jiff::SignedDuration;
use log::warn;
use tokio::sync::Mutex;

use crate::{
    adapters::{CalendarStore, NotificationScheduler},
    error::AdapterError,
    models::{sort_by_schedule, PlantEvent, SkipReason},
    store::EventStore,
};

pub mod builder;
pub mod lifecycle;


pub use builder::CoordinatorBuilder;

/// Minimum interval between "now" and an event's scheduled instant for a
/// draft to be accepted.
pub const MIN_LEAD_TIME: SignedDuration = SignedDuration::from_secs(5);

/// Fixed human-readable name of the dedicated calendar.
pub const CALENDAR_NAME: &str = "Plant Watering";

/// Duration of a created calendar entry, starting at the scheduled instant.
pub const ENTRY_DURATION: SignedDuration = SignedDuration::from_mins(30);

/// Default bound applied to every adapter call; a timeout counts as failure
/// of that sub-step only.
pub const DEFAULT_ADAPTER_TIMEOUT: Duration = Duration::from_secs(10);

/// Mutable coordinator state, guarded by one mutex so that list mutation and
/// persistence stay serialized.
pub(crate) struct CoordinatorState {
    /// In-memory event list, ascending by scheduled instant
    pub(crate) events: Vec<PlantEvent>,
    /// Whether the persisted list has been loaded
    pub(crate) loaded: bool,
    /// Cached identifier of the dedicated calendar; re-resolved lazily while
    /// absent
    pub(crate) calendar_id: Option<String>,
}

/// Main coordinator interface for managing plant care reminders.
pub struct Coordinator {
    pub(crate) store: Arc<dyn EventStore>,
    pub(crate) scheduler: Arc<dyn NotificationScheduler>,
    pub(crate) calendar: Arc<dyn CalendarStore>,
    pub(crate) adapter_timeout: Duration,
    pub(crate) state: Mutex<CoordinatorState>,
}

impl Coordinator {
    pub(crate) fn new(
        store: Arc<dyn EventStore>,
        scheduler: Arc<dyn NotificationScheduler>,
        calendar: Arc<dyn CalendarStore>,
        adapter_timeout: Duration,
    ) -> Self {
        Self {
            store,
            scheduler,
            calendar,
            adapter_timeout,
            state: Mutex::new(CoordinatorState {
                events: Vec::new(),
                loaded: false,
                calendar_id: None,
            }),
        }
    }

    /// Prepares the coordinator for use: acquires the notification
    /// permission, resolves the dedicated calendar, and loads the persisted
    /// event list.
    ///
    /// Idempotent, and infallible by design: a denied permission or a failed
    /// calendar resolution only degrades later side effects (and is logged),
    /// and unreadable persisted state yields an empty list. The other
    /// operations self-initialize on first use, so calling this explicitly
    /// is optional.
    pub async fn initialize(&self) {
        let mut state = self.state.lock().await;
        if state.loaded {
            return;
        }

        if let Err(err) = self.bounded(self.scheduler.request_permission()).await {
            warn!("Notification permission unavailable: {err}");
        }

        match self.bounded(self.calendar.ensure_calendar(CALENDAR_NAME)).await {
            Ok(id) => state.calendar_id = Some(id),
            Err(err) => warn!("Could not resolve calendar '{CALENDAR_NAME}': {err}"),
        }

        let mut events = self.store.load().await;
        sort_by_schedule(&mut events);
        state.events = events;
        state.loaded = true;
    }

    /// Returns a snapshot of the event list, ascending by scheduled instant.
    pub async fn list(&self) -> Vec<PlantEvent> {
        self.initialize().await;
        self.state.lock().await.events.clone()
    }

    /// Runs one adapter call under the configured per-call timeout.
    pub(crate) async fn bounded<T>(
        &self,
        fut: impl Future<Output = std::result::Result<T, AdapterError>>,
    ) -> std::result::Result<T, BoundedError> {
        match tokio::time::timeout(self.adapter_timeout, fut).await {
            Ok(result) => result.map_err(BoundedError::Adapter),
            Err(_) => Err(BoundedError::TimedOut(self.adapter_timeout)),
        }
    }
}

/// Failure of a bounded adapter call: either the adapter's own error or the
/// coordinator-imposed timeout.
pub(crate) enum BoundedError {
    Adapter(AdapterError),
    TimedOut(Duration),
}

impl BoundedError {
    /// Maps the failure onto the persisted skip reason.
    pub(crate) fn skip_reason(&self) -> SkipReason {
        match self {
            Self::Adapter(err) => SkipReason::from(err),
            Self::TimedOut(_) => SkipReason::TimedOut,
        }
    }
}

impl fmt::Display for BoundedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adapter(err) => write!(f, "{err}"),
            Self::TimedOut(timeout) => write!(f, "timed out after {timeout:?}"),
        }
    }
}
