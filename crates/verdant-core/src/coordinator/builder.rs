//! Builder for creating and configuring Coordinator instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use super::{Coordinator, DEFAULT_ADAPTER_TIMEOUT};
use crate::{
    adapters::{CalendarStore, FileCalendar, NotificationScheduler, SpoolScheduler},
    error::{CoordinatorError, Result},
    store::{EventStore, JsonFileStore},
};

/// Builder for creating and configuring Coordinator instances.
///
/// By default the coordinator persists everything under the XDG data
/// directory (`$XDG_DATA_HOME/verdant/` or `~/.local/share/verdant/`) with
/// the file-backed adapters. Hosts with their own platform backends swap
/// them in via [`with_store`](Self::with_store),
/// [`with_scheduler`](Self::with_scheduler), and
/// [`with_calendar`](Self::with_calendar).
pub struct CoordinatorBuilder {
    data_dir: Option<PathBuf>,
    store: Option<Arc<dyn EventStore>>,
    scheduler: Option<Arc<dyn NotificationScheduler>>,
    calendar: Option<Arc<dyn CalendarStore>>,
    adapter_timeout: Duration,
}

impl CoordinatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            data_dir: None,
            store: None,
            scheduler: None,
            calendar: None,
            adapter_timeout: DEFAULT_ADAPTER_TIMEOUT,
        }
    }

    /// Sets a custom data directory for the file-backed defaults.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/verdant` or `~/.local/share/verdant`
    pub fn with_data_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the persistence adapter.
    pub fn with_store(mut self, store: Arc<dyn EventStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replaces the notification scheduler adapter.
    pub fn with_scheduler(mut self, scheduler: Arc<dyn NotificationScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Replaces the calendar adapter.
    pub fn with_calendar(mut self, calendar: Arc<dyn CalendarStore>) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Overrides the per-call adapter timeout.
    pub fn with_adapter_timeout(mut self, timeout: Duration) -> Self {
        self.adapter_timeout = timeout;
        self
    }

    /// Builds the configured coordinator instance.
    ///
    /// # Errors
    ///
    /// Returns `CoordinatorError::FileSystem` if the data directory cannot
    /// be created, or `CoordinatorError::XdgDirectory` if no default data
    /// location can be resolved.
    pub fn build(self) -> Result<Coordinator> {
        let Self {
            data_dir,
            store,
            scheduler,
            calendar,
            adapter_timeout,
        } = self;

        // The data directory is only touched when a file-backed default has
        // to be constructed.
        let place = |file: &str| Self::place_data_file(data_dir.as_deref(), file);

        let store: Arc<dyn EventStore> = match store {
            Some(store) => store,
            None => Arc::new(JsonFileStore::new(place("events.json")?)),
        };
        let scheduler: Arc<dyn NotificationScheduler> = match scheduler {
            Some(scheduler) => scheduler,
            None => Arc::new(SpoolScheduler::new(place("notifications.json")?)),
        };
        let calendar: Arc<dyn CalendarStore> = match calendar {
            Some(calendar) => calendar,
            None => Arc::new(FileCalendar::new(place("calendar.json")?)),
        };

        Ok(Coordinator::new(store, scheduler, calendar, adapter_timeout))
    }

    /// Places a data file in the configured directory, or under the XDG Base
    /// Directory specification when no directory was given.
    fn place_data_file(data_dir: Option<&Path>, file: &str) -> Result<PathBuf> {
        match data_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).map_err(|e| CoordinatorError::FileSystem {
                    path: dir.to_path_buf(),
                    source: e,
                })?;
                Ok(dir.join(file))
            }
            None => xdg::BaseDirectories::with_prefix("verdant")
                .place_data_file(file)
                .map_err(|e| CoordinatorError::XdgDirectory(e.to_string())),
        }
    }
}

impl Default for CoordinatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
