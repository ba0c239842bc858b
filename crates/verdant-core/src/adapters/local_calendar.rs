//! File-backed local calendar store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{CalendarEntry, CalendarStore};
use crate::error::AdapterError;

/// A single named calendar with its timed entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredCalendar {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub entries: Vec<StoredEntry>,
}

/// A timed entry as persisted inside a calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredEntry {
    pub id: String,
    pub title: String,
    pub notes: String,
    pub start: Timestamp,
    pub end: Timestamp,
}

/// [`CalendarStore`] that keeps named calendars and their entries in a JSON
/// file.
pub struct FileCalendar {
    path: PathBuf,
    // Serializes read-modify-write cycles on the calendar file.
    io: Mutex<()>,
}

impl FileCalendar {
    /// Creates a calendar store backed by the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            io: Mutex::new(()),
        }
    }

    /// Returns all calendars currently in the store.
    pub async fn calendars(&self) -> Result<Vec<StoredCalendar>, AdapterError> {
        let _guard = self.io.lock().await;
        self.read_calendars().await
    }

    async fn read_calendars(&self) -> Result<Vec<StoredCalendar>, AdapterError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(AdapterError::Io(err)),
        };
        serde_json::from_slice(&raw).map_err(|err| {
            AdapterError::Failed(format!(
                "corrupt calendar file {}: {err}",
                self.path.display()
            ))
        })
    }

    async fn write_calendars(&self, calendars: &[StoredCalendar]) -> Result<(), AdapterError> {
        let raw = serde_json::to_vec_pretty(calendars)
            .map_err(|err| AdapterError::Failed(format!("could not serialize calendars: {err}")))?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl CalendarStore for FileCalendar {
    async fn ensure_calendar(&self, name: &str) -> Result<String, AdapterError> {
        let _guard = self.io.lock().await;
        let mut calendars = self.read_calendars().await?;

        if let Some(existing) = calendars.iter().find(|c| c.name == name) {
            return Ok(existing.id.clone());
        }

        let id = Uuid::new_v4().to_string();
        calendars.push(StoredCalendar {
            id: id.clone(),
            name: name.to_string(),
            entries: Vec::new(),
        });
        self.write_calendars(&calendars).await?;
        Ok(id)
    }

    async fn create_entry(
        &self,
        calendar_id: &str,
        entry: CalendarEntry,
    ) -> Result<String, AdapterError> {
        let _guard = self.io.lock().await;
        let mut calendars = self.read_calendars().await?;

        let calendar = calendars
            .iter_mut()
            .find(|c| c.id == calendar_id)
            .ok_or_else(|| AdapterError::Failed(format!("unknown calendar '{calendar_id}'")))?;

        let id = Uuid::new_v4().to_string();
        calendar.entries.push(StoredEntry {
            id: id.clone(),
            title: entry.title,
            notes: entry.notes,
            start: entry.start,
            end: entry.end,
        });
        self.write_calendars(&calendars).await?;
        Ok(id)
    }

    async fn delete_entry(&self, reference: &str) -> Result<(), AdapterError> {
        let _guard = self.io.lock().await;
        let mut calendars = self.read_calendars().await?;

        let mut changed = false;
        for calendar in &mut calendars {
            let before = calendar.entries.len();
            calendar.entries.retain(|e| e.id != reference);
            changed |= calendar.entries.len() != before;
        }
        if changed {
            self.write_calendars(&calendars).await?;
        }
        // An unknown reference is success: the entry is gone either way.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn test_entry(title: &str) -> CalendarEntry {
        let start = Timestamp::from_second(1_750_000_000).expect("valid instant");
        CalendarEntry {
            title: title.to_string(),
            notes: "notes".to_string(),
            start,
            end: start
                .saturating_add(jiff::SignedDuration::from_mins(30))
                .expect("valid instant"),
        }
    }

    #[tokio::test]
    async fn ensure_calendar_reuses_by_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileCalendar::new(temp_dir.path().join("calendar.json"));

        let first = store.ensure_calendar("Plant Watering").await.expect("ensure");
        let second = store.ensure_calendar("Plant Watering").await.expect("ensure");
        assert_eq!(first, second);

        let other = store.ensure_calendar("Work").await.expect("ensure");
        assert_ne!(first, other);
        assert_eq!(store.calendars().await.expect("calendars").len(), 2);
    }

    #[tokio::test]
    async fn create_entry_lands_in_the_right_calendar() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileCalendar::new(temp_dir.path().join("calendar.json"));

        let cal_id = store.ensure_calendar("Plant Watering").await.expect("ensure");
        let entry_id = store
            .create_entry(&cal_id, test_entry("Water the fern (Fern)"))
            .await
            .expect("create entry");

        let calendars = store.calendars().await.expect("calendars");
        assert_eq!(calendars[0].entries.len(), 1);
        assert_eq!(calendars[0].entries[0].id, entry_id);
        assert_eq!(calendars[0].entries[0].title, "Water the fern (Fern)");
    }

    #[tokio::test]
    async fn create_entry_rejects_unknown_calendars() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileCalendar::new(temp_dir.path().join("calendar.json"));

        let result = store.create_entry("no-such-id", test_entry("x")).await;
        assert!(matches!(result, Err(AdapterError::Failed(_))));
    }

    #[tokio::test]
    async fn delete_entry_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileCalendar::new(temp_dir.path().join("calendar.json"));

        let cal_id = store.ensure_calendar("Plant Watering").await.expect("ensure");
        let entry_id = store
            .create_entry(&cal_id, test_entry("once"))
            .await
            .expect("create entry");

        store.delete_entry(&entry_id).await.expect("first delete");
        store.delete_entry(&entry_id).await.expect("second delete");
        store.delete_entry("never-existed").await.expect("unknown id");

        let calendars = store.calendars().await.expect("calendars");
        assert!(calendars[0].entries.is_empty());
    }
}
