//! File-backed notification spool.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::NotificationScheduler;
use crate::error::AdapterError;

/// A pending one-shot notification in the spool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingNotification {
    /// Opaque identifier handed back to the coordinator
    pub id: String,
    /// Instant the notification should fire
    pub at: Timestamp,
    /// Text body shown to the user
    pub body: String,
}

/// [`NotificationScheduler`] that records pending notifications in a JSON
/// spool file.
///
/// A delivery daemon draining the spool is a separate concern; this adapter
/// only implements the scheduling contract the coordinator depends on.
pub struct SpoolScheduler {
    path: PathBuf,
    // Serializes read-modify-write cycles on the spool file.
    io: Mutex<()>,
}

impl SpoolScheduler {
    /// Creates a scheduler backed by the given spool file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            io: Mutex::new(()),
        }
    }

    /// Returns all pending notifications currently in the spool.
    pub async fn pending(&self) -> Result<Vec<PendingNotification>, AdapterError> {
        let _guard = self.io.lock().await;
        self.read_spool().await
    }

    async fn read_spool(&self) -> Result<Vec<PendingNotification>, AdapterError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(AdapterError::Io(err)),
        };
        serde_json::from_slice(&raw).map_err(|err| {
            AdapterError::Failed(format!(
                "corrupt notification spool {}: {err}",
                self.path.display()
            ))
        })
    }

    async fn write_spool(&self, pending: &[PendingNotification]) -> Result<(), AdapterError> {
        let raw = serde_json::to_vec_pretty(pending)
            .map_err(|err| AdapterError::Failed(format!("could not serialize spool: {err}")))?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl NotificationScheduler for SpoolScheduler {
    async fn request_permission(&self) -> Result<(), AdapterError> {
        // A local spool file needs no platform prompt.
        Ok(())
    }

    async fn schedule(&self, at: Timestamp, body: &str) -> Result<String, AdapterError> {
        let _guard = self.io.lock().await;
        let mut pending = self.read_spool().await?;
        let id = Uuid::new_v4().to_string();
        pending.push(PendingNotification {
            id: id.clone(),
            at,
            body: body.to_string(),
        });
        self.write_spool(&pending).await?;
        Ok(id)
    }

    async fn cancel(&self, reference: &str) -> Result<(), AdapterError> {
        let _guard = self.io.lock().await;
        let mut pending = self.read_spool().await?;
        let before = pending.len();
        pending.retain(|n| n.id != reference);
        if pending.len() != before {
            self.write_spool(&pending).await?;
        }
        // An unknown reference is success: the notification is gone either way.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn test_instant() -> Timestamp {
        Timestamp::from_second(1_750_000_000).expect("valid instant")
    }

    #[tokio::test]
    async fn schedule_records_a_pending_notification() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let scheduler = SpoolScheduler::new(temp_dir.path().join("spool.json"));

        let id = scheduler
            .schedule(test_instant(), "Water the fern • Fern")
            .await
            .expect("schedule");

        let pending = scheduler.pending().await.expect("pending");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, id);
        assert_eq!(pending[0].body, "Water the fern • Fern");
        assert_eq!(pending[0].at, test_instant());
    }

    #[tokio::test]
    async fn cancel_removes_only_the_matching_notification() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let scheduler = SpoolScheduler::new(temp_dir.path().join("spool.json"));

        let keep = scheduler.schedule(test_instant(), "keep").await.expect("schedule");
        let discard = scheduler.schedule(test_instant(), "drop").await.expect("schedule");

        scheduler.cancel(&discard).await.expect("cancel");

        let pending = scheduler.pending().await.expect("pending");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, keep);
    }

    #[tokio::test]
    async fn cancel_is_idempotent_and_tolerates_unknown_ids() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let scheduler = SpoolScheduler::new(temp_dir.path().join("spool.json"));

        let id = scheduler.schedule(test_instant(), "once").await.expect("schedule");
        scheduler.cancel(&id).await.expect("first cancel");
        scheduler.cancel(&id).await.expect("second cancel");
        scheduler.cancel("never-existed").await.expect("unknown id");

        assert!(scheduler.pending().await.expect("pending").is_empty());
    }
}
