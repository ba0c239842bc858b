//! Event list persistence.
//!
//! The event list is the sole unit of persistence: it is stored as one
//! serialized JSON document and always written whole. There is no querying
//! and no per-event record.
//!
//! The contract is deliberately asymmetric. `load` fails soft: a missing,
//! unreadable, or unparseable document yields an empty list, never an error
//! the coordinator has to handle. `save` is fallible and the coordinator
//! treats its failure as fatal to the enclosing operation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CoordinatorError, Result},
    models::{sort_by_schedule, PlantEvent},
};

/// Version of the on-disk envelope; bump when the event schema changes.
pub const SCHEMA_VERSION: u32 = 1;

/// Storage contract for the full event list.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Loads the persisted event list, yielding an empty list on any fault.
    async fn load(&self) -> Vec<PlantEvent>;

    /// Durably stores the full event list, replacing the previous document.
    async fn save(&self, events: &[PlantEvent]) -> Result<()>;
}

/// Versioned on-disk envelope around the event list.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEvents {
    schema_version: u32,
    events: Vec<PlantEvent>,
}

/// [`EventStore`] backed by a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store reading and writing the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EventStore for JsonFileStore {
    async fn load(&self) -> Vec<PlantEvent> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!("Could not read {}: {err}", self.path.display());
                return Vec::new();
            }
        };

        let stored: StoredEvents = match serde_json::from_slice(&raw) {
            Ok(stored) => stored,
            Err(err) => {
                warn!("Could not parse {}: {err}", self.path.display());
                return Vec::new();
            }
        };

        if stored.schema_version != SCHEMA_VERSION {
            warn!(
                "Unsupported schema version {} in {} (expected {SCHEMA_VERSION})",
                stored.schema_version,
                self.path.display()
            );
            return Vec::new();
        }

        // The document is expected to be sorted already; re-sorting keeps
        // the ordering invariant even for hand-edited files.
        let mut events = stored.events;
        sort_by_schedule(&mut events);
        events
    }

    async fn save(&self, events: &[PlantEvent]) -> Result<()> {
        let stored = StoredEvents {
            schema_version: SCHEMA_VERSION,
            events: events.to_vec(),
        };
        let raw = serde_json::to_vec_pretty(&stored).map_err(|err| {
            CoordinatorError::persistence(format!(
                "could not serialize {} events: {err}",
                events.len()
            ))
        })?;

        tokio::fs::write(&self.path, raw).await.map_err(|err| {
            CoordinatorError::persistence(format!(
                "could not write {}: {err}",
                self.path.display()
            ))
        })
    }
}
