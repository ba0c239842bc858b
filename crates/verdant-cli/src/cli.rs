//! Command handlers bridging parsed arguments to the coordinator.
//!
//! Each handler converts its CLI argument structure into the core parameter
//! types, calls the coordinator, and renders the result through the core's
//! display wrappers.

use anyhow::{bail, Result};
use jiff::Timestamp;
use verdant_core::{
    display::{CreateResult, EventListing},
    params::EventDraft,
    Coordinator,
};

use crate::args::{AddArgs, RemoveArgs, ShowArgs};

pub struct Cli {
    coordinator: Coordinator,
}

impl Cli {
    pub fn new(coordinator: Coordinator) -> Self {
        Self { coordinator }
    }

    /// Handle the `add` command.
    pub async fn add(&self, args: AddArgs) -> Result<()> {
        let scheduled_at = match (args.at, args.delay) {
            (Some(at), _) => at,
            (None, Some(delay)) => Timestamp::now().saturating_add(delay)?,
            (None, None) => bail!("either --at or --in is required"),
        };

        let draft = EventDraft {
            title: args.title,
            plant: args.plant,
            description: args.description,
            scheduled_at,
        };
        let event = self.coordinator.create(&draft).await?;
        println!("{}", CreateResult::new(event));
        Ok(())
    }

    /// Handle the `list` command.
    pub async fn list(&self) -> Result<()> {
        println!("{}", EventListing(self.coordinator.list().await));
        Ok(())
    }

    /// Handle the `show` command.
    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let events = self.coordinator.list().await;
        match events.iter().find(|e| e.id == args.id) {
            Some(event) => println!("{event}"),
            None => println!("No reminder with ID {} found.", args.id),
        }
        Ok(())
    }

    /// Handle the `remove` command.
    pub async fn remove(&self, args: RemoveArgs) -> Result<()> {
        self.coordinator.remove(&args.id).await?;
        println!("Removed reminder {}.", args.id);
        Ok(())
    }
}
