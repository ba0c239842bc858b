//! Core library for the Verdant plant care reminder application.
//!
//! This crate provides the event lifecycle coordinator: it validates
//! user-authored reminder drafts, fans out to the notification and calendar
//! adapters, and persists the resulting event list.
//!
//! # Architecture Overview
//!
//! - **Domain Models** ([`models`]): [`models::PlantEvent`] with its two
//!   tagged side-effect outcomes
//! - **Adapter Contracts** ([`adapters`]): async traits for the notification
//!   scheduler and the calendar store, plus file-backed implementations
//! - **Persistence** ([`store`]): the whole-list JSON blob store with its
//!   fail-soft load contract
//! - **Coordinator** ([`coordinator`]): the single owner of the in-memory
//!   list and the only mutation path
//! - **Display** ([`display`]): presentation wrappers for interface layers
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jiff::{SignedDuration, Timestamp};
//! use verdant_core::{params::EventDraft, CoordinatorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let coordinator = CoordinatorBuilder::new().build()?;
//! coordinator.initialize().await;
//!
//! let draft = EventDraft {
//!     title: "Water the monstera".to_string(),
//!     plant: "Monstera".to_string(),
//!     description: Some("Second floor".to_string()),
//!     scheduled_at: Timestamp::now().saturating_add(SignedDuration::from_hours(12))?,
//! };
//! let event = coordinator.create(&draft).await?;
//! println!("Created {}", event.id);
//!
//! for event in coordinator.list().await {
//!     println!("{}", event.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod coordinator;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use coordinator::{Coordinator, CoordinatorBuilder};
pub use error::{AdapterError, CoordinatorError, Result};
pub use models::{PlantEvent, SideEffect, SkipReason};
