//! Data models for plant care reminders.
//!
//! This module contains the core domain models of the Verdant reminder
//! system. Display implementations live in [`crate::display`] to keep data
//! structures separate from presentation concerns.
//!
//! The central type is [`PlantEvent`], the sole persisted entity. Its two
//! external-system references are modeled as [`SideEffect`] outcomes rather
//! than nullable identifier fields, so a missing reference always records
//! why the corresponding adapter call did not produce one.

pub mod event;
pub mod side_effect;


pub use event::{sort_by_schedule, PlantEvent};
pub use side_effect::{SideEffect, SkipReason};
