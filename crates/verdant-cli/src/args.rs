use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::{SignedDuration, Timestamp};

/// Main command-line interface for the Verdant plant care reminder tool
///
/// Verdant keeps a list of scheduled watering/care reminders per plant. Each
/// reminder schedules a one-shot local notification and mirrors the event
/// into a dedicated calendar; removing a reminder retracts both again.
#[derive(Parser)]
#[command(version, about, name = "verdant")]
pub struct Args {
    /// Directory for the reminder data files. Defaults to
    /// $XDG_DATA_HOME/verdant
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Verdant CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new reminder
    #[command(alias = "a")]
    Add(AddArgs),
    /// List scheduled reminders
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific reminder
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Remove a reminder and retract its notification and calendar entry
    #[command(aliases = ["d", "rm"])]
    Remove(RemoveArgs),
}

/// Create a new reminder
///
/// The scheduled instant is given either absolutely with --at or relative to
/// now with --in; it must be at least five seconds in the future.
#[derive(ClapArgs)]
pub struct AddArgs {
    /// Title of the reminder
    pub title: String,
    /// Name of the plant the reminder is for
    pub plant: String,
    /// Optional free-form notes
    #[arg(short, long)]
    pub description: Option<String>,
    /// Absolute instant in RFC 3339 (e.g. 2026-09-01T09:00:00Z)
    #[arg(long, conflicts_with = "delay", required_unless_present = "delay")]
    pub at: Option<Timestamp>,
    /// Delay relative to now (e.g. "45m", "2h30m")
    #[arg(long = "in", conflicts_with = "at", required_unless_present = "at")]
    pub delay: Option<SignedDuration>,
}

/// Show details of a specific reminder
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// ID of the reminder to display
    pub id: String,
}

/// Remove a reminder
#[derive(ClapArgs)]
pub struct RemoveArgs {
    /// ID of the reminder to remove
    pub id: String,
}
