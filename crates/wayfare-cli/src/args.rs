use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Date;

/// Main command-line interface for the Wayfare trip planner
///
/// Wayfare plans trips from the terminal: pick a destination and date range,
/// invite guests by e-mail, then manage per-day activities and shared links
/// for the created trip. The planner keeps one current trip at a time, stored
/// locally, and resumes it on the next run.
#[derive(Parser)]
#[command(version, about, name = "wayfare")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/wayfare/wayfare.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Wayfare CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the current trip
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage activities of the current trip
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Manage shared links of the current trip
    #[command(alias = "l")]
    Link {
        #[command(subcommand)]
        command: LinkCommands,
    },
    /// Show the current trip's guests
    #[command(alias = "g")]
    Guest {
        #[command(subcommand)]
        command: GuestCommands,
    },
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Plan a new trip and make it the current one
    New(TripNewArgs),
    /// Show the current trip
    Show,
    /// Change the current trip's destination and dates
    Update(TripUpdateArgs),
    /// Forget the current trip without deleting it
    Forget,
}

/// Arguments for planning a new trip
#[derive(ClapArgs)]
pub struct TripNewArgs {
    /// Where the trip goes (at least 4 characters)
    #[arg(long)]
    pub destination: String,

    /// Calendar day to tap, in any order; two taps make the range
    /// (e.g. --day 2024-05-05 --day 2024-05-10)
    #[arg(long = "day", value_name = "DATE", required = true)]
    pub days: Vec<Date>,

    /// Guest e-mail address to invite (repeatable)
    #[arg(long = "invite", value_name = "EMAIL")]
    pub invites: Vec<String>,
}

/// Arguments for updating the current trip
#[derive(ClapArgs)]
pub struct TripUpdateArgs {
    /// New destination
    #[arg(long)]
    pub destination: String,

    /// Calendar day to tap, in any order; two taps make the new range
    #[arg(long = "day", value_name = "DATE", required = true)]
    pub days: Vec<Date>,
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Add an activity to the current trip
    Add(ActivityAddArgs),
    /// Show the day-by-day schedule
    List,
}

/// Arguments for adding an activity
#[derive(ClapArgs)]
pub struct ActivityAddArgs {
    /// What the activity is
    #[arg(long)]
    pub title: String,

    /// Day of the activity (must fall within the trip dates)
    #[arg(long)]
    pub day: Date,

    /// Hour of the day, 0-23
    #[arg(long)]
    pub hour: String,
}

#[derive(Subcommand)]
pub enum LinkCommands {
    /// Attach a link to the current trip
    Add(LinkAddArgs),
    /// Show the trip's links
    List,
}

/// Arguments for attaching a link
#[derive(ClapArgs)]
pub struct LinkAddArgs {
    /// Display title for the link
    #[arg(long)]
    pub title: String,

    /// Target URL
    #[arg(long)]
    pub url: String,
}

#[derive(Subcommand)]
pub enum GuestCommands {
    /// Show the invited guests
    List,
}
