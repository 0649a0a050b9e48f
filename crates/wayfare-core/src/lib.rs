//! Core library for the Wayfare trip planning application.
//!
//! This crate provides the business logic for planning a trip: picking a
//! destination and date range, inviting guests, and managing per-day
//! activities and shared links once the trip exists.
//!
//! # Architecture
//!
//! The crate is layered from pure values outward:
//!
//! - [`calendar`], [`guests`], [`schedule`]: pure logic — interval
//!   selection from calendar taps, the unique invite list, and day-bucket
//!   grouping of activities.
//! - [`state`]: one synchronous state machine per screen (creation wizard,
//!   trip screen, add-activity form), with guard-before-mutate transitions.
//! - [`controllers`]: one controller per screen, owning its machine plus the
//!   busy flags, and performing collaborator calls.
//! - [`clients`]: the collaborator contracts; [`server`] is the local
//!   rusqlite-backed implementation shipped with the workspace.
//! - [`display`]: wrapper types formatting models as markdown for terminal
//!   rendering.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use wayfare_core::{
//!     controllers::HomeController,
//!     server::LocalServerBuilder,
//!     state::WizardOverlay,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = LocalServerBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! let mut home = HomeController::new();
//! let wizard = home.wizard_mut();
//! wizard.set_destination("Lisbon");
//! wizard.open_overlay(WizardOverlay::Calendar);
//! wizard.select_day(date(2024, 5, 5));
//! wizard.select_day(date(2024, 5, 10));
//! wizard.close_overlay();
//!
//! home.submit(&server, &server).await?; // move to the guest step
//! home.wizard_mut().open_overlay(WizardOverlay::GuestList);
//! home.wizard_mut().add_guest("ana@example.com")?;
//! home.wizard_mut().close_overlay();
//!
//! if let Some(trip_id) = home.submit(&server, &server).await? {
//!     println!("Created trip {trip_id}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod clients;
pub mod controllers;
pub mod db;
pub mod display;
pub mod error;
pub mod guests;
pub mod models;
pub mod params;
pub mod schedule;
pub mod server;
pub mod state;
pub mod validate;

// Re-export commonly used types
pub use calendar::{DateRange, DayMarking, MarkedDays};
pub use clients::{ActivityClient, CurrentTripStore, LinkClient, ParticipantClient, TripClient};
pub use controllers::{
    ActivitiesController, Bootstrap, DetailsController, HomeController, LoadOutcome,
    TripController,
};
pub use error::{Result, TripError};
pub use guests::GuestList;
pub use models::{Activity, DaySection, Participant, Trip, TripLink};
pub use params::{CreateActivity, CreateLink, CreateTrip, UpdateTrip};
pub use schedule::{DayBucket, ScheduledActivity};
pub use server::{LocalServer, LocalServerBuilder};
pub use state::{
    ActivityForm, ActivityOverlay, Advance, Step, Tab, TripOverlay, TripScreen, Wizard,
    WizardOverlay,
};
