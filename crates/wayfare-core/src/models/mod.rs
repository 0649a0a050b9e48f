//! Data models for trips, activities, links, and participants.
//!
//! These are the domain objects exchanged with the collaborator clients
//! defined in [`crate::clients`]. Calendar-day values use [`jiff::civil::Date`]
//! and activity times use [`jiff::civil::DateTime`]: trip schedules are
//! wall-clock values in the trip's own locale, so no timezone is attached.

mod activity;
mod detail;
mod trip;

pub use activity::{Activity, DaySection};
pub use detail::{Participant, TripLink};
pub use trip::Trip;
