//! Screen controllers.
//!
//! A controller owns one screen's state machine plus its busy flags, and
//! performs the collaborator calls the machine itself must stay free of.
//! Collaborators are passed into each call rather than stored, so the same
//! controller works against the local server or any test fake.
//!
//! Busy-flag contract: while a submission is in flight its flag is set and a
//! second invocation of the same action returns `Ok(None)` without doing
//! anything. A failed call clears the flag, logs the cause, and leaves the
//! machine exactly as it was before the call.

mod activities;
mod details;
mod home;
mod trip;


pub use activities::ActivitiesController;
pub use details::DetailsController;
pub use home::{Bootstrap, HomeController};
pub use trip::{LoadOutcome, TripController};
