//! Parameter structures for trip planning operations.
//!
//! Shared parameter types passed between interface layers (CLI, future
//! front ends) and the core clients. They carry no framework-specific
//! derives; interface layers define their own wrappers and convert into
//! these.

use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

/// Parameters for creating a new trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTrip {
    /// Destination of the trip
    pub destination: String,

    /// First day of the trip
    pub starts_at: Date,

    /// Last day of the trip (inclusive)
    pub ends_at: Date,

    /// Guest e-mail addresses to invite
    pub emails_to_invite: Vec<String>,
}

/// Parameters for updating an existing trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateTrip {
    /// ID of the trip to update
    pub id: u64,

    /// New destination
    pub destination: String,

    /// New first day
    pub starts_at: Date,

    /// New last day (inclusive)
    pub ends_at: Date,
}

/// Parameters for adding an activity to a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateActivity {
    /// ID of the parent trip
    pub trip_id: u64,

    /// Title of the activity
    pub title: String,

    /// Wall-clock moment the activity takes place
    pub occurs_at: DateTime,
}

/// Parameters for attaching a link to a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateLink {
    /// ID of the parent trip
    pub trip_id: u64,

    /// Display title for the link
    pub title: String,

    /// Target URL
    pub url: String,
}
