//! Link and participant models shown on the trip details tab.

use serde::{Deserialize, Serialize};

/// A shared link attached to a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripLink {
    /// Unique identifier for the link
    pub id: u64,

    /// ID of the parent trip
    pub trip_id: u64,

    /// Display title for the link
    pub title: String,

    /// Target URL
    pub url: String,
}

/// A guest invited to a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    /// Unique identifier for the participant
    pub id: u64,

    /// ID of the parent trip
    pub trip_id: u64,

    /// Display name, if the guest has confirmed with one
    pub name: Option<String>,

    /// E-mail address the invitation was sent to
    pub email: String,

    /// Whether the guest has confirmed attendance
    pub is_confirmed: bool,
}
