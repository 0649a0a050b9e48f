//! Activity model definitions.

use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

/// Represents a single scheduled activity within a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Unique identifier for the activity
    pub id: u64,

    /// ID of the parent trip
    pub trip_id: u64,

    /// Brief title of the activity
    pub title: String,

    /// Wall-clock moment the activity takes place
    pub occurs_at: DateTime,
}

/// One calendar day of a trip together with the activities scheduled on it.
///
/// This is the shape [`crate::clients::ActivityClient::list_by_trip`] returns:
/// the server pre-groups activities by day over the whole trip span, so a
/// section may carry an empty activity list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySection {
    /// The calendar day this section covers
    pub date: Date,

    /// Activities occurring on this day, in server order
    pub activities: Vec<Activity>,
}
