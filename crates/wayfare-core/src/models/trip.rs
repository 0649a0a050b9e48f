//! Trip model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// Represents a planned trip with its destination and date span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    /// Destination of the trip
    pub destination: String,

    /// First day of the trip
    pub starts_at: Date,

    /// Last day of the trip (inclusive)
    pub ends_at: Date,

    /// Timestamp when the trip was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the trip was last modified (UTC)
    pub updated_at: Timestamp,
}
