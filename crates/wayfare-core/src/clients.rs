//! Collaborator contracts consumed by the screen controllers.
//!
//! The core never talks to a transport directly; every remote interaction
//! goes through one of these traits. The workspace ships a local
//! rusqlite-backed implementation in [`crate::server`], and tests substitute
//! in-memory fakes. All calls resolve to a success or a failure; partial
//! outcomes do not exist at this boundary.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{DaySection, Participant, Trip, TripLink},
    params::{CreateActivity, CreateLink, CreateTrip, UpdateTrip},
};

/// Trip CRUD operations.
#[async_trait]
pub trait TripClient {
    /// Creates a trip and returns its assigned ID.
    async fn create(&self, params: &CreateTrip) -> Result<u64>;

    /// Fetches a trip by ID, or `None` when it does not exist.
    async fn get_by_id(&self, id: u64) -> Result<Option<Trip>>;

    /// Updates a trip's destination and date span.
    async fn update(&self, params: &UpdateTrip) -> Result<()>;
}

/// Activity operations, returned pre-grouped by calendar day.
#[async_trait]
pub trait ActivityClient {
    /// Adds an activity to a trip.
    async fn create(&self, params: &CreateActivity) -> Result<()>;

    /// Lists a trip's activities as one section per day of the trip span,
    /// ordered by date. Days without activities still get a section.
    async fn list_by_trip(&self, trip_id: u64) -> Result<Vec<DaySection>>;
}

/// Shared-link operations.
#[async_trait]
pub trait LinkClient {
    /// Attaches a link to a trip.
    async fn create(&self, params: &CreateLink) -> Result<()>;

    /// Lists a trip's links in creation order.
    async fn list_by_trip(&self, trip_id: u64) -> Result<Vec<TripLink>>;
}

/// Guest listing.
#[async_trait]
pub trait ParticipantClient {
    /// Lists a trip's invited guests.
    async fn list_by_trip(&self, trip_id: u64) -> Result<Vec<Participant>>;
}

/// Device-local storage of the in-progress trip ID.
///
/// Read once at startup to resume a trip; the core never re-reads it.
#[async_trait]
pub trait CurrentTripStore {
    /// Remembers the given trip as the current one.
    async fn save(&self, trip_id: u64) -> Result<()>;

    /// Returns the remembered trip ID, if any.
    async fn get(&self) -> Result<Option<u64>>;

    /// Forgets the remembered trip.
    async fn clear(&self) -> Result<()>;
}
