//! Client trait implementations for the local server.

use async_trait::async_trait;

use super::LocalServer;
use crate::{
    clients::{ActivityClient, CurrentTripStore, LinkClient, ParticipantClient, TripClient},
    error::Result,
    models::{DaySection, Participant, Trip, TripLink},
    params::{CreateActivity, CreateLink, CreateTrip, UpdateTrip},
};

#[async_trait]
impl TripClient for LocalServer {
    async fn create(&self, params: &CreateTrip) -> Result<u64> {
        let params = params.clone();
        self.run(move |mut db| db.create_trip(&params).map(|trip| trip.id))
            .await
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<Trip>> {
        self.run(move |db| db.get_trip(id)).await
    }

    async fn update(&self, params: &UpdateTrip) -> Result<()> {
        let params = params.clone();
        self.run(move |db| db.update_trip(&params)).await
    }
}

#[async_trait]
impl ActivityClient for LocalServer {
    async fn create(&self, params: &CreateActivity) -> Result<()> {
        let params = params.clone();
        self.run(move |db| db.create_activity(&params)).await
    }

    async fn list_by_trip(&self, trip_id: u64) -> Result<Vec<DaySection>> {
        self.run(move |db| db.list_activities(trip_id)).await
    }
}

#[async_trait]
impl LinkClient for LocalServer {
    async fn create(&self, params: &CreateLink) -> Result<()> {
        let params = params.clone();
        self.run(move |db| db.create_link(&params)).await
    }

    async fn list_by_trip(&self, trip_id: u64) -> Result<Vec<TripLink>> {
        self.run(move |db| db.list_links(trip_id)).await
    }
}

#[async_trait]
impl ParticipantClient for LocalServer {
    async fn list_by_trip(&self, trip_id: u64) -> Result<Vec<Participant>> {
        self.run(move |db| db.list_participants(trip_id)).await
    }
}

#[async_trait]
impl CurrentTripStore for LocalServer {
    async fn save(&self, trip_id: u64) -> Result<()> {
        self.run(move |db| db.save_current_trip(trip_id)).await
    }

    async fn get(&self) -> Result<Option<u64>> {
        self.run(move |db| db.get_current_trip()).await
    }

    async fn clear(&self) -> Result<()> {
        self.run(move |db| db.clear_current_trip()).await
    }
}
