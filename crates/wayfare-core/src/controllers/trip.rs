//! Controller for the post-creation trip screen.

use log::warn;

use crate::{
    clients::TripClient,
    display::TripHeadline,
    error::Result,
    models::Trip,
    params::UpdateTrip,
    state::TripScreen,
};

/// Outcome of loading the trip screen.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Trip details loaded and the headline rebuilt
    Loaded,

    /// The trip ID no longer resolves; navigate back to the start screen
    NotFound,
}

/// Controller for the trip screen.
#[derive(Debug, Clone)]
pub struct TripController {
    trip_id: u64,
    screen: TripScreen,
    trip: Option<Trip>,
    when: String,
    is_updating: bool,
}

impl TripController {
    /// Creates a controller for the given trip.
    pub fn new(trip_id: u64) -> Self {
        Self {
            trip_id,
            screen: TripScreen::new(),
            trip: None,
            when: String::new(),
            is_updating: false,
        }
    }

    /// The screen state machine.
    pub fn screen(&self) -> &TripScreen {
        &self.screen
    }

    /// Mutable access to the screen for feeding user events.
    pub fn screen_mut(&mut self) -> &mut TripScreen {
        &mut self.screen
    }

    /// The loaded trip, if any.
    pub fn trip(&self) -> Option<&Trip> {
        self.trip.as_ref()
    }

    /// The `destination, DD Mon - DD Mon` headline built on load.
    pub fn when(&self) -> &str {
        &self.when
    }

    /// True while an update request is in flight.
    pub fn is_updating(&self) -> bool {
        self.is_updating
    }

    /// Loads the trip details and rebuilds the headline.
    ///
    /// `NotFound` is a navigation signal back to the start screen, not an
    /// error. The update form is seeded with the trip's destination.
    pub async fn load(&mut self, trips: &impl TripClient) -> Result<LoadOutcome> {
        let Some(trip) = trips.get_by_id(self.trip_id).await? else {
            return Ok(LoadOutcome::NotFound);
        };

        self.when = TripHeadline(&trip).to_string();
        self.screen.set_destination(&trip.destination);
        self.trip = Some(trip);
        Ok(LoadOutcome::Loaded)
    }

    /// Submits the update form.
    ///
    /// Busy-guarded: returns `Ok(None)` while an update is already in
    /// flight. Validation runs before anything is sent; a collaborator
    /// failure clears the busy flag, logs, and leaves the overlay and form
    /// untouched. On success the overlay closes and the details reload.
    pub async fn submit_update(&mut self, trips: &impl TripClient) -> Result<Option<()>> {
        if self.is_updating {
            return Ok(None);
        }

        let (destination, range) = self.screen.validate_update()?;
        let (starts_at, ends_at) = match (range.start, range.end) {
            (Some(start), Some(end)) => (start, end),
            // validate_update() already guaranteed completeness
            _ => return Ok(None),
        };

        let params = UpdateTrip {
            id: self.trip_id,
            destination: destination.to_string(),
            starts_at,
            ends_at,
        };

        self.is_updating = true;

        if let Err(e) = trips.update(&params).await {
            self.is_updating = false;
            warn!("Failed to update trip {}: {e}", self.trip_id);
            return Err(e);
        }

        self.screen.close_overlay();
        let outcome = self.load(trips).await;
        self.is_updating = false;
        outcome.map(|_| Some(()))
    }

    #[cfg(test)]
    pub(crate) fn set_updating(&mut self, updating: bool) {
        self.is_updating = updating;
    }
}
