//! Controller for the start screen: resume lookup and the creation wizard.

use log::warn;

use crate::{
    clients::{CurrentTripStore, TripClient},
    error::Result,
    models::Trip,
    params::CreateTrip,
    state::{Advance, Wizard},
};

/// Outcome of the one-shot startup lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Bootstrap {
    /// A previously saved trip still exists; go straight to its screen
    Resume(Trip),

    /// Nothing to resume; show a fresh wizard
    Fresh,
}

/// Controller for the start screen.
#[derive(Debug, Clone, Default)]
pub struct HomeController {
    wizard: Wizard,
    is_creating: bool,
}

impl HomeController {
    /// Creates a controller with a fresh wizard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The wizard state machine.
    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Mutable access to the wizard for feeding user events.
    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    /// True while a creation request is in flight.
    pub fn is_creating(&self) -> bool {
        self.is_creating
    }

    /// One-shot startup lookup of a previously saved trip.
    ///
    /// A saved ID that no longer resolves, or any collaborator failure, falls
    /// through to a fresh wizard; resuming is best effort and never blocks
    /// the start screen.
    pub async fn bootstrap(
        trips: &impl TripClient,
        store: &impl CurrentTripStore,
    ) -> Bootstrap {
        let trip_id = match store.get().await {
            Ok(Some(trip_id)) => trip_id,
            Ok(None) => return Bootstrap::Fresh,
            Err(e) => {
                warn!("Failed to read saved trip: {e}");
                return Bootstrap::Fresh;
            }
        };

        match trips.get_by_id(trip_id).await {
            Ok(Some(trip)) => Bootstrap::Resume(trip),
            Ok(None) => Bootstrap::Fresh,
            Err(e) => {
                warn!("Failed to load saved trip {trip_id}: {e}");
                Bootstrap::Fresh
            }
        }
    }

    /// Handles the wizard's forward button.
    ///
    /// Validates and advances the wizard; on the guest step this creates the
    /// trip and saves it as the current one, returning the new trip ID. A
    /// step change (details to guests) returns `Ok(None)`, as does a press
    /// while a creation is already in flight.
    pub async fn submit(
        &mut self,
        trips: &impl TripClient,
        store: &impl CurrentTripStore,
    ) -> Result<Option<u64>> {
        if self.is_creating {
            return Ok(None);
        }

        if self.wizard.advance()? == Advance::MovedToGuests {
            return Ok(None);
        }

        let range = self.wizard.range();
        let (starts_at, ends_at) = match (range.start, range.end) {
            (Some(start), Some(end)) => (start, end),
            // advance() already guaranteed completeness
            _ => return Ok(None),
        };

        let params = CreateTrip {
            destination: self.wizard.destination().to_string(),
            starts_at,
            ends_at,
            emails_to_invite: self.wizard.guests().emails().to_vec(),
        };

        self.is_creating = true;

        let trip_id = match trips.create(&params).await {
            Ok(trip_id) => trip_id,
            Err(e) => {
                self.is_creating = false;
                warn!("Failed to create trip: {e}");
                return Err(e);
            }
        };

        if let Err(e) = store.save(trip_id).await {
            self.is_creating = false;
            warn!("Failed to save trip {trip_id} on device: {e}");
            return Err(e);
        }

        self.is_creating = false;
        Ok(Some(trip_id))
    }

    #[cfg(test)]
    pub(crate) fn set_creating(&mut self, creating: bool) {
        self.is_creating = creating;
    }
}
