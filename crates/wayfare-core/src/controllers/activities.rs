//! Controller for the activities tab.

use jiff::civil::DateTime;
use log::warn;

use crate::{
    clients::ActivityClient,
    error::Result,
    params::CreateActivity,
    schedule::{self, DayBucket},
    state::ActivityForm,
};

/// Controller for the activities tab.
#[derive(Debug, Clone)]
pub struct ActivitiesController {
    trip_id: u64,
    form: ActivityForm,
    buckets: Vec<DayBucket>,
    is_creating: bool,
}

impl ActivitiesController {
    /// Creates a controller for the given trip.
    pub fn new(trip_id: u64) -> Self {
        Self {
            trip_id,
            form: ActivityForm::new(),
            buckets: Vec::new(),
            is_creating: false,
        }
    }

    /// The add-activity form state machine.
    pub fn form(&self) -> &ActivityForm {
        &self.form
    }

    /// Mutable access to the form for feeding user events.
    pub fn form_mut(&mut self) -> &mut ActivityForm {
        &mut self.form
    }

    /// The grouped schedule from the last load.
    pub fn schedule(&self) -> &[DayBucket] {
        &self.buckets
    }

    /// True while a creation request is in flight.
    pub fn is_creating(&self) -> bool {
        self.is_creating
    }

    /// Fetches the trip's activity sections and groups them into the
    /// schedule. Past flags are evaluated against `now` once, here.
    pub async fn load(&mut self, activities: &impl ActivityClient, now: DateTime) -> Result<()> {
        let sections = activities.list_by_trip(self.trip_id).await?;
        self.buckets = schedule::group(&sections, now);
        Ok(())
    }

    /// Submits the add-activity form.
    ///
    /// Busy-guarded; validation runs before anything is sent. On success the
    /// schedule reloads and the form resets; on collaborator failure the
    /// busy flag clears and the form keeps its fields.
    pub async fn submit(
        &mut self,
        activities: &impl ActivityClient,
        now: DateTime,
    ) -> Result<Option<()>> {
        if self.is_creating {
            return Ok(None);
        }

        let draft = self.form.draft()?;

        let params = CreateActivity {
            trip_id: self.trip_id,
            title: draft.title,
            occurs_at: draft.occurs_at,
        };

        self.is_creating = true;

        if let Err(e) = activities.create(&params).await {
            self.is_creating = false;
            warn!("Failed to add activity to trip {}: {e}", self.trip_id);
            return Err(e);
        }

        let outcome = self.load(activities, now).await;
        self.form.reset();
        self.is_creating = false;
        outcome.map(|()| Some(()))
    }

    #[cfg(test)]
    pub(crate) fn set_creating(&mut self, creating: bool) {
        self.is_creating = creating;
    }
}
