//! Controller for the details tab: shared links and the guest list.

use log::warn;

use crate::{
    clients::{LinkClient, ParticipantClient},
    error::{Result, TripError},
    models::{Participant, TripLink},
    params::CreateLink,
    validate,
};

/// Controller for the details tab.
#[derive(Debug, Clone)]
pub struct DetailsController {
    trip_id: u64,
    link_form_open: bool,
    link_title: String,
    link_url: String,
    links: Vec<TripLink>,
    participants: Vec<Participant>,
    is_creating_link: bool,
}

impl DetailsController {
    /// Creates a controller for the given trip.
    pub fn new(trip_id: u64) -> Self {
        Self {
            trip_id,
            link_form_open: false,
            link_title: String::new(),
            link_url: String::new(),
            links: Vec::new(),
            participants: Vec::new(),
            is_creating_link: false,
        }
    }

    /// Links from the last load, in creation order.
    pub fn links(&self) -> &[TripLink] {
        &self.links
    }

    /// Guests from the last load.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// True while the create-link overlay is open.
    pub fn link_form_open(&self) -> bool {
        self.link_form_open
    }

    /// True while a link creation request is in flight.
    pub fn is_creating_link(&self) -> bool {
        self.is_creating_link
    }

    /// Opens the create-link overlay.
    pub fn open_link_form(&mut self) {
        self.link_form_open = true;
    }

    /// Closes the create-link overlay, keeping typed fields.
    pub fn close_link_form(&mut self) {
        self.link_form_open = false;
    }

    /// Updates the link title field.
    pub fn set_link_title(&mut self, title: &str) {
        self.link_title = title.to_string();
    }

    /// Updates the link URL field.
    pub fn set_link_url(&mut self, url: &str) {
        self.link_url = url.to_string();
    }

    /// Loads both lists shown on the tab.
    pub async fn load(
        &mut self,
        links: &impl LinkClient,
        participants: &impl ParticipantClient,
    ) -> Result<()> {
        self.links = links.list_by_trip(self.trip_id).await?;
        self.participants = participants.list_by_trip(self.trip_id).await?;
        Ok(())
    }

    /// Submits the create-link form.
    ///
    /// Guards: the title must be non-blank and the URL must pass syntax
    /// validation, both checked before anything is sent. Busy-guarded like
    /// every submission. On success the fields reset, the overlay closes,
    /// and the link list reloads.
    pub async fn submit_link(&mut self, links: &impl LinkClient) -> Result<Option<()>> {
        if self.is_creating_link {
            return Ok(None);
        }

        if self.link_title.trim().is_empty() {
            return Err(TripError::validation("link title", "give the link a title"));
        }

        let url = self.link_url.trim().to_string();
        if !validate::is_url(&url) {
            return Err(TripError::validation("link url", "invalid link"));
        }

        let params = CreateLink {
            trip_id: self.trip_id,
            title: self.link_title.clone(),
            url,
        };

        self.is_creating_link = true;

        if let Err(e) = links.create(&params).await {
            self.is_creating_link = false;
            warn!("Failed to create link for trip {}: {e}", self.trip_id);
            return Err(e);
        }

        self.links = match links.list_by_trip(self.trip_id).await {
            Ok(links) => links,
            Err(e) => {
                self.is_creating_link = false;
                return Err(e);
            }
        };

        self.link_title.clear();
        self.link_url.clear();
        self.link_form_open = false;
        self.is_creating_link = false;
        Ok(Some(()))
    }
}
