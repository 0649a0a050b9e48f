//! Two-step trip-creation wizard.

use jiff::civil::Date;

use crate::{
    calendar::DateRange,
    error::{Result, TripError},
    guests::GuestList,
};

/// Form step of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Destination and date entry
    TripDetails,

    /// Guest e-mail entry
    AddEmail,
}

/// Overlay currently covering the wizard, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardOverlay {
    /// No overlay open
    #[default]
    None,

    /// Date-range picker, available on the trip-details step
    Calendar,

    /// Guest invite list, available on the add-email step
    GuestList,
}

/// Outcome of a successful [`Wizard::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The wizard moved from trip details to guest entry
    MovedToGuests,

    /// The wizard was already on guest entry; the caller should confirm and
    /// hand off to trip creation
    ReadyToCreate,
}

/// State machine for the trip-creation wizard.
///
/// Owns the destination text, the selected [`DateRange`], and the
/// [`GuestList`]. All transitions validate before mutating.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    overlay: WizardOverlay,
    destination: String,
    range: DateRange,
    guests: GuestList,
}

impl Wizard {
    /// Creates a wizard on the trip-details step with no overlay open.
    pub fn new() -> Self {
        Self {
            step: Step::TripDetails,
            overlay: WizardOverlay::None,
            destination: String::new(),
            range: DateRange::new(),
            guests: GuestList::new(),
        }
    }

    /// Current form step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Currently open overlay.
    pub fn overlay(&self) -> WizardOverlay {
        self.overlay
    }

    /// Destination text as typed so far.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Selected date range.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Invited guests.
    pub fn guests(&self) -> &GuestList {
        &self.guests
    }

    /// Updates the destination text. The field is only editable on the
    /// trip-details step; edits on the guest step are ignored, matching the
    /// read-only rendering of the field there.
    pub fn set_destination(&mut self, destination: &str) {
        if self.step == Step::TripDetails {
            self.destination = destination.to_string();
        }
    }

    /// Applies one calendar tap. Only meaningful while the calendar overlay
    /// is open; taps at any other time are ignored.
    pub fn select_day(&mut self, day: Date) {
        if self.overlay == WizardOverlay::Calendar {
            self.range = self.range.select(day);
        }
    }

    /// Adds a guest e-mail through the invite list.
    pub fn add_guest(&mut self, email: &str) -> Result<()> {
        self.guests.add(email)
    }

    /// Removes a guest e-mail. No-op for an absent address.
    pub fn remove_guest(&mut self, email: &str) {
        self.guests.remove(email);
    }

    /// Moves the wizard forward.
    ///
    /// The guard applies on both steps: the destination must be non-blank
    /// and at least four characters, and the date range complete. From the
    /// trip-details step a successful advance moves to guest entry with the
    /// overlay reset; from the guest step it leaves the step unchanged and
    /// reports [`Advance::ReadyToCreate`] so the caller can run the external
    /// confirmation and hand off to trip creation.
    pub fn advance(&mut self) -> Result<Advance> {
        if self.destination.trim().is_empty() || !self.range.is_complete() {
            return Err(TripError::validation(
                "trip details",
                "fill in the destination and both trip dates",
            ));
        }

        if self.destination.chars().count() < 4 {
            return Err(TripError::validation(
                "destination",
                "must have at least 4 characters",
            ));
        }

        match self.step {
            Step::TripDetails => {
                self.step = Step::AddEmail;
                self.overlay = WizardOverlay::None;
                Ok(Advance::MovedToGuests)
            }
            Step::AddEmail => Ok(Advance::ReadyToCreate),
        }
    }

    /// Returns from guest entry to the trip-details step, resetting any open
    /// overlay. No-op when already on trip details.
    pub fn regress(&mut self) {
        if self.step == Step::AddEmail {
            self.step = Step::TripDetails;
            self.overlay = WizardOverlay::None;
        }
    }

    /// Opens an overlay, implicitly closing any other.
    ///
    /// The calendar is only available on the trip-details step and the guest
    /// list only on the add-email step; a mismatched request is a no-op.
    pub fn open_overlay(&mut self, overlay: WizardOverlay) {
        let allowed = match overlay {
            WizardOverlay::None => true,
            WizardOverlay::Calendar => self.step == Step::TripDetails,
            WizardOverlay::GuestList => self.step == Step::AddEmail,
        };

        if allowed {
            self.overlay = overlay;
        }
    }

    /// Closes whichever overlay is open.
    pub fn close_overlay(&mut self) {
        self.overlay = WizardOverlay::None;
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
