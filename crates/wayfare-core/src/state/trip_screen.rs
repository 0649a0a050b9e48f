//! Post-creation trip screen.

use jiff::civil::Date;

use crate::{
    calendar::DateRange,
    error::{Result, TripError},
};

/// Overlay currently covering the trip screen, if any.
///
/// The calendar is a child of the update-trip overlay: closing it returns to
/// `UpdateTrip`, never straight to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TripOverlay {
    /// No overlay open
    #[default]
    None,

    /// Destination/date edit form
    UpdateTrip,

    /// Date-range picker nested inside the update form
    UpdateCalendar,
}

/// Content tab shown under the trip headline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Day-by-day activity schedule
    #[default]
    Activities,

    /// Links and guest list
    Details,
}

/// State machine for the trip screen.
///
/// The overlay and the tab are independent axes; switching tabs never touches
/// the overlay and vice versa.
#[derive(Debug, Clone, Default)]
pub struct TripScreen {
    overlay: TripOverlay,
    tab: Tab,
    destination: String,
    range: DateRange,
}

impl TripScreen {
    /// Creates a trip screen on the activities tab with no overlay open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently open overlay.
    pub fn overlay(&self) -> TripOverlay {
        self.overlay
    }

    /// Currently selected tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Destination text in the update form.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Date range picked in the update form.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Switches the content tab. Independent of the overlay axis.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Seeds the update form with the trip's current destination.
    pub fn set_destination(&mut self, destination: &str) {
        self.destination = destination.to_string();
    }

    /// Opens the update-trip overlay, implicitly closing any other.
    pub fn open_update_trip(&mut self) {
        self.overlay = TripOverlay::UpdateTrip;
    }

    /// Opens the nested date picker. Only reachable from inside the
    /// update-trip overlay; otherwise a no-op.
    pub fn open_update_calendar(&mut self) {
        if self.overlay == TripOverlay::UpdateTrip {
            self.overlay = TripOverlay::UpdateCalendar;
        }
    }

    /// Closes the topmost overlay.
    ///
    /// The nested calendar returns to its parent update form on both confirm
    /// and cancel; only the update form itself closes back to the bare
    /// screen.
    pub fn close_overlay(&mut self) {
        self.overlay = match self.overlay {
            TripOverlay::UpdateCalendar => TripOverlay::UpdateTrip,
            _ => TripOverlay::None,
        };
    }

    /// Applies one calendar tap inside the nested date picker. Taps while
    /// the picker is closed are ignored.
    pub fn select_day(&mut self, day: Date) {
        if self.overlay == TripOverlay::UpdateCalendar {
            self.range = self.range.select(day);
        }
    }

    /// Validates the update form, returning the destination and range to
    /// submit. Mutates nothing.
    pub fn validate_update(&self) -> Result<(&str, DateRange)> {
        if self.destination.is_empty() || !self.range.is_complete() {
            return Err(TripError::validation(
                "update trip",
                "fill in the destination and both trip dates",
            ));
        }

        Ok((&self.destination, self.range))
    }
}
