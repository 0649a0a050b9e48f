//! Add-activity form with its nested date picker.

use jiff::civil::{Date, DateTime};

use crate::error::{Result, TripError};

/// Overlay currently covering the activities tab, if any.
///
/// `PickDate` is a child of `NewActivity` and closes back into it, mirroring
/// the trip screen's nested calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityOverlay {
    /// No overlay open
    #[default]
    None,

    /// Add-activity form
    NewActivity,

    /// Single-day picker nested inside the form
    PickDate,
}

/// A validated activity ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDraft {
    /// Title as typed
    pub title: String,

    /// Combined day + hour the activity takes place
    pub occurs_at: DateTime,
}

/// State machine for the add-activity form.
#[derive(Debug, Clone, Default)]
pub struct ActivityForm {
    overlay: ActivityOverlay,
    title: String,
    day: Option<Date>,
    hour: String,
}

impl ActivityForm {
    /// Creates a form with no overlay open and empty fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently open overlay.
    pub fn overlay(&self) -> ActivityOverlay {
        self.overlay
    }

    /// Title as typed so far.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Day picked for the activity, if any.
    pub fn day(&self) -> Option<Date> {
        self.day
    }

    /// Sanitized hour input.
    pub fn hour(&self) -> &str {
        &self.hour
    }

    /// Opens the add-activity form.
    pub fn open_form(&mut self) {
        self.overlay = ActivityOverlay::NewActivity;
    }

    /// Opens the nested day picker. Only reachable from inside the form.
    pub fn open_date_picker(&mut self) {
        if self.overlay == ActivityOverlay::NewActivity {
            self.overlay = ActivityOverlay::PickDate;
        }
    }

    /// Closes the topmost overlay; the nested picker returns to the form.
    pub fn close_overlay(&mut self) {
        self.overlay = match self.overlay {
            ActivityOverlay::PickDate => ActivityOverlay::NewActivity,
            _ => ActivityOverlay::None,
        };
    }

    /// Updates the title field.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Updates the hour field, stripping decimal separators typed into the
    /// numeric input.
    pub fn set_hour(&mut self, raw: &str) {
        self.hour = raw.replace(['.', ','], "");
    }

    /// Picks the activity day. Taps while the picker is closed are ignored.
    pub fn pick_day(&mut self, day: Date) {
        if self.overlay == ActivityOverlay::PickDate {
            self.day = Some(day);
        }
    }

    /// Validates the form and produces a draft to submit. Mutates nothing;
    /// the caller resets the form via [`ActivityForm::reset`] only after the
    /// submission actually succeeds.
    pub fn draft(&self) -> Result<ActivityDraft> {
        if self.title.is_empty() || self.hour.is_empty() {
            return Err(TripError::validation(
                "activity",
                "fill in the title, day and hour",
            ));
        }

        let day = self.day.ok_or_else(|| {
            TripError::validation("activity", "fill in the title, day and hour")
        })?;

        let hour: i8 = self
            .hour
            .parse()
            .map_err(|_| TripError::validation("hour", "must be a number"))?;
        if !(0..=23).contains(&hour) {
            return Err(TripError::validation("hour", "must be between 0 and 23"));
        }

        Ok(ActivityDraft {
            title: self.title.clone(),
            occurs_at: day.at(hour, 0, 0, 0),
        })
    }

    /// Clears all fields and closes the overlay after a successful
    /// submission.
    pub fn reset(&mut self) {
        self.title.clear();
        self.hour.clear();
        self.day = None;
        self.overlay = ActivityOverlay::None;
    }
}
