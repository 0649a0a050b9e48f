//! Calendar interval selection.
//!
//! This module turns a sequence of raw day taps on a calendar into an ordered
//! start/end range, and derives the set of marked days the calendar widget
//! needs to render the selection. The selection policy is deliberately
//! forgiving: taps never error, they only restart or reorder the range.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

mod marked;


pub use marked::{DayMarking, MarkedDays};

/// An ordered pair of calendar days selected for a trip.
///
/// Invariant: when both ends are present, `start <= end`. `end` is never set
/// without `start`. The only way to mutate a range is [`DateRange::select`],
/// which maintains both invariants for any tap sequence.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    /// First day of the range
    pub start: Option<Date>,

    /// Last day of the range (inclusive)
    pub end: Option<Date>,
}

impl DateRange {
    /// Creates an empty range with neither end selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a complete range from an ordered pair of days.
    pub fn from_span(start: Date, end: Date) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Applies one calendar tap to the range.
    ///
    /// Policy:
    /// - No start yet, or both ends already set: the tap restarts selection.
    ///   The tapped day becomes the new start and the end is cleared.
    /// - Only start set and the tap is before it: the roles swap, so the
    ///   range stays ordered without the user tapping chronologically.
    /// - Only start set otherwise: the tap becomes the end. Tapping the
    ///   start day again yields a single-day range.
    pub fn select(self, day: Date) -> Self {
        match (self.start, self.end) {
            (Some(start), None) => {
                if day < start {
                    Self {
                        start: Some(day),
                        end: Some(start),
                    }
                } else {
                    Self {
                        start: Some(start),
                        end: Some(day),
                    }
                }
            }
            _ => Self {
                start: Some(day),
                end: None,
            },
        }
    }

    /// True once both ends of the range are selected.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Human-readable `DD Mon - DD Mon` label, or `None` while incomplete.
    ///
    /// Display-only; the authoritative state is the pair of days itself.
    pub fn label(&self) -> Option<String> {
        let (start, end) = (self.start?, self.end?);
        Some(format!(
            "{} - {}",
            start.strftime("%d %b"),
            end.strftime("%d %b")
        ))
    }

    /// Derives the marked-day set for rendering this range.
    ///
    /// See [`marked::marked_days`]; regenerated from scratch on every call so
    /// no stale entries survive a restarted selection.
    pub fn marked_days(&self) -> MarkedDays {
        marked::marked_days(self)
    }
}
