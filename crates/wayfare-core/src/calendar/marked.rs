//! Derived day markings for calendar rendering.

use std::collections::BTreeMap;

use jiff::civil::Date;
use jiff::ToSpan;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// Rendering descriptor for one day of a selected range.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayMarking {
    /// Day is part of the current selection
    pub selected: bool,

    /// Day is the first of the range
    pub is_start: bool,

    /// Day is the last of the range
    pub is_end: bool,

    /// Day lies within a completed range
    pub in_range: bool,
}

/// Mapping from calendar day to its rendering descriptor, ordered by date.
pub type MarkedDays = BTreeMap<Date, DayMarking>;

/// Builds the marked-day set for a range.
///
/// Total over all range states: empty range yields an empty map, a start-only
/// range marks that single day, and a complete range marks every day from
/// start to end inclusive, with the first flagged `is_start` and the last
/// `is_end`.
pub fn marked_days(range: &DateRange) -> MarkedDays {
    let mut marked = MarkedDays::new();

    let Some(start) = range.start else {
        return marked;
    };

    let Some(end) = range.end else {
        marked.insert(
            start,
            DayMarking {
                selected: true,
                is_start: true,
                ..DayMarking::default()
            },
        );
        return marked;
    };

    for day in start.series(1.day()).take_while(|day| *day <= end) {
        marked.insert(
            day,
            DayMarking {
                selected: true,
                is_start: day == start,
                is_end: day == end,
                in_range: true,
            },
        );
    }

    marked
}
