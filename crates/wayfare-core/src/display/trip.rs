//! Trip headline formatting.

use std::fmt;

use crate::{calendar::DateRange, models::Trip};

/// Maximum destination length in the headline before truncation.
const MAX_DESTINATION_LEN: usize = 12;

/// One-line `destination, DD Mon - DD Mon` headline for the trip screen.
///
/// Long destinations are truncated with an ellipsis so the headline fits the
/// input field it is rendered into.
pub struct TripHeadline<'a>(pub &'a Trip);

impl fmt::Display for TripHeadline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trip = self.0;

        let destination: String = if trip.destination.chars().count() > MAX_DESTINATION_LEN {
            let truncated: String = trip.destination.chars().take(MAX_DESTINATION_LEN).collect();
            format!("{truncated}...")
        } else {
            trip.destination.clone()
        };

        let range = DateRange::from_span(trip.starts_at, trip.ends_at);
        match range.label() {
            Some(label) => write!(f, "{destination}, {label}"),
            None => write!(f, "{destination}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::Timestamp;

    use super::*;

    fn trip(destination: &str) -> Trip {
        Trip {
            id: 1,
            destination: destination.to_string(),
            starts_at: date(2024, 5, 5),
            ends_at: date(2024, 5, 10),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_headline_short_destination() {
        let headline = TripHeadline(&trip("Paris")).to_string();
        assert_eq!(headline, "Paris, 05 May - 10 May");
    }

    #[test]
    fn test_headline_truncates_long_destination() {
        let headline = TripHeadline(&trip("Florianopolis, Brazil")).to_string();
        assert_eq!(headline, "Florianopoli..., 05 May - 10 May");
    }
}
