//! Day-by-day schedule derived from server-grouped activity sections.
//!
//! The server already partitions activities by calendar day (one
//! [`DaySection`] per day of the trip span); this module performs the
//! ordering and flag pass that turns those sections into render-ready
//! buckets.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

use crate::models::DaySection;

/// An activity prepared for display within a day bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledActivity {
    /// Unique identifier for the activity
    pub id: u64,

    /// Brief title of the activity
    pub title: String,

    /// Rendered `hh:mm am` time-of-day label
    pub hour: String,

    /// Whether the activity was already over when the schedule was built
    pub is_past: bool,
}

/// One calendar day of the schedule with its ordered activities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayBucket {
    /// Calendar day this bucket covers
    pub date: jiff::civil::Date,

    /// Day-of-month number for the section header
    pub day_number: i8,

    /// Full weekday name for the section header
    pub day_name: String,

    /// Activities on this day, ordered by their rendered hour label
    pub activities: Vec<ScheduledActivity>,
}

/// Groups server sections into ordered day buckets.
///
/// Buckets come out ordered by date ascending. Within a bucket, activities
/// are ordered by comparing their rendered `hh:mm am` labels as strings, not
/// their timestamps. With zero-padded 12-hour rendering the string order
/// coincides with clock order inside each half of the day, but "01:00 pm"
/// still sorts before "11:00 am". The schedule view is defined by this label
/// order (see DESIGN.md).
///
/// `is_past` is evaluated once against `now` at grouping time and does not
/// update afterwards.
pub fn group(sections: &[DaySection], now: DateTime) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = sections
        .iter()
        .map(|section| {
            let mut activities: Vec<ScheduledActivity> = section
                .activities
                .iter()
                .map(|activity| ScheduledActivity {
                    id: activity.id,
                    title: activity.title.clone(),
                    hour: activity.occurs_at.strftime("%I:%M %P").to_string(),
                    is_past: activity.occurs_at < now,
                })
                .collect();

            activities.sort_by(|a, b| a.hour.cmp(&b.hour));

            DayBucket {
                date: section.date,
                day_number: section.date.day(),
                day_name: section.date.strftime("%A").to_string(),
                activities,
            }
        })
        .collect();

    buckets.sort_by_key(|bucket| bucket.date);
    buckets
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, DateTime};

    use super::*;
    use crate::models::Activity;

    fn activity(id: u64, occurs_at: DateTime) -> Activity {
        Activity {
            id,
            trip_id: 1,
            title: format!("activity {id}"),
            occurs_at,
        }
    }

    #[test]
    fn test_morning_activities_sort_by_hour_string() {
        let day = date(2024, 5, 5);
        let sections = vec![DaySection {
            date: day,
            activities: vec![
                activity(1, day.at(10, 0, 0, 0)),
                activity(2, day.at(9, 30, 0, 0)),
            ],
        }];

        let buckets = group(&sections, day.at(8, 0, 0, 0));

        let hours: Vec<&str> = buckets[0]
            .activities
            .iter()
            .map(|a| a.hour.as_str())
            .collect();
        assert_eq!(hours, ["09:30 am", "10:00 am"]);
    }

    #[test]
    fn test_ordering_is_string_comparison_not_clock_comparison() {
        // Zero padding makes "09:00 am" < "10:00 am" hold as strings, which
        // coincides with clock order. Across the am/pm boundary the string
        // rule diverges: "01:00 pm" < "11:00 am" lexicographically even
        // though it is later in the day. The grouper must follow the string
        // rule.
        let day = date(2024, 5, 5);
        let sections = vec![DaySection {
            date: day,
            activities: vec![
                activity(1, day.at(11, 0, 0, 0)),
                activity(2, day.at(13, 0, 0, 0)),
            ],
        }];

        let buckets = group(&sections, day.at(8, 0, 0, 0));

        let hours: Vec<&str> = buckets[0]
            .activities
            .iter()
            .map(|a| a.hour.as_str())
            .collect();
        assert_eq!(hours, ["01:00 pm", "11:00 am"]);
        assert!("01:00 pm" < "11:00 am");
    }

    #[test]
    fn test_is_past_evaluated_against_now() {
        let day = date(2024, 5, 5);
        let sections = vec![DaySection {
            date: day,
            activities: vec![
                activity(1, day.at(9, 0, 0, 0)),
                activity(2, day.at(15, 0, 0, 0)),
            ],
        }];

        let buckets = group(&sections, day.at(12, 0, 0, 0));

        let morning = buckets[0].activities.iter().find(|a| a.id == 1).unwrap();
        let afternoon = buckets[0].activities.iter().find(|a| a.id == 2).unwrap();
        assert!(morning.is_past);
        assert!(!afternoon.is_past);
    }

    #[test]
    fn test_buckets_ordered_by_date_with_headers() {
        let sections = vec![
            DaySection {
                date: date(2024, 5, 6),
                activities: vec![],
            },
            DaySection {
                date: date(2024, 5, 5),
                activities: vec![],
            },
        ];

        let buckets = group(&sections, date(2024, 5, 5).at(0, 0, 0, 0));

        assert_eq!(buckets[0].date, date(2024, 5, 5));
        assert_eq!(buckets[0].day_number, 5);
        assert_eq!(buckets[0].day_name, "Sunday");
        assert_eq!(buckets[1].date, date(2024, 5, 6));
        assert_eq!(buckets[1].day_name, "Monday");
    }

    #[test]
    fn test_empty_sections_produce_empty_buckets() {
        let sections = vec![DaySection {
            date: date(2024, 5, 5),
            activities: vec![],
        }];

        let buckets = group(&sections, date(2024, 5, 5).at(0, 0, 0, 0));

        assert_eq!(buckets.len(), 1);
        assert!(buckets[0].activities.is_empty());
    }
}
