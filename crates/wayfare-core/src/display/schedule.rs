//! Day-by-day schedule formatting.

use std::fmt;

use crate::schedule::DayBucket;

/// Markdown rendering of a grouped schedule.
///
/// One header per day (`## Day 5 · Sunday`), then one line per activity with
/// its hour label; past activities are struck through. Days without
/// activities render a placeholder line.
pub struct Schedule<'a>(pub &'a [DayBucket]);

impl fmt::Display for Schedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No activities yet.");
        }

        for bucket in self.0 {
            writeln!(f, "## Day {} · {}", bucket.day_number, bucket.day_name)?;

            if bucket.activities.is_empty() {
                writeln!(f, "_No activities yet_")?;
            }

            for activity in &bucket.activities {
                if activity.is_past {
                    writeln!(f, "- ~~{} — {}~~", activity.hour, activity.title)?;
                } else {
                    writeln!(f, "- {} — {}", activity.hour, activity.title)?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
