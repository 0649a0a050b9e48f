//! Activity operations and the day-grouped listing query.

use jiff::civil::DateTime;
use jiff::ToSpan;
use rusqlite::params;

use super::parse_text_column;
use crate::{
    error::{DatabaseResultExt, Result, TripError},
    models::{Activity, DaySection},
    params::CreateActivity,
};

const INSERT_ACTIVITY_SQL: &str =
    "INSERT INTO activities (trip_id, title, occurs_at) VALUES (?1, ?2, ?3)";
const SELECT_ACTIVITIES_SQL: &str =
    "SELECT id, trip_id, title, occurs_at FROM activities WHERE trip_id = ?1 ORDER BY occurs_at";

impl super::Database {
    /// Adds an activity to a trip. The activity must fall within the trip's
    /// date span.
    pub fn create_activity(&self, params: &CreateActivity) -> Result<()> {
        let trip = self
            .get_trip(params.trip_id)?
            .ok_or(TripError::TripNotFound { id: params.trip_id })?;

        let day = params.occurs_at.date();
        if day < trip.starts_at || day > trip.ends_at {
            return Err(TripError::validation(
                "occurs_at",
                "activity day is outside the trip dates",
            ));
        }

        self.connection
            .execute(
                INSERT_ACTIVITY_SQL,
                params![
                    params.trip_id as i64,
                    params.title,
                    params.occurs_at.to_string()
                ],
            )
            .db_context("Failed to insert activity")?;

        Ok(())
    }

    /// Lists a trip's activities as one section per day of the trip span.
    ///
    /// Every day from the trip's start to its end gets a section, empty or
    /// not, so the schedule view can render day headers for the whole trip.
    pub fn list_activities(&self, trip_id: u64) -> Result<Vec<DaySection>> {
        let trip = self
            .get_trip(trip_id)?
            .ok_or(TripError::TripNotFound { id: trip_id })?;

        let mut stmt = self
            .connection
            .prepare(SELECT_ACTIVITIES_SQL)
            .db_context("Failed to prepare query")?;

        let activities = stmt
            .query_map(params![trip_id as i64], |row| {
                Ok(Activity {
                    id: row.get::<_, i64>(0)? as u64,
                    trip_id: row.get::<_, i64>(1)? as u64,
                    title: row.get(2)?,
                    occurs_at: parse_text_column::<DateTime>(3, &row.get::<_, String>(3)?)?,
                })
            })
            .db_context("Failed to query activities")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read activity row")?;

        let sections = trip
            .starts_at
            .series(1.day())
            .take_while(|day| *day <= trip.ends_at)
            .map(|day| DaySection {
                date: day,
                activities: activities
                    .iter()
                    .filter(|activity| activity.occurs_at.date() == day)
                    .cloned()
                    .collect(),
            })
            .collect();

        Ok(sections)
    }
}
