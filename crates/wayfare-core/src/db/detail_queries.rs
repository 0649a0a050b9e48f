//! Link, participant, and current-trip queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TripError},
    models::{Participant, TripLink},
    params::CreateLink,
};

const INSERT_LINK_SQL: &str = "INSERT INTO links (trip_id, title, url) VALUES (?1, ?2, ?3)";
const SELECT_LINKS_SQL: &str = "SELECT id, trip_id, title, url FROM links WHERE trip_id = ?1 ORDER BY id";
const SELECT_PARTICIPANTS_SQL: &str =
    "SELECT id, trip_id, name, email, is_confirmed FROM participants WHERE trip_id = ?1 ORDER BY id";
const UPSERT_CURRENT_TRIP_SQL: &str =
    "INSERT INTO current_trip (id, trip_id) VALUES (1, ?1) ON CONFLICT(id) DO UPDATE SET trip_id = ?1";
const SELECT_CURRENT_TRIP_SQL: &str = "SELECT trip_id FROM current_trip WHERE id = 1";
const DELETE_CURRENT_TRIP_SQL: &str = "DELETE FROM current_trip WHERE id = 1";

impl super::Database {
    /// Attaches a link to a trip.
    pub fn create_link(&self, params: &CreateLink) -> Result<()> {
        if self.get_trip(params.trip_id)?.is_none() {
            return Err(TripError::TripNotFound { id: params.trip_id });
        }

        self.connection
            .execute(
                INSERT_LINK_SQL,
                params![params.trip_id as i64, params.title, params.url],
            )
            .db_context("Failed to insert link")?;

        Ok(())
    }

    /// Lists a trip's links in creation order.
    pub fn list_links(&self, trip_id: u64) -> Result<Vec<TripLink>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LINKS_SQL)
            .db_context("Failed to prepare query")?;

        let links = stmt
            .query_map(params![trip_id as i64], |row| {
                Ok(TripLink {
                    id: row.get::<_, i64>(0)? as u64,
                    trip_id: row.get::<_, i64>(1)? as u64,
                    title: row.get(2)?,
                    url: row.get(3)?,
                })
            })
            .db_context("Failed to query links")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read link row");
        links
    }

    /// Lists a trip's invited guests in invitation order.
    pub fn list_participants(&self, trip_id: u64) -> Result<Vec<Participant>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PARTICIPANTS_SQL)
            .db_context("Failed to prepare query")?;

        let participants = stmt
            .query_map(params![trip_id as i64], |row| {
                Ok(Participant {
                    id: row.get::<_, i64>(0)? as u64,
                    trip_id: row.get::<_, i64>(1)? as u64,
                    name: row.get(2)?,
                    email: row.get(3)?,
                    is_confirmed: row.get(4)?,
                })
            })
            .db_context("Failed to query participants")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read participant row");
        participants
    }

    /// Remembers the given trip as the device's current trip.
    pub fn save_current_trip(&self, trip_id: u64) -> Result<()> {
        self.connection
            .execute(UPSERT_CURRENT_TRIP_SQL, params![trip_id as i64])
            .db_context("Failed to save current trip")?;
        Ok(())
    }

    /// Returns the remembered trip ID, if any.
    pub fn get_current_trip(&self) -> Result<Option<u64>> {
        self.connection
            .query_row(SELECT_CURRENT_TRIP_SQL, [], |row| {
                row.get::<_, i64>(0).map(|id| id as u64)
            })
            .optional()
            .db_context("Failed to query current trip")
    }

    /// Forgets the remembered trip. No-op when nothing was remembered.
    pub fn clear_current_trip(&self) -> Result<()> {
        self.connection
            .execute(DELETE_CURRENT_TRIP_SQL, [])
            .db_context("Failed to clear current trip")?;
        Ok(())
    }
}
