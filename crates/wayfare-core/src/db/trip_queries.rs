//! Trip CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::parse_text_column;
use crate::{
    error::{DatabaseResultExt, Result, TripError},
    models::Trip,
    params::{CreateTrip, UpdateTrip},
};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (destination, starts_at, ends_at, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_PARTICIPANT_SQL: &str =
    "INSERT INTO participants (trip_id, email, is_confirmed) VALUES (?1, ?2, 0)";
const SELECT_TRIP_SQL: &str =
    "SELECT id, destination, starts_at, ends_at, created_at, updated_at FROM trips WHERE id = ?1";
const UPDATE_TRIP_SQL: &str =
    "UPDATE trips SET destination = ?1, starts_at = ?2, ends_at = ?3, updated_at = ?4 WHERE id = ?5";

impl super::Database {
    /// Creates a trip together with participant rows for each invited
    /// e-mail, in one transaction.
    pub fn create_trip(&mut self, params: &CreateTrip) -> Result<Trip> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_TRIP_SQL,
            params![
                params.destination,
                params.starts_at.to_string(),
                params.ends_at.to_string(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert trip")?;

        let id = tx.last_insert_rowid() as u64;

        for email in &params.emails_to_invite {
            tx.execute(INSERT_PARTICIPANT_SQL, params![id as i64, email])
                .db_context("Failed to insert participant")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Trip {
            id,
            destination: params.destination.clone(),
            starts_at: params.starts_at,
            ends_at: params.ends_at,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a trip by its ID.
    pub fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRIP_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], |row| {
            Ok(Trip {
                id: row.get::<_, i64>(0)? as u64,
                destination: row.get(1)?,
                starts_at: parse_text_column(2, &row.get::<_, String>(2)?)?,
                ends_at: parse_text_column(3, &row.get::<_, String>(3)?)?,
                created_at: parse_text_column(4, &row.get::<_, String>(4)?)?,
                updated_at: parse_text_column(5, &row.get::<_, String>(5)?)?,
            })
        })
        .optional()
        .db_context("Failed to query trip")
    }

    /// Updates a trip's destination and date span.
    pub fn update_trip(&self, params: &UpdateTrip) -> Result<()> {
        let updated = self
            .connection
            .execute(
                UPDATE_TRIP_SQL,
                rusqlite::params![
                    params.destination,
                    params.starts_at.to_string(),
                    params.ends_at.to_string(),
                    Timestamp::now().to_string(),
                    params.id as i64
                ],
            )
            .db_context("Failed to update trip")?;

        if updated == 0 {
            return Err(TripError::TripNotFound { id: params.id });
        }

        Ok(())
    }
}
