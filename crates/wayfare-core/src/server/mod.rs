//! Local implementation of the collaborator contracts.
//!
//! [`LocalServer`] implements every client trait from [`crate::clients`] on
//! top of the SQLite store in [`crate::db`]. Blocking database work runs on
//! the tokio blocking pool; each operation opens its own short-lived
//! connection, keeping the server `Send + Sync` without shared connection
//! state.

use std::path::PathBuf;

use tokio::task;

use crate::error::{Result, TripError};

mod builder;
mod client_impls;

pub use builder::LocalServerBuilder;

/// Local, file-backed trip server.
#[derive(Debug, Clone)]
pub struct LocalServer {
    db_path: PathBuf,
}

impl LocalServer {
    /// Creates a new server over the given database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Runs a blocking database closure on the blocking pool.
    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(crate::db::Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = crate::db::Database::new(&db_path)?;
            op(db)
        })
        .await
        .map_err(|e| TripError::remote(format!("Task join error: {e}")))?
    }
}
