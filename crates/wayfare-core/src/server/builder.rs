//! Builder for creating and configuring LocalServer instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::LocalServer;
use crate::{
    db::Database,
    error::{Result, TripError},
};

/// Builder for creating and configuring [`LocalServer`] instances.
#[derive(Debug, Clone, Default)]
pub struct LocalServerBuilder {
    database_path: Option<PathBuf>,
}

impl LocalServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wayfare/wayfare.db` or `~/.local/share/wayfare/wayfare.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured server, creating the database file and schema
    /// if needed.
    pub async fn build(self) -> Result<LocalServer> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TripError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TripError>(())
        })
        .await
        .map_err(|e| TripError::remote(format!("Task join error: {e}")))??;

        Ok(LocalServer::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfare")
            .place_data_file("wayfare.db")
            .map_err(|e| TripError::XdgDirectory(e.to_string()))
    }
}
