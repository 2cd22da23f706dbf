//! Builder for creating and configuring Seeder instances.

use std::path::{Path, PathBuf};

use super::Seeder;
use crate::error::{IoResultExt, Result, SeederError};

/// Builder for creating and configuring Seeder instances.
#[derive(Debug, Clone, Default)]
pub struct SeederBuilder {
    data_path: Option<PathBuf>,
}

impl SeederBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { data_path: None }
    }

    /// Sets a custom data file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/gardener/tickets.json` or
    /// `~/.local/share/gardener/tickets.json`
    pub fn with_data_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured seeder instance.
    ///
    /// Parent directories of the data file are created; the file itself is
    /// not touched until a run loads or initializes it.
    ///
    /// # Errors
    ///
    /// Returns [`SeederError::Io`] if the parent directory cannot be
    /// created and [`SeederError::XdgDirectory`] if the default path cannot
    /// be resolved.
    pub fn build(self) -> Result<Seeder> {
        let data_path = match self.data_path {
            Some(path) => path,
            None => Self::default_data_path()?,
        };

        if let Some(parent) = data_path.parent() {
            std::fs::create_dir_all(parent).io_context(parent)?;
        }

        Ok(Seeder::new(data_path))
    }

    /// Returns the default data file path following the XDG Base Directory
    /// specification.
    fn default_data_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("gardener")
            .place_data_file("tickets.json")
            .map_err(|e| SeederError::XdgDirectory(e.to_string()))
    }
}
