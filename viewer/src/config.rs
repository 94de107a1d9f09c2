//! Viewer configuration loaded via OrthoConfig.

use std::ffi::OsString;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::ViewerError;

const PROGRAM_NAME: &str = "catalog-viewer";

fn default_fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalog.json")
}

/// Settings shared by every viewer invocation.
///
/// The filter itself comes from command-line flags; `--fixtures` and
/// `--output` take precedence over these values, see
/// [`crate::RenderRequest::resolve`].
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG")]
pub struct CatalogSettings {
    /// Emit log events as JSON lines; plain text otherwise.
    #[ortho_config(default = true)]
    pub json_logs: bool,
    /// Fixture document to load.
    pub fixtures_path: Option<PathBuf>,
    /// Destination for the rendered page; stdout when absent.
    pub output_path: Option<PathBuf>,
}

impl CatalogSettings {
    /// Loads settings from configuration files and `CATALOG_*` variables.
    ///
    /// Command-line arguments are parsed separately, so only the program
    /// name is handed to the loader.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Config`] when a source cannot be read or a
    /// value has the wrong type.
    pub fn load_from_env() -> Result<Self, ViewerError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|err| ViewerError::Config {
            message: err.to_string(),
        })
    }

    /// Return the configured fixtures path, falling back to the bundled file.
    #[must_use]
    pub fn fixtures_path(&self) -> PathBuf {
        self.fixtures_path
            .clone()
            .unwrap_or_else(default_fixtures_path)
    }
}
