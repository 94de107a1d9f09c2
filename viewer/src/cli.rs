//! Command-line flags for the `catalog-viewer` binary.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::ViewerError;

/// `catalog-viewer` command arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "catalog-viewer",
    about = "Render the product catalog page for a search query and owner selection",
    version
)]
pub struct CliArgs {
    /// Case-insensitive product name fragment.
    #[arg(long, value_name = "text")]
    pub query: Option<String>,
    /// Owner selection: `All` or a numeric user id.
    #[arg(long, value_name = "id|All")]
    pub user: Option<String>,
    /// Fixture document to load. Overrides `CATALOG_FIXTURES_PATH`.
    #[arg(long = "fixtures", value_name = "path")]
    pub fixtures_path: Option<PathBuf>,
    /// Write the page here instead of stdout. Overrides `CATALOG_OUTPUT_PATH`.
    #[arg(long = "output", value_name = "path")]
    pub output_path: Option<PathBuf>,
}

impl CliArgs {
    /// Parses `args`, the program name first.
    ///
    /// Returns `Ok(None)` once `--help` or `--version` output has been
    /// printed; there is nothing left to render.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Usage`] for unknown flags or missing values.
    pub fn parse_args<I, T>(args: I) -> Result<Option<Self>, ViewerError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(err) if err.use_stderr() => Err(ViewerError::Usage {
                message: err.to_string().trim_end().to_owned(),
            }),
            Err(err) => {
                err.print().map_err(|io_err| ViewerError::WriteError {
                    path: "<stdout>".into(),
                    message: io_err.to_string(),
                })?;
                Ok(None)
            }
        }
    }
}
