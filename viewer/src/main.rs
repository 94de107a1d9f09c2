//! `catalog-viewer`: render the product catalog page to stdout or a file.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};
use viewer::{CatalogSettings, CliArgs, RenderRequest, ViewerError, render_catalog};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "catalog rendering failed");
            drop(writeln!(io::stderr().lock(), "{err}"));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ViewerError> {
    let Some(args) = CliArgs::parse_args(env::args_os())? else {
        return Ok(());
    };
    let settings = CatalogSettings::load_from_env()?;
    init_tracing(settings.json_logs);

    let request = RenderRequest::resolve(&settings, &args)?;
    let outcome = render_catalog(&request)?;

    if outcome.written_to.is_none() {
        io::stdout()
            .lock()
            .write_all(outcome.html.as_bytes())
            .map_err(|err| ViewerError::WriteError {
                path: "<stdout>".into(),
                message: err.to_string(),
            })?;
    }
    Ok(())
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
