//! Startup orchestration: load fixtures, join, filter, render, write.

use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use catalog::{CatalogFixtures, CatalogProjector, CatalogSource, FilterState, UserFilter};
use tracing::info;

use crate::cli::CliArgs;
use crate::config::CatalogSettings;
use crate::error::ViewerError;
use crate::output::write_atomic;
use crate::page::CatalogPage;
use crate::render::render_page;

/// Everything needed to render one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Fixture document to load.
    pub fixtures_path: Utf8PathBuf,
    /// Destination file; `None` means the caller prints the page.
    pub output_path: Option<Utf8PathBuf>,
    /// Filters to apply.
    pub state: FilterState,
}

impl RenderRequest {
    /// Merges settings with command-line flags; flags win.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidUser`] when `--user` is neither `All`
    /// nor a numeric id, and [`ViewerError::NonUtf8Path`] when a path is not
    /// valid UTF-8.
    pub fn resolve(settings: &CatalogSettings, args: &CliArgs) -> Result<Self, ViewerError> {
        let fixtures_path = args
            .fixtures_path
            .clone()
            .unwrap_or_else(|| settings.fixtures_path());
        let output_path = args
            .output_path
            .clone()
            .or_else(|| settings.output_path.clone());
        let user = args
            .user
            .as_deref()
            .map(str::parse::<UserFilter>)
            .transpose()?
            .unwrap_or_default();
        let state = FilterState::new(args.query.clone().unwrap_or_default(), user);

        Ok(Self {
            fixtures_path: utf8_path(fixtures_path)?,
            output_path: output_path.map(utf8_path).transpose()?,
            state,
        })
    }
}

/// Result of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    /// The complete HTML document.
    pub html: String,
    /// Number of products in the table.
    pub visible: usize,
    /// Where the page was written, if a file was requested.
    pub written_to: Option<Utf8PathBuf>,
}

/// Loads fixtures, renders the page for `request` and writes it if asked.
///
/// # Errors
///
/// Returns [`ViewerError`] when the fixtures cannot be loaded, their
/// references do not resolve, or the output cannot be written.
pub fn render_catalog(request: &RenderRequest) -> Result<RenderOutcome, ViewerError> {
    let fixtures = load_fixtures(&request.fixtures_path)?;
    let projector = CatalogProjector::new(&fixtures)?;
    info!(
        path = %request.fixtures_path,
        users = fixtures.users().len(),
        categories = fixtures.categories().len(),
        products = projector.products().len(),
        "catalog fixtures loaded"
    );

    let page = CatalogPage::with_state(projector, request.state.clone());
    let html = render_page(&page);
    let visible = page.visible().len();

    if let Some(path) = &request.output_path {
        let (dir, file_name) = open_parent(path)?;
        write_atomic(&dir, file_name, &html)?;
        info!(path = %path, visible, "catalog page written");
    } else {
        info!(visible, "catalog page rendered");
    }

    Ok(RenderOutcome {
        html,
        visible,
        written_to: request.output_path.clone(),
    })
}

/// Loads the fixture document at `path`.
///
/// # Errors
///
/// Returns [`ViewerError`] when the directory cannot be opened or the file
/// cannot be read or parsed.
pub fn load_fixtures(path: &Utf8Path) -> Result<CatalogFixtures, ViewerError> {
    let (dir, file_name) = open_parent(path)?;
    Ok(CatalogFixtures::from_file(&dir, file_name)?)
}

fn open_parent(path: &Utf8Path) -> Result<(Dir, &Utf8Path), ViewerError> {
    let file_name = path.file_name().ok_or_else(|| ViewerError::NotAFile {
        path: path.to_path_buf(),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir =
        Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| ViewerError::OpenDir {
            path: parent.to_path_buf(),
            message: err.to_string(),
        })?;
    Ok((dir, Utf8Path::new(file_name)))
}

fn utf8_path(path: PathBuf) -> Result<Utf8PathBuf, ViewerError> {
    Utf8PathBuf::from_path_buf(path).map_err(|path| ViewerError::NonUtf8Path { path })
}
