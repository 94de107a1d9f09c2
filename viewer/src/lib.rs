//! Static product catalog page renderer.
//!
//! This crate is the presentation layer over the [`catalog`] projector. It
//! owns the filter state, recomputes the visible product list after every
//! change and renders the result as a self-contained HTML page.
//!
//! # Overview
//!
//! - [`CatalogSettings`] and [`CliArgs`] describe where fixtures come from,
//!   where the page goes and which filters apply
//! - [`render_catalog`] loads fixtures, joins them and renders one page
//! - [`CatalogPage`] exposes the filter mutators used by the page controls
//! - [`render_page`] turns a page into HTML

mod app;
mod cli;
mod config;
mod error;
mod output;
mod page;
mod render;

pub use app::{RenderOutcome, RenderRequest, load_fixtures, render_catalog};
pub use cli::CliArgs;
pub use config::CatalogSettings;
pub use error::ViewerError;
pub use output::write_atomic;
pub use page::CatalogPage;
pub use render::{NO_MATCHES_MESSAGE, filter_href, render_page};
