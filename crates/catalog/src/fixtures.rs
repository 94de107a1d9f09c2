//! Fixture document types and JSON parsing.
//!
//! The fixture document bundles the three source collections under a version
//! number. It is loaded once at startup and then only read through the
//! [`CatalogSource`] port.

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;

use crate::error::{Collection, FixtureError};
use crate::model::{Category, Product, User};
use crate::projector::CatalogSource;

/// Current supported fixture document version.
const SUPPORTED_VERSION: u32 = 1;

/// Catalog fixtures holding users, categories and products.
///
/// # Example
///
/// ```
/// use catalog::{CatalogFixtures, CatalogSource};
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Max", "sex": "m"}],
///     "categories": [{"id": 1, "title": "Dairy", "icon": "🥛", "ownerId": 1}],
///     "products": [{"id": 1, "name": "Milk", "categoryId": 1}]
/// }"#;
///
/// let fixtures = CatalogFixtures::from_json(json).expect("valid fixtures");
/// assert_eq!(fixtures.products().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFixtures {
    version: u32,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl CatalogFixtures {
    /// Builds fixtures from already constructed collections.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::DuplicateId`] if any collection repeats an id.
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, FixtureError> {
        Self::from_raw(RawCatalogFixtures {
            version: SUPPORTED_VERSION,
            users,
            categories,
            products,
        })
    }

    /// Parses fixtures from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if:
    /// - The JSON is malformed or a required field is missing
    /// - The version is unsupported
    /// - A collection repeats an id
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let raw: RawCatalogFixtures =
            serde_json::from_str(json).map_err(|e| FixtureError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads fixtures from a JSON file inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, FixtureError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| FixtureError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawCatalogFixtures) -> Result<Self, FixtureError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(FixtureError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        ensure_unique(Collection::Users, raw.users.iter().map(|u| u.id.get()))?;
        ensure_unique(
            Collection::Categories,
            raw.categories.iter().map(|c| c.id.get()),
        )?;
        ensure_unique(
            Collection::Products,
            raw.products.iter().map(|p| p.id.get()),
        )?;

        Ok(Self {
            version: raw.version,
            users: raw.users,
            categories: raw.categories,
            products: raw.products,
        })
    }

    /// Returns the fixture document version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }
}

impl CatalogSource for CatalogFixtures {
    fn users(&self) -> &[User] {
        &self.users
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}

fn ensure_unique(
    collection: Collection,
    ids: impl Iterator<Item = u32>,
) -> Result<(), FixtureError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawCatalogFixtures {
    version: u32,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}
