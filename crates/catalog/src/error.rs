//! Error types for the catalog crate.
//!
//! This module defines semantic error enums for fixture loading, the
//! denormalising join and filter parsing, following the project's error
//! handling conventions with `thiserror`.

use std::fmt;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Names one of the three source collections in a fixture document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The `users` array.
    Users,
    /// The `categories` array.
    Categories,
    /// The `products` array.
    Products,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Users => "users",
            Self::Categories => "categories",
            Self::Products => "products",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when loading catalog fixtures.
///
/// These errors cover file I/O, JSON parsing and schema validation. Broken
/// references between collections are reported by [`IntegrityError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture file at '{path}': {message}")]
    IoError {
        /// Path to the fixture file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The fixture JSON is malformed or missing required fields.
    #[error("invalid fixture JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The fixture document version is not supported.
    #[error("unsupported fixture version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// Two records in the same collection share an identifier.
    #[error("duplicate id {id} in {collection}")]
    DuplicateId {
        /// Collection holding the duplicate.
        collection: Collection,
        /// The repeated identifier.
        id: u32,
    },
}

/// Referential integrity violations found while joining products.
///
/// The fixture data is expected to be internally consistent, so these are
/// startup failures rather than recoverable conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// A product references a category that does not exist.
    #[error("product {product_id} references missing category {category_id}")]
    MissingCategory {
        /// The product holding the dangling reference.
        product_id: u32,
        /// The unresolved category id.
        category_id: u32,
    },

    /// A category references an owner that does not exist.
    #[error("category {category_id} references missing owner {owner_id}")]
    MissingOwner {
        /// The category holding the dangling reference.
        category_id: u32,
        /// The unresolved user id.
        owner_id: u32,
    },
}

/// Error returned when text cannot be parsed as a user filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid user filter '{value}': expected 'All' or a numeric user id")]
pub struct FilterParseError {
    /// The rejected input.
    pub value: String,
}
