//! Product catalog projection for the catalog viewer.
//!
//! This crate joins three immutable source collections (users, categories
//! and products) into denormalised [`EnrichedProduct`] records and computes
//! the visible subset for a [`FilterState`]. It has no knowledge of
//! rendering; the presentation layer owns the filter state and calls back
//! into the projector after every change.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading versioned fixture documents from JSON
//! - Joining products with their category and owner, reporting broken
//!   references as [`IntegrityError`]
//! - Case-insensitive name search combined with owner selection
//!
//! # Example
//!
//! ```
//! use catalog::{CatalogFixtures, CatalogProjector, FilterState, UserFilter, UserId};
//!
//! let json = r#"{
//!     "version": 1,
//!     "users": [{"id": 1, "name": "Max", "sex": "m"}, {"id": 2, "name": "Anna", "sex": "f"}],
//!     "categories": [
//!         {"id": 1, "title": "Dairy", "icon": "🥛", "ownerId": 1},
//!         {"id": 2, "title": "Bakery", "icon": "🍞", "ownerId": 2}
//!     ],
//!     "products": [
//!         {"id": 1, "name": "Milk", "categoryId": 1},
//!         {"id": 2, "name": "Bread", "categoryId": 2}
//!     ]
//! }"#;
//!
//! let fixtures = CatalogFixtures::from_json(json).expect("valid fixtures");
//! let projector = CatalogProjector::new(&fixtures).expect("consistent fixtures");
//!
//! let state = FilterState::new("", UserFilter::User(UserId::new(2)));
//! let visible = projector.visible(&state);
//!
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].name, "Bread");
//! ```

mod error;
mod filter_state;
mod fixtures;
mod model;
mod projector;

pub use error::{Collection, FilterParseError, FixtureError, IntegrityError};
pub use filter_state::{ALL_USERS, FilterState, UserFilter};
pub use fixtures::CatalogFixtures;
pub use model::{Category, CategoryId, EnrichedProduct, Product, ProductId, Sex, User, UserId};
pub use projector::{CatalogProjector, CatalogSource, filter, join};
