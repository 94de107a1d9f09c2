//! Denormalising join and visible-list filtering.
//!
//! [`join`] resolves each product's category and owner once. [`filter`]
//! computes the visible subset for a [`FilterState`]; it is pure and keeps
//! input order.

use crate::error::IntegrityError;
use crate::filter_state::FilterState;
use crate::model::{Category, EnrichedProduct, Product, User};

/// Data-provider port exposing the three immutable source collections.
pub trait CatalogSource {
    /// Returns all users in provider order.
    fn users(&self) -> &[User];
    /// Returns all categories in provider order.
    fn categories(&self) -> &[Category];
    /// Returns all products in provider order.
    fn products(&self) -> &[Product];
}

/// Joins products with their category and the category's owner.
///
/// Output order matches `products`. Lookups use exact id equality; when an
/// id repeats, the first record wins.
///
/// # Errors
///
/// Returns [`IntegrityError`] for the first product whose category, or whose
/// category's owner, cannot be resolved.
pub fn join(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Result<Vec<EnrichedProduct>, IntegrityError> {
    products
        .iter()
        .map(|product| {
            let category = categories
                .iter()
                .find(|c| c.id == product.category_id)
                .ok_or(IntegrityError::MissingCategory {
                    product_id: product.id.get(),
                    category_id: product.category_id.get(),
                })?;
            let owner = users
                .iter()
                .find(|u| u.id == category.owner_id)
                .ok_or(IntegrityError::MissingOwner {
                    category_id: category.id.get(),
                    owner_id: category.owner_id.get(),
                })?;
            Ok(EnrichedProduct::new(
                product.clone(),
                category.clone(),
                owner.clone(),
            ))
        })
        .collect()
}

/// Computes the visible products for `state`.
///
/// A blank query and [`crate::UserFilter::All`] return the input unchanged.
/// Otherwise a product must contain the trimmed, lowercased query in its
/// lowercased name and be owned by the selected user.
///
/// # Example
///
/// ```
/// use catalog::{CatalogFixtures, CatalogProjector, FilterState, UserFilter};
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Max", "sex": "m"}, {"id": 2, "name": "Anna", "sex": "f"}],
///     "categories": [
///         {"id": 1, "title": "Dairy", "icon": "🥛", "ownerId": 1},
///         {"id": 2, "title": "Bakery", "icon": "🍞", "ownerId": 2}
///     ],
///     "products": [
///         {"id": 1, "name": "Milk", "categoryId": 1},
///         {"id": 2, "name": "Bread", "categoryId": 2}
///     ]
/// }"#;
/// let fixtures = CatalogFixtures::from_json(json).expect("valid fixtures");
/// let projector = CatalogProjector::new(&fixtures).expect("consistent fixtures");
///
/// let visible = catalog::filter(projector.products(), &FilterState::new("mil", UserFilter::All));
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].category.title, "Dairy");
/// ```
#[must_use]
pub fn filter(products: &[EnrichedProduct], state: &FilterState) -> Vec<EnrichedProduct> {
    let query = state.normalized_query();
    let user = state.user();

    products
        .iter()
        .filter(|product| {
            query
                .as_deref()
                .is_none_or(|q| product.name.to_lowercase().contains(q))
        })
        .filter(|product| user.admits(product.owner.id))
        .cloned()
        .collect()
}

/// Holds the joined catalog and answers visible-list queries.
///
/// The join runs once in [`CatalogProjector::new`]; the projector holds no
/// filter state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProjector {
    users: Vec<User>,
    products: Vec<EnrichedProduct>,
}

impl CatalogProjector {
    /// Joins the provider's collections.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrityError`] when the provider's references do not
    /// resolve.
    pub fn new(source: &impl CatalogSource) -> Result<Self, IntegrityError> {
        let products = join(source.products(), source.categories(), source.users())?;
        Ok(Self {
            users: source.users().to_vec(),
            products,
        })
    }

    /// Returns every enriched product in provider order.
    #[must_use]
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    /// Returns the users, in provider order, for owner selection.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the products visible under `state`.
    #[must_use]
    pub fn visible(&self, state: &FilterState) -> Vec<EnrichedProduct> {
        filter(&self.products, state)
    }
}
