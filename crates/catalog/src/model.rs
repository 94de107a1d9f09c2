//! Catalog record types.
//!
//! Users, categories and products are supplied by a data provider and never
//! mutated. [`EnrichedProduct`] is the denormalised view record produced by
//! the join.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw identifier.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of a [`User`].
    UserId
);
record_id!(
    /// Identifier of a [`Category`].
    CategoryId
);
record_id!(
    /// Identifier of a [`Product`].
    ProductId
);

/// Sex of a catalog user, as recorded in the fixture data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Serialised as `"m"`.
    #[serde(rename = "m")]
    Male,
    /// Serialised as `"f"`.
    #[serde(rename = "f")]
    Female,
}

/// A user who owns categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name shown in owner tabs and the product table.
    pub name: String,
    /// Recorded sex; drives the owner cell styling.
    pub sex: Sex,
}

/// A product category with an owning user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Human-readable title.
    pub title: String,
    /// Short icon, usually a single emoji.
    pub icon: String,
    /// Owner reference; must resolve to a [`User`].
    pub owner_id: UserId,
}

/// A product belonging to a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,
    /// Product name; the search query matches against it.
    pub name: String,
    /// Category reference; must resolve to a [`Category`].
    pub category_id: CategoryId,
}

/// A product joined with its category and that category's owner.
///
/// # Example
///
/// ```
/// use catalog::{Category, CategoryId, EnrichedProduct, Product, ProductId, Sex, User, UserId};
///
/// let owner = User { id: UserId::new(1), name: "Max".to_owned(), sex: Sex::Male };
/// let category = Category {
///     id: CategoryId::new(1),
///     title: "Dairy".to_owned(),
///     icon: "🥛".to_owned(),
///     owner_id: owner.id,
/// };
/// let product = Product { id: ProductId::new(1), name: "Milk".to_owned(), category_id: category.id };
///
/// let enriched = EnrichedProduct::new(product, category, owner);
/// assert_eq!(enriched.owner.name, "Max");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    /// Product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category reference carried over from the product.
    pub category_id: CategoryId,
    /// The resolved category.
    pub category: Category,
    /// The resolved owner of the category.
    pub owner: User,
}

impl EnrichedProduct {
    /// Assembles an enriched record from already resolved parts.
    #[must_use]
    pub fn new(product: Product, category: Category, owner: User) -> Self {
        let Product {
            id,
            name,
            category_id,
        } = product;
        Self {
            id,
            name,
            category_id,
            category,
            owner,
        }
    }
}
