//! Filter state owned by the presentation layer.
//!
//! The projector only reads a [`FilterState`]; mutation happens in whatever
//! layer owns it, followed by a fresh call to [`crate::filter`].

use std::fmt;
use std::str::FromStr;

use crate::error::FilterParseError;
use crate::model::UserId;

/// Text form of [`UserFilter::All`].
pub const ALL_USERS: &str = "All";

/// Owner selection: either every owner or one specific user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserFilter {
    /// No owner filter.
    #[default]
    All,
    /// Only products owned by this user.
    User(UserId),
}

impl UserFilter {
    /// Returns `true` when `owner` passes this filter.
    #[must_use]
    pub fn admits(self, owner: UserId) -> bool {
        match self {
            Self::All => true,
            Self::User(selected) => selected == owner,
        }
    }
}

impl From<UserId> for UserFilter {
    fn from(id: UserId) -> Self {
        Self::User(id)
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_USERS),
            Self::User(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for UserFilter {
    type Err = FilterParseError;

    /// Parses `All` (any case) or a decimal user id.
    ///
    /// ```
    /// use catalog::{UserFilter, UserId};
    ///
    /// assert_eq!("all".parse(), Ok(UserFilter::All));
    /// assert_eq!("2".parse(), Ok(UserFilter::User(UserId::new(2))));
    /// assert!("two".parse::<UserFilter>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_USERS) {
            return Ok(Self::All);
        }
        trimmed
            .parse::<u32>()
            .map(|id| Self::User(UserId::new(id)))
            .map_err(|_| FilterParseError {
                value: s.to_owned(),
            })
    }
}

/// Search query plus owner selection.
///
/// The default state has an empty query and [`UserFilter::All`], which makes
/// the filter a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    user: UserFilter,
}

impl FilterState {
    /// Creates a state with the given query and owner selection.
    #[must_use]
    pub fn new(query: impl Into<String>, user: UserFilter) -> Self {
        Self {
            query: query.into(),
            user,
        }
    }

    /// Returns the raw query as typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the owner selection.
    #[must_use]
    pub const fn user(&self) -> UserFilter {
        self.user
    }

    /// Returns the trimmed, lowercased query, or `None` when it is blank.
    #[must_use]
    pub fn normalized_query(&self) -> Option<String> {
        let normalized = self.query.trim().to_lowercase();
        (!normalized.is_empty()).then_some(normalized)
    }

    /// Returns `true` when neither predicate is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.normalized_query().is_none() && self.user == UserFilter::All
    }

    /// Replaces the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Replaces the owner selection.
    pub fn set_selected_user(&mut self, user: UserFilter) {
        self.user = user;
    }

    /// Empties the query and keeps the owner selection.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Restores the default state.
    pub fn reset(&mut self) {
        self.query.clear();
        self.user = UserFilter::All;
    }
}
