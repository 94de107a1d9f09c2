//! Presentation state for the catalog page.
//!
//! [`CatalogPage`] owns the [`FilterState`] and keeps the visible product
//! list in step with it: every mutator recomputes the list before returning.

use catalog::{CatalogProjector, EnrichedProduct, FilterState, User, UserFilter};
use tracing::debug;

/// The catalog page: projector, current filters and the products they select.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    projector: CatalogProjector,
    state: FilterState,
    visible: Vec<EnrichedProduct>,
}

impl CatalogPage {
    /// Creates an unfiltered page.
    #[must_use]
    pub fn new(projector: CatalogProjector) -> Self {
        Self::with_state(projector, FilterState::default())
    }

    /// Creates a page showing `state`.
    #[must_use]
    pub fn with_state(projector: CatalogProjector, state: FilterState) -> Self {
        let visible = projector.visible(&state);
        Self {
            projector,
            state,
            visible,
        }
    }

    /// Replaces the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
        self.refresh();
    }

    /// Selects an owner, or every owner with [`UserFilter::All`].
    pub fn set_selected_user(&mut self, user: UserFilter) {
        self.state.set_selected_user(user);
        self.refresh();
    }

    /// Empties the search box and keeps the owner selection.
    pub fn clear_query(&mut self) {
        self.state.clear_query();
        self.refresh();
    }

    /// Clears every filter.
    pub fn reset(&mut self) {
        self.state.reset();
        self.refresh();
    }

    /// Returns the current filter state.
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Returns the products selected by the current state.
    #[must_use]
    pub fn visible(&self) -> &[EnrichedProduct] {
        &self.visible
    }

    /// Returns `true` when nothing matches; the page shows a notice instead
    /// of the table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Returns the users offered as owner tabs.
    #[must_use]
    pub fn users(&self) -> &[User] {
        self.projector.users()
    }

    fn refresh(&mut self) {
        self.visible = self.projector.visible(&self.state);
        debug!(
            query = self.state.query(),
            user = %self.state.user(),
            visible = self.visible.len(),
            "visible products recomputed"
        );
    }
}
