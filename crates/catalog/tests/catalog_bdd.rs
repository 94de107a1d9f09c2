//! Behavioural tests for the catalog projector.
//!
//! These scenarios cover the join, the search and owner predicates, and the
//! reset and idempotence guarantees of the visible-list computation.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use catalog::{
    CatalogFixtures, CatalogSource, EnrichedProduct, FilterState, IntegrityError, UserFilter,
    filter, join,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

const TWO_PRODUCT_JSON: &str = r#"{
    "version": 1,
    "users": [
        {"id": 1, "name": "Max", "sex": "m"},
        {"id": 2, "name": "Anna", "sex": "f"}
    ],
    "categories": [
        {"id": 1, "title": "Dairy", "icon": "🥛", "ownerId": 1},
        {"id": 2, "title": "Bakery", "icon": "🍞", "ownerId": 2}
    ],
    "products": [
        {"id": 1, "name": "Milk", "categoryId": 1},
        {"id": 2, "name": "Bread", "categoryId": 2}
    ]
}"#;

const ORPHAN_JSON: &str = r#"{
    "version": 1,
    "users": [{"id": 1, "name": "Max", "sex": "m"}],
    "categories": [{"id": 1, "title": "Dairy", "icon": "🥛", "ownerId": 1}],
    "products": [{"id": 7, "name": "Ghost", "categoryId": 42}]
}"#;

/// Test world holding fixtures, the joined catalog and filter results.
#[derive(Default, ScenarioState)]
struct World {
    fixtures: Slot<CatalogFixtures>,
    join_result: Slot<Result<Vec<EnrichedProduct>, IntegrityError>>,
    state: Slot<FilterState>,
    visible: Slot<Vec<EnrichedProduct>>,
    second_pass: Slot<Vec<EnrichedProduct>>,
}

impl World {
    fn fixtures(&self) -> CatalogFixtures {
        self.fixtures.get().expect("fixtures should be set")
    }

    fn enriched(&self) -> Vec<EnrichedProduct> {
        if self.join_result.get().is_none() {
            self.run_join();
        }
        self.join_result
            .get()
            .expect("join result should be set")
            .expect("join should succeed")
    }

    fn run_join(&self) {
        let fixtures = self.fixtures();
        let result = join(
            fixtures.products(),
            fixtures.categories(),
            fixtures.users(),
        );
        self.join_result.set(result);
    }

    fn apply(&self, state: FilterState) {
        let visible = filter(&self.enriched(), &state);
        self.state.set(state);
        self.visible.set(visible);
    }

    fn visible(&self) -> Vec<EnrichedProduct> {
        self.visible.get().expect("visible products should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a catalog with Milk in Dairy owned by Max and Bread in Bakery owned by Anna")]
fn a_two_product_catalog(world: &World) {
    let fixtures = CatalogFixtures::from_json(TWO_PRODUCT_JSON).expect("valid fixtures");
    world.fixtures.set(fixtures);
}

#[given("a catalog whose product references a missing category")]
fn a_catalog_with_an_orphan(world: &World) {
    let fixtures = CatalogFixtures::from_json(ORPHAN_JSON).expect("valid fixtures");
    world.fixtures.set(fixtures);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the catalog is filtered with query {query} and user {user}")]
fn the_catalog_is_filtered(world: &World, query: String, user: String) {
    let selection: UserFilter = unquote(&user).parse().expect("valid user filter");
    world.apply(FilterState::new(unquote(&query), selection));
}

#[when("the catalog is filtered with the default state")]
fn the_catalog_is_filtered_with_defaults(world: &World) {
    world.apply(FilterState::default());
}

#[when("the visible products are filtered again with the same state")]
fn the_visible_products_are_filtered_again(world: &World) {
    let state = world.state.get().expect("state should be set");
    let again = filter(&world.visible(), &state);
    world.second_pass.set(again);
}

#[when("the filter state is reset")]
fn the_filter_state_is_reset(world: &World) {
    let mut state = world.state.get().expect("state should be set");
    state.reset();
    world.apply(state);
}

#[when("the catalog is joined")]
fn the_catalog_is_joined(world: &World) {
    world.run_join();
}

// ============================================================================
// Then steps
// ============================================================================

#[then("exactly the product {name} is visible")]
fn exactly_the_product_is_visible(world: &World, name: String) {
    let visible = world.visible();
    let names: Vec<_> = visible.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, [unquote(&name)]);
}

#[then("the visible product has category {category} and owner {owner}")]
fn the_visible_product_has(world: &World, category: String, owner: String) {
    let visible = world.visible();
    let product = visible.first().expect("one visible product");
    assert_eq!(product.category.title, unquote(&category));
    assert_eq!(product.owner.name, unquote(&owner));
}

#[then("no products are visible")]
fn no_products_are_visible(world: &World) {
    assert!(world.visible().is_empty());
}

#[then("all products are visible in their original order")]
fn all_products_are_visible(world: &World) {
    assert_eq!(world.visible(), world.enriched());
}

#[then("both results are identical")]
fn both_results_are_identical(world: &World) {
    let again = world.second_pass.get().expect("second pass should be set");
    assert_eq!(world.visible(), again);
}

#[then("the join fails with a missing category error")]
fn the_join_fails(world: &World) {
    let result = world.join_result.get().expect("join result should be set");
    assert_eq!(
        result,
        Err(IntegrityError::MissingCategory {
            product_id: 7,
            category_id: 42
        })
    );
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/catalog_projection.feature",
    name = "Searching by a name fragment"
)]
fn searching_by_a_name_fragment(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalog_projection.feature",
    name = "Selecting an owner"
)]
fn selecting_an_owner(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalog_projection.feature",
    name = "Searching for an unknown name"
)]
fn searching_for_an_unknown_name(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalog_projection.feature",
    name = "Default filter state shows everything"
)]
fn default_filter_state_shows_everything(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalog_projection.feature",
    name = "Filtering twice changes nothing"
)]
fn filtering_twice_changes_nothing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalog_projection.feature",
    name = "Reset restores the full list"
)]
fn reset_restores_the_full_list(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalog_projection.feature",
    name = "A product referencing a missing category fails the join"
)]
fn a_missing_category_fails_the_join(world: World) {
    let _ = world;
}
