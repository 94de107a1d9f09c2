//! HTML rendering of the catalog page.
//!
//! The markup follows the Bulma layout used by the catalog front end: an
//! owner/search filter panel above either the product table or a fixed
//! "no matches" notice. Filter controls are plain links whose query string
//! encodes the target [`FilterState`], so the page works without scripting.

use std::fmt;

use catalog::{EnrichedProduct, FilterState, Sex, User, UserFilter};
use url::form_urlencoded;

use crate::page::CatalogPage;

/// Shown instead of the table when no product matches.
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css";

/// Renders the whole page as an HTML document.
///
/// # Example
///
/// ```
/// use catalog::{CatalogFixtures, CatalogProjector};
/// use viewer::{CatalogPage, render_page};
///
/// let json = r#"{"version": 1, "users": [], "categories": [], "products": []}"#;
/// let fixtures = CatalogFixtures::from_json(json).expect("valid fixtures");
/// let page = CatalogPage::new(CatalogProjector::new(&fixtures).expect("consistent fixtures"));
///
/// let html = render_page(&page);
/// assert!(html.contains("No products matching selected criteria"));
/// ```
#[must_use]
pub fn render_page(page: &CatalogPage) -> String {
    PageView(page).to_string()
}

/// Builds the relative link that selects `query` and `user`.
///
/// The query is carried verbatim, as typed into the search box. An empty
/// query and [`UserFilter::All`] are left out, so the unfiltered page links
/// to `?`.
#[must_use]
pub fn filter_href(query: &str, user: UserFilter) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if !query.is_empty() {
        serializer.append_pair("query", query);
    }
    if let UserFilter::User(id) = user {
        serializer.append_pair("user", &id.to_string());
    }
    format!("?{}", serializer.finish())
}

struct PageView<'a>(&'a CatalogPage);

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(f, "<title>Product Categories</title>")?;
        writeln!(f, "<link rel=\"stylesheet\" href=\"{STYLESHEET}\">")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "<div class=\"section\">")?;
        writeln!(f, "<div class=\"container\">")?;
        writeln!(f, "<h1 class=\"title\">Product Categories</h1>")?;
        write_filters(f, page.state(), page.users())?;
        writeln!(f, "<div class=\"box table-container\">")?;
        if page.is_empty() {
            writeln!(f, "<p data-cy=\"NoMatchingMessage\">{NO_MATCHES_MESSAGE}</p>")?;
        } else {
            write_table(f, page.visible())?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn write_filters(f: &mut fmt::Formatter<'_>, state: &FilterState, users: &[User]) -> fmt::Result {
    let query = state.query();
    let selected = state.user();

    writeln!(f, "<div class=\"block\">")?;
    writeln!(f, "<nav class=\"panel\">")?;
    writeln!(f, "<p class=\"panel-heading\">Filters</p>")?;

    writeln!(f, "<p class=\"panel-tabs has-text-weight-bold\">")?;
    write_tab(f, "FilterAllUsers", "All", query, UserFilter::All, selected)?;
    for user in users {
        write_tab(
            f,
            "FilterUser",
            &user.name,
            query,
            UserFilter::User(user.id),
            selected,
        )?;
    }
    writeln!(f, "</p>")?;

    writeln!(f, "<div class=\"panel-block\">")?;
    writeln!(
        f,
        "<form method=\"get\" class=\"control has-icons-left has-icons-right\">"
    )?;
    writeln!(
        f,
        "<input data-cy=\"SearchField\" type=\"text\" name=\"query\" class=\"input\" placeholder=\"Search\" value=\"{}\">",
        Escaped(query)
    )?;
    if let UserFilter::User(id) = selected {
        writeln!(f, "<input type=\"hidden\" name=\"user\" value=\"{id}\">")?;
    }
    writeln!(
        f,
        "<span class=\"icon is-left\"><i class=\"fas fa-search\" aria-hidden=\"true\"></i></span>"
    )?;
    if !query.is_empty() {
        writeln!(
            f,
            "<span class=\"icon is-right\"><a data-cy=\"ClearButton\" class=\"delete\" href=\"{}\"></a></span>",
            Escaped(&filter_href("", selected))
        )?;
    }
    writeln!(f, "</form>")?;
    writeln!(f, "</div>")?;

    writeln!(f, "<div class=\"panel-block\">")?;
    writeln!(
        f,
        "<a data-cy=\"ResetAllButton\" href=\"{}\" class=\"button is-link is-outlined is-fullwidth\">Reset all filters</a>",
        Escaped(&filter_href("", UserFilter::All))
    )?;
    writeln!(f, "</div>")?;

    writeln!(f, "</nav>")?;
    writeln!(f, "</div>")
}

fn write_tab(
    f: &mut fmt::Formatter<'_>,
    marker: &str,
    label: &str,
    query: &str,
    target: UserFilter,
    selected: UserFilter,
) -> fmt::Result {
    let class = if target == selected {
        " class=\"is-active\""
    } else {
        ""
    };
    writeln!(
        f,
        "<a data-cy=\"{marker}\" href=\"{}\"{class}>{}</a>",
        Escaped(&filter_href(query, target)),
        Escaped(label)
    )
}

fn write_table(f: &mut fmt::Formatter<'_>, products: &[EnrichedProduct]) -> fmt::Result {
    writeln!(
        f,
        "<table data-cy=\"ProductTable\" class=\"table is-striped is-narrow is-fullwidth\">"
    )?;
    writeln!(f, "<thead>")?;
    writeln!(f, "<tr>")?;
    for heading in ["ID", "Product", "Category", "User"] {
        writeln!(f, "<th>{heading}</th>")?;
    }
    writeln!(f, "</tr>")?;
    writeln!(f, "</thead>")?;
    writeln!(f, "<tbody>")?;
    for product in products {
        write_row(f, product)?;
    }
    writeln!(f, "</tbody>")?;
    writeln!(f, "</table>")
}

fn write_row(f: &mut fmt::Formatter<'_>, product: &EnrichedProduct) -> fmt::Result {
    let owner_class = match product.owner.sex {
        Sex::Male => "has-text-link",
        Sex::Female => "has-text-danger",
    };
    writeln!(f, "<tr data-cy=\"Product\">")?;
    writeln!(
        f,
        "<td class=\"has-text-weight-bold\" data-cy=\"ProductId\">{}</td>",
        product.id
    )?;
    writeln!(f, "<td data-cy=\"ProductName\">{}</td>", Escaped(&product.name))?;
    writeln!(
        f,
        "<td data-cy=\"ProductCategory\">{} - {}</td>",
        Escaped(&product.category.icon),
        Escaped(&product.category.title)
    )?;
    writeln!(
        f,
        "<td data-cy=\"ProductUser\" class=\"{owner_class}\">{}</td>",
        Escaped(&product.owner.name)
    )?;
    writeln!(f, "</tr>")
}

/// Writes text with HTML special characters replaced by entities.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            let (plain, tail) = rest.split_at(pos);
            f.write_str(plain)?;
            let mut chars = tail.chars();
            let entity = match chars.next() {
                Some('&') => "&amp;",
                Some('<') => "&lt;",
                Some('>') => "&gt;",
                Some('"') => "&quot;",
                _ => "&#39;",
            };
            f.write_str(entity)?;
            rest = chars.as_str();
        }
        f.write_str(rest)
    }
}

#[cfg(test)]
mod tests {
    use catalog::{CatalogFixtures, CatalogProjector, UserId};
    use rstest::{fixture, rstest};

    use super::*;

    const FIXTURE_JSON: &str = r#"{
        "version": 1,
        "users": [
            {"id": 1, "name": "Roma", "sex": "m"},
            {"id": 2, "name": "Anna", "sex": "f"}
        ],
        "categories": [
            {"id": 1, "title": "Grocery", "icon": "🍞", "ownerId": 2},
            {"id": 2, "title": "Drinks & <Spirits>", "icon": "🍺", "ownerId": 1}
        ],
        "products": [
            {"id": 1, "name": "Milk", "categoryId": 2},
            {"id": 2, "name": "Bread", "categoryId": 1}
        ]
    }"#;

    #[fixture]
    fn page() -> CatalogPage {
        let fixtures = CatalogFixtures::from_json(FIXTURE_JSON).expect("valid fixtures");
        CatalogPage::new(CatalogProjector::new(&fixtures).expect("consistent fixtures"))
    }

    #[rstest]
    #[case("", UserFilter::All, "?")]
    #[case("   ", UserFilter::All, "?query=+++")]
    #[case(" milk ", UserFilter::All, "?query=+milk+")]
    #[case("milk", UserFilter::All, "?query=milk")]
    #[case("", UserFilter::User(UserId::new(2)), "?user=2")]
    #[case("sour milk", UserFilter::User(UserId::new(1)), "?query=sour+milk&user=1")]
    #[case("a&b", UserFilter::All, "?query=a%26b")]
    fn builds_filter_links(#[case] query: &str, #[case] user: UserFilter, #[case] expected: &str) {
        assert_eq!(filter_href(query, user), expected);
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("Tom & Jerry", "Tom &amp; Jerry")]
    #[case("<b>\"hi\"</b>", "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;")]
    #[case("it's", "it&#39;s")]
    #[case("🍞 & ü", "🍞 &amp; ü")]
    fn escapes_html_text(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(Escaped(raw).to_string(), expected);
    }

    #[rstest]
    fn renders_one_row_per_visible_product(page: CatalogPage) {
        let html = render_page(&page);

        assert_eq!(html.matches("<tr data-cy=\"Product\">").count(), 2);
        assert!(html.contains("data-cy=\"ProductTable\""));
        assert!(!html.contains(NO_MATCHES_MESSAGE));
    }

    #[rstest]
    fn renders_category_and_owner_cells(page: CatalogPage) {
        let html = render_page(&page);

        assert!(html.contains("<td data-cy=\"ProductCategory\">🍞 - Grocery</td>"));
        assert!(html.contains(
            "<td data-cy=\"ProductCategory\">🍺 - Drinks &amp; &lt;Spirits&gt;</td>"
        ));
        assert!(html.contains("<td data-cy=\"ProductUser\" class=\"has-text-link\">Roma</td>"));
        assert!(html.contains("<td data-cy=\"ProductUser\" class=\"has-text-danger\">Anna</td>"));
    }

    #[rstest]
    fn renders_notice_instead_of_table_when_empty(mut page: CatalogPage) {
        page.set_query("xyz");
        let html = render_page(&page);

        assert!(html.contains(NO_MATCHES_MESSAGE));
        assert!(!html.contains("<table"));
    }

    #[rstest]
    fn marks_selected_owner_tab_active(mut page: CatalogPage) {
        page.set_selected_user(UserFilter::User(UserId::new(2)));
        let html = render_page(&page);

        assert!(html.contains("<a data-cy=\"FilterUser\" href=\"?user=2\" class=\"is-active\">Anna</a>"));
        assert!(html.contains("<a data-cy=\"FilterAllUsers\" href=\"?\">All</a>"));
        assert!(html.contains("<input type=\"hidden\" name=\"user\" value=\"2\">"));
    }

    #[rstest]
    fn tabs_keep_the_current_query(mut page: CatalogPage) {
        page.set_query("m");
        let html = render_page(&page);

        assert!(html.contains("<a data-cy=\"FilterUser\" href=\"?query=m&amp;user=1\">Roma</a>"));
        assert!(html.contains(
            "<a data-cy=\"FilterAllUsers\" href=\"?query=m\" class=\"is-active\">All</a>"
        ));
    }

    #[rstest]
    fn tabs_and_search_box_agree_on_a_blank_query(mut page: CatalogPage) {
        page.set_query("  ");
        let html = render_page(&page);

        assert!(html.contains("value=\"  \""));
        assert!(html.contains("<a data-cy=\"FilterUser\" href=\"?query=++&amp;user=1\">Roma</a>"));
        assert_eq!(page.visible().len(), 2);
    }

    #[rstest]
    fn clear_button_appears_only_with_a_query(mut page: CatalogPage) {
        assert!(!render_page(&page).contains("ClearButton"));

        page.set_selected_user(UserFilter::User(UserId::new(1)));
        page.set_query("mi");
        let html = render_page(&page);

        assert!(html.contains("data-cy=\"ClearButton\" class=\"delete\" href=\"?user=1\""));
        assert!(html.contains("value=\"mi\""));
    }

    #[rstest]
    fn search_value_is_escaped(mut page: CatalogPage) {
        page.set_query("\"><script>");
        let html = render_page(&page);

        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }
}
