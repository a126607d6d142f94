//! Tests for the route table and route rendering.

use super::*;
use crate::views::HelloFragment;
use maud::html;
use rstest::{fixture, rstest};

#[fixture]
fn table() -> RouteTable {
    RouteTable::site().expect("built-in routes are consistent")
}

fn stub_page(_ctx: &RenderContext<'_>) -> Result<Markup, domain::Error> {
    Ok(html! { main { "stub" } })
}

#[rstest]
fn site_table_lists_pages_in_order(table: RouteTable) {
    let entries: Vec<(PageId, &str, Layout)> = table
        .iter()
        .map(|route| (route.page(), route.pattern(), route.layout()))
        .collect();
    assert_eq!(
        entries,
        vec![
            (PageId::Home, "/", Layout::Root),
            (PageId::About, "/about", Layout::Root),
            (PageId::Users, "/dashboard/users", Layout::Dashboard),
            (PageId::UserDetails, "/dashboard/users/{id}", Layout::Dashboard),
        ]
    );
}

#[rstest]
fn only_home_carries_a_diagnostic(table: RouteTable) {
    let diagnostics: Vec<(PageId, Option<&str>)> = table
        .iter()
        .map(|route| (route.page(), route.diagnostic()))
        .collect();
    assert_eq!(
        diagnostics,
        vec![
            (PageId::Home, Some("Which component am I?")),
            (PageId::About, None),
            (PageId::Users, None),
            (PageId::UserDetails, None),
        ]
    );
}

#[rstest]
#[case("/dashboard/users/{user}")]
#[case("/about")]
#[case("/")]
fn rejects_duplicate_shapes(mut table: RouteTable, #[case] pattern: &'static str) {
    let err = table
        .register(PageRoute::new(PageId::About, pattern, "Dup", stub_page))
        .expect_err("duplicate shape");
    assert!(matches!(err, RouteTableError::Duplicate { .. }));
    assert_eq!(table.len(), 4);
}

#[rstest]
#[case("about")]
#[case("/about/")]
#[case("/dashboard//users")]
#[case("/users/{}")]
#[case("/users/id-{id}")]
fn rejects_malformed_patterns(#[case] pattern: &'static str) {
    let err = RouteTable::new()
        .register(PageRoute::new(PageId::About, pattern, "Bad", stub_page))
        .expect_err("malformed pattern");
    assert!(matches!(err, RouteTableError::InvalidPattern { .. }));
}

#[rstest]
fn duplicate_error_names_existing_page(mut table: RouteTable) {
    let err = table
        .register(PageRoute::new(PageId::Home, "/", "Home again", stub_page))
        .expect_err("duplicate");
    assert_eq!(
        err,
        RouteTableError::Duplicate {
            pattern: "/".to_owned(),
            existing: PageId::Home,
        }
    );
}

#[rstest]
fn user_details_render_echoes_parameter(table: RouteTable) {
    let route = table.get(PageId::UserDetails).expect("user details route");
    let params: RouteParams = [("id", "not-a-user")].into_iter().collect();
    let html = route
        .render(&params, &HelloFragment)
        .expect("render")
        .into_string();
    assert!(html.contains("Dashboard Layout</h1><main>"));
    assert!(html.contains("User details for user ID : not-a-user"));
}

#[rstest]
fn missing_parameter_is_internal_error(table: RouteTable) {
    let route = table.get(PageId::UserDetails).expect("user details route");
    let err = route
        .render(&RouteParams::default(), &HelloFragment)
        .expect_err("missing id");
    assert_eq!(err.code(), domain::ErrorCode::InternalError);
}

#[rstest]
fn home_render_includes_fragment_without_layout(table: RouteTable) {
    let route = table.get(PageId::Home).expect("home route");
    let html = route
        .render(&RouteParams::default(), &HelloFragment)
        .expect("render")
        .into_string();
    assert!(html.contains("Welcome to Next.js."));
    assert!(html.contains(r#"data-fragment="hello""#));
    assert!(!html.contains("Dashboard Layout"));
}

#[rstest]
fn render_is_byte_identical_across_calls(table: RouteTable) {
    let params: RouteParams = [("id", "2")].into_iter().collect();
    for route in table.iter() {
        let first = route.render(&params, &HelloFragment).expect("render");
        let second = route.render(&params, &HelloFragment).expect("render");
        assert_eq!(first.into_string(), second.into_string(), "{:?}", route.page());
    }
}

#[rstest]
fn params_lookup_by_name() {
    let params: RouteParams = [("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(params.get("b"), Some("2"));
    assert_eq!(params.get("c"), None);
    assert!(params.require("c").is_err());
}
