//! Page templates. Every function here is pure: equal inputs give
//! byte-identical markup.

use maud::{Markup, html};

use super::title_banner;
use crate::domain::UserRef;

/// Banner text of the home page.
pub const HOME_TITLE: &str = "Welcome to Next.js.";
/// Banner text of the about page.
pub const ABOUT_TITLE: &str = "About";
/// Banner text of the user listing.
pub const USERS_TITLE: &str = "Users";

fn banner_with_fragment(title: &str, fragment: &Markup) -> Markup {
    html! {
        main {
            (title_banner(title, None))
            (fragment)
        }
    }
}

fn banner_with_message(title: &str, message: &str) -> Markup {
    let body = html! { p class="mt-4" { (message) } };
    html! { main { (title_banner(title, Some(&body))) } }
}

/// Home page: welcome banner followed by the shared fragment.
#[must_use]
pub fn home(fragment: &Markup) -> Markup {
    banner_with_fragment(HOME_TITLE, fragment)
}

/// About page: about banner followed by the shared fragment.
#[must_use]
pub fn about(fragment: &Markup) -> Markup {
    banner_with_fragment(ABOUT_TITLE, fragment)
}

/// Dashboard listing with one link per user, in the given order.
///
/// # Examples
/// ```
/// use site::domain::UserRef;
/// use site::views::user_listing;
///
/// let html = user_listing(&[UserRef::new("1")]).into_string();
/// assert!(html.contains(r#"<a href="/dashboard/users/1">User 1</a>"#));
/// ```
#[must_use]
pub fn user_listing(users: &[UserRef]) -> Markup {
    let body = html! {
        div class="mt-4" {
            h1 class="text-2xl font-bold" { "Dashboard Users" }
            ul class="mt-2" {
                @for user in users {
                    li { a href=(user.detail_path()) { (user.label()) } }
                }
            }
        }
    };
    html! { main { (title_banner(USERS_TITLE, Some(&body))) } }
}

/// Detail page echoing the user identifier.
#[must_use]
pub fn user_details(user: &UserRef) -> Markup {
    let title = format!("User details for user ID : {}", user.id());
    html! { main { (title_banner(&title, None)) } }
}

/// Body of the not-found page.
#[must_use]
pub fn not_found() -> Markup {
    banner_with_message("404", "This page could not be found.")
}

/// Body of the generic error page. `message` is escaped.
#[must_use]
pub fn error_page(status: u16, message: &str) -> Markup {
    banner_with_message(&status.to_string(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::PreEscaped;
    use rstest::rstest;

    fn fragment() -> Markup {
        PreEscaped(r#"<div data-fragment="hello"></div>"#.to_owned())
    }

    #[rstest]
    fn listing_has_one_link_per_sample_user() {
        let html = user_listing(&UserRef::samples()).into_string();
        for id in ["1", "2", "3", "4"] {
            let link = format!(r#"<a href="/dashboard/users/{id}">User {id}</a>"#);
            assert_eq!(html.matches(&link).count(), 1, "link for {id}");
        }
        assert_eq!(html.matches("<li>").count(), 4);
        assert!(html.contains(
            r#"<div class="mt-4"><h1 class="text-2xl font-bold">Dashboard Users</h1><ul class="mt-2"><li>"#
        ));
    }

    #[rstest]
    fn listing_preserves_order() {
        let html = user_listing(&UserRef::samples()).into_string();
        let positions: Vec<usize> = ["User 1", "User 2", "User 3", "User 4"]
            .iter()
            .filter_map(|label| html.find(label))
            .collect();
        assert_eq!(positions.len(), 4);
        assert!(positions.windows(2).all(|pair| pair.first() < pair.get(1)));
    }

    #[rstest]
    fn listing_escapes_identifiers_in_links() {
        let html = user_listing(&[UserRef::new("\"><x")]).into_string();
        assert!(html.contains(r#"href="/dashboard/users/&quot;&gt;&lt;x""#));
        assert!(html.contains("User &quot;&gt;&lt;x</a>"));
    }

    #[rstest]
    #[case("1")]
    #[case("999")]
    #[case("not-a-user")]
    #[case("a/b")]
    #[case("100%")]
    #[case("")]
    fn details_echo_identifier(#[case] id: &str) {
        let html = user_details(&UserRef::new(id)).into_string();
        assert!(html.contains(&format!("User details for user ID : {id}</div>")));
    }

    #[rstest]
    fn details_escape_markup_in_identifier() {
        let html = user_details(&UserRef::new("<b>x</b>")).into_string();
        assert!(html.contains("User details for user ID : &lt;b&gt;x&lt;/b&gt;"));
    }

    #[rstest]
    #[case(HOME_TITLE, home as fn(&Markup) -> Markup)]
    #[case(ABOUT_TITLE, about as fn(&Markup) -> Markup)]
    fn banner_pages_include_fragment_after_banner(
        #[case] title: &str,
        #[case] page: fn(&Markup) -> Markup,
    ) {
        let html = page(&fragment()).into_string();
        let banner_at = html.find(title).expect("banner text");
        let fragment_at = html.find("data-fragment").expect("fragment");
        assert!(banner_at < fragment_at);
        assert!(html.starts_with("<main>") && html.ends_with("</main>"));
    }

    #[rstest]
    fn rendering_is_idempotent() {
        let users = UserRef::samples();
        assert_eq!(
            user_listing(&users).into_string(),
            user_listing(&users).into_string()
        );
        assert_eq!(home(&fragment()).into_string(), home(&fragment()).into_string());
        assert_eq!(
            user_details(&UserRef::new("3")).into_string(),
            user_details(&UserRef::new("3")).into_string()
        );
    }

    #[rstest]
    fn not_found_uses_the_banner() {
        let html = not_found().into_string();
        assert!(html.contains(">404</div><p class=\"mt-4\">This page could not be found.</p>"));
    }

    #[rstest]
    fn error_page_escapes_message() {
        let html = error_page(500, "a < b").into_string();
        assert!(html.contains(">500</div>"));
        assert!(html.contains("a &lt; b"));
    }
}
