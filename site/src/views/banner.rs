//! The page title banner shared by every page.

use maud::{Markup, html};

const OUTER_CLASS: &str = "my-10 bg-white px-24";
const TITLE_CLASS: &str = "flex flex-row justify-center py-5 text-5xl font-bold shadow-xl";

/// Render the title banner.
///
/// `title` is escaped. `body`, when given, follows the title inside the
/// outer block.
///
/// # Examples
/// ```
/// use site::views::title_banner;
///
/// let html = title_banner("About", None).into_string();
/// assert!(html.contains(">About</div>"));
/// ```
#[must_use]
pub fn title_banner(title: &str, body: Option<&Markup>) -> Markup {
    html! {
        div class=(OUTER_CLASS) {
            div class=(TITLE_CLASS) { (title) }
            @if let Some(body) = body {
                (body)
            }
        }
    }
}
