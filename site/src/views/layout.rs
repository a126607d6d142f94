//! Layouts wrapping page output.

use maud::{DOCTYPE, Markup, html};

/// Wrapper applied around a page before the document shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Page markup goes straight into the document body.
    #[default]
    Root,
    /// Page markup is nested under the dashboard heading.
    Dashboard,
}

impl Layout {
    /// Wrap `children` in this layout.
    #[must_use]
    pub fn wrap(self, children: &Markup) -> Markup {
        match self {
            Self::Root => children.clone(),
            Self::Dashboard => dashboard_layout(children),
        }
    }
}

/// Dashboard section layout: a fixed heading followed by the children,
/// unmodified.
///
/// # Examples
/// ```
/// use maud::html;
/// use site::views::dashboard_layout;
///
/// let html = dashboard_layout(&html! { main { "x" } }).into_string();
/// assert!(html.contains("Dashboard Layout</h1><main>x</main>"));
/// ```
#[must_use]
pub fn dashboard_layout(children: &Markup) -> Markup {
    html! {
        div {
            h1 class="text-3xl" { "Dashboard Layout" }
            (children)
        }
    }
}

/// Full HTML document around `body`. `page_title` is escaped.
#[must_use]
pub fn document(page_title: &str, body: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) }
            }
            body { (body) }
        }
    }
}
