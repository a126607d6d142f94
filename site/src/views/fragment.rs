//! Shared interactive fragments.
//!
//! A fragment takes no arguments and owns its markup. The server only
//! emits the mount point; whatever behaviour runs in the browser is the
//! fragment's own business.

use maud::{Markup, html};

/// Zero-argument, self-contained piece of UI included by several pages.
pub trait Fragment: Send + Sync {
    /// Render the fragment.
    fn render(&self) -> Markup;
}

/// The `Hello` fragment shown on the home and about pages.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelloFragment;

impl Fragment for HelloFragment {
    fn render(&self) -> Markup {
        html! {
            div data-fragment="hello" { p { "Hello" } }
        }
    }
}
