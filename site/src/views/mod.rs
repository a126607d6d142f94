//! HTML views.
//!
//! Templates are `maud` macros returning [`Markup`]. Text spliced into a
//! template is escaped by `maud`; only markup values produced by other
//! templates are embedded as-is. Templates never log or read the request.
//! Layout and document wrapping is applied by the HTTP adapter.

mod banner;
mod fragment;
mod layout;
pub mod pages;

pub use banner::title_banner;
pub use fragment::{Fragment, HelloFragment};
pub use layout::{Layout, dashboard_layout, document};
pub use maud::Markup;
pub use pages::{about, home, user_details, user_listing};
