//! Stable identifiers for the pages the site serves.

use std::fmt;

/// Page served by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    /// Landing page at `/`.
    Home,
    /// About page.
    About,
    /// Dashboard user listing.
    Users,
    /// Dashboard per-user detail page.
    UserDetails,
}

impl PageId {
    /// Short name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Users => "users",
            Self::UserDetails => "user_details",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
