//! User references.
//!
//! A user is only ever known by the identifier embedded in a link or
//! received as a route parameter. Nothing is looked up or validated.

use std::fmt;

/// Base path of the per-user detail pages.
pub const USER_DETAILS_BASE: &str = "/dashboard/users";

/// Identifiers listed on the users page.
pub const SAMPLE_USER_IDS: [&str; 4] = ["1", "2", "3", "4"];

/// Opaque reference to a user, holding the identifier exactly as given.
///
/// ## Invariants
/// - The identifier is never trimmed, normalised or checked for existence.
///
/// # Examples
/// ```
/// use site::domain::UserRef;
///
/// let user = UserRef::new("7");
/// assert_eq!(user.detail_path(), "/dashboard/users/7");
/// assert_eq!(user.label(), "User 7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserRef(String);

impl UserRef {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as received.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }

    /// Path of this user's detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("{USER_DETAILS_BASE}/{}", self.0)
    }

    /// Visible link text for this user.
    #[must_use]
    pub fn label(&self) -> String {
        format!("User {}", self.0)
    }

    /// References for [`SAMPLE_USER_IDS`], in listing order.
    #[must_use]
    pub fn samples() -> Vec<Self> {
        SAMPLE_USER_IDS.iter().copied().map(Self::new).collect()
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
