//! Correlation identifier carried by every request.
//!
//! The trace middleware either adopts the identifier a proxy sent in the
//! `trace-id` request header or mints a fresh one, then runs the request
//! with it installed in task-local storage. Render diagnostics and error
//! pages read it back through [`TraceId::current`].
//!
//! Task locals do not follow spawned tasks; wrap spawned work in
//! [`TraceId::scope`] to keep the identifier.

use std::fmt;
use std::future::Future;

use uuid::Uuid;

/// Header carrying the identifier, on requests and responses alike.
pub const TRACE_ID_HEADER: &str = "trace-id";

tokio::task_local! {
    static CURRENT: TraceId;
}

/// UUID naming one request across logs, diagnostics and error pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a random (v4) identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Adopt an identifier received in a request header.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a UUID is
    /// refused so that arbitrary client text never reaches the logs as a
    /// trace id.
    ///
    /// # Examples
    /// ```
    /// use site::domain::TraceId;
    ///
    /// let id = TraceId::from_header(" 8a7e3c52-1f04-4d2b-b6a1-0c9e5d7f2b13 ");
    /// assert_eq!(
    ///     id.map(|id| id.to_string()).as_deref(),
    ///     Some("8a7e3c52-1f04-4d2b-b6a1-0c9e5d7f2b13")
    /// );
    /// assert!(TraceId::from_header("<script>").is_none());
    /// ```
    #[must_use]
    pub fn from_header(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `self` as the current identifier.
    pub async fn scope<Fut: Future>(self, fut: Fut) -> Fut::Output {
        CURRENT.scope(self, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.as_hyphenated(), f)
    }
}
