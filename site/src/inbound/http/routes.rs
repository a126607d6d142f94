//! Explicit route table.
//!
//! Each entry maps a path pattern to a pure page handler, the layout that
//! wraps the handler's output, and an optional diagnostic reported through
//! the render observer.
//!
//! ```text
//! GET|HEAD /                       home
//! GET|HEAD /about                  about
//! GET|HEAD /dashboard/users        user listing   (dashboard layout)
//! GET|HEAD /dashboard/users/{id}   user details   (dashboard layout)
//! ```
//!
//! Other methods on a registered path answer `405` with an `Allow` header.

use std::fmt;
use std::sync::Arc;

use actix_web::{HttpRequest, guard, web};
use thiserror::Error;

use super::pages::{method_not_allowed, not_found, serve_page};
use super::state::PageState;
use crate::domain::{self, PageId, UserRef};
use crate::views::{self, Fragment, Layout, Markup, document};

/// Pure page handler: route parameters in, page markup out.
pub type PageHandler = fn(&RenderContext<'_>) -> Result<Markup, domain::Error>;

/// Path parameters extracted for a matched route, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(Vec<(String, String)>);

impl RouteParams {
    /// Value of the named parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Value of the named parameter, or an internal error when the route
    /// pattern does not declare it.
    ///
    /// # Errors
    /// Returns [`domain::Error`] with
    /// [`ErrorCode::InternalError`](domain::ErrorCode::InternalError) when
    /// the parameter is absent.
    pub fn require(&self, name: &str) -> Result<&str, domain::Error> {
        self.get(name)
            .ok_or_else(|| domain::Error::internal(format!("route parameter `{name}` is missing")))
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Inputs available to a page handler.
pub struct RenderContext<'a> {
    params: &'a RouteParams,
    fragment: &'a dyn Fragment,
}

impl<'a> RenderContext<'a> {
    /// Bundle the inputs for one render.
    #[must_use]
    pub fn new(params: &'a RouteParams, fragment: &'a dyn Fragment) -> Self {
        Self { params, fragment }
    }

    /// Route parameters.
    #[must_use]
    pub fn params(&self) -> &RouteParams {
        self.params
    }

    /// Rendered shared fragment.
    #[must_use]
    pub fn fragment(&self) -> Markup {
        self.fragment.render()
    }
}

/// One entry of the [`RouteTable`].
#[derive(Clone)]
pub struct PageRoute {
    page: PageId,
    pattern: &'static str,
    title: &'static str,
    layout: Layout,
    diagnostic: Option<&'static str>,
    handler: PageHandler,
}

impl fmt::Debug for PageRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageRoute")
            .field("page", &self.page)
            .field("pattern", &self.pattern)
            .field("title", &self.title)
            .field("layout", &self.layout)
            .field("diagnostic", &self.diagnostic)
            .finish_non_exhaustive()
    }
}

impl PageRoute {
    /// Route served without a section layout.
    #[must_use]
    pub fn new(
        page: PageId,
        pattern: &'static str,
        title: &'static str,
        handler: PageHandler,
    ) -> Self {
        Self {
            page,
            pattern,
            title,
            layout: Layout::Root,
            diagnostic: None,
            handler,
        }
    }

    /// Wrap the page output in `layout`.
    #[must_use]
    pub fn in_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Attach a diagnostic message reported each time the page is served.
    #[must_use]
    pub fn with_diagnostic(mut self, message: &'static str) -> Self {
        self.diagnostic = Some(message);
        self
    }

    /// Page identifier.
    #[must_use]
    pub fn page(&self) -> PageId {
        self.page
    }

    /// Path pattern, using `{name}` for parameter segments.
    #[must_use]
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Document title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Layout applied around the page.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Diagnostic message, if any.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&'static str> {
        self.diagnostic
    }

    /// Render the complete document for this route.
    ///
    /// # Errors
    /// Propagates the handler's [`domain::Error`].
    pub fn render(
        &self,
        params: &RouteParams,
        fragment: &dyn Fragment,
    ) -> Result<Markup, domain::Error> {
        let page = (self.handler)(&RenderContext::new(params, fragment))?;
        Ok(document(self.title, &self.layout.wrap(&page)))
    }
}

/// Errors raised while building a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    /// Another route already serves the same path shape.
    #[error("route pattern `{pattern}` conflicts with the pattern registered for `{existing}`")]
    Duplicate {
        /// Rejected pattern.
        pattern: String,
        /// Page already registered for that shape.
        existing: PageId,
    },
    /// The pattern is malformed.
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// Rejected pattern.
        pattern: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Reduce a pattern to its shape: parameter names are erased so that
/// `/users/{id}` and `/users/{user}` compare equal.
fn pattern_shape(pattern: &'static str) -> Result<String, RouteTableError> {
    let invalid = |reason| RouteTableError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason,
    };
    let Some(rest) = pattern.strip_prefix('/') else {
        return Err(invalid("must start with `/`"));
    };
    if rest.is_empty() {
        return Ok("/".to_owned());
    }
    let mut shape = String::with_capacity(pattern.len());
    for segment in rest.split('/') {
        if segment.is_empty() {
            return Err(invalid("empty path segment"));
        }
        shape.push('/');
        match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) if name.is_empty() || name.contains(['{', '}']) => {
                return Err(invalid("malformed parameter segment"));
            }
            Some(_) => shape.push_str("{}"),
            None if segment.contains(['{', '}']) => {
                return Err(invalid("parameters must span a whole segment"));
            }
            None => shape.push_str(segment),
        }
    }
    Ok(shape)
}

/// Ordered set of page routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<(String, Arc<PageRoute>)>,
}

impl RouteTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's pages.
    ///
    /// # Errors
    /// Returns [`RouteTableError`] if the built-in routes conflict.
    pub fn site() -> Result<Self, RouteTableError> {
        let mut table = Self::new();
        table.register(
            PageRoute::new(PageId::Home, "/", "Home", render_home)
                .with_diagnostic("Which component am I?"),
        )?;
        table.register(PageRoute::new(
            PageId::About,
            "/about",
            "About",
            render_about,
        ))?;
        table.register(
            PageRoute::new(PageId::Users, "/dashboard/users", "Users", render_users)
                .in_layout(Layout::Dashboard),
        )?;
        table.register(
            PageRoute::new(
                PageId::UserDetails,
                "/dashboard/users/{id}",
                "User details",
                render_user_details,
            )
            .in_layout(Layout::Dashboard),
        )?;
        Ok(table)
    }

    /// Add a route.
    ///
    /// # Errors
    /// Returns [`RouteTableError::InvalidPattern`] for malformed patterns and
    /// [`RouteTableError::Duplicate`] when a route with the same shape is
    /// already present.
    pub fn register(&mut self, route: PageRoute) -> Result<(), RouteTableError> {
        let shape = pattern_shape(route.pattern)?;
        if let Some((_, existing)) = self.routes.iter().find(|(known, _)| *known == shape) {
            return Err(RouteTableError::Duplicate {
                pattern: route.pattern.to_owned(),
                existing: existing.page,
            });
        }
        self.routes.push((shape, Arc::new(route)));
        Ok(())
    }

    /// Registered routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PageRoute> {
        self.routes.iter().map(|(_, route)| route.as_ref())
    }

    /// Route serving `page`, if registered.
    #[must_use]
    pub fn get(&self, page: PageId) -> Option<&PageRoute> {
        self.iter().find(|route| route.page == page)
    }

    /// Number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Register every route as a resource answering `GET` and `HEAD`, with
    /// `405 Method Not Allowed` for other methods and the not-found page as
    /// the fallback for unknown paths.
    ///
    /// Handlers read [`PageState`] from application data.
    ///
    /// # Examples
    /// ```
    /// use actix_web::{App, web};
    /// use site::inbound::http::routes::RouteTable;
    /// use site::inbound::http::state::PageState;
    ///
    /// let table = RouteTable::site().expect("built-in routes");
    /// let _app = App::new()
    ///     .app_data(web::Data::new(PageState::default()))
    ///     .configure(|cfg| table.configure(cfg));
    /// ```
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        for (_, route) in &self.routes {
            let pattern = route.pattern;
            let route = Arc::clone(route);
            let handler = move |req: HttpRequest, state: web::Data<PageState>| {
                let route = Arc::clone(&route);
                async move { serve_page(&route, &req, &state) }
            };
            cfg.service(
                web::resource(pattern)
                    .route(
                        web::route()
                            .guard(guard::Any(guard::Get()).or(guard::Head()))
                            .to(handler),
                    )
                    .default_service(web::to(method_not_allowed)),
            );
        }
        cfg.default_service(web::to(not_found));
    }
}

fn render_home(ctx: &RenderContext<'_>) -> Result<Markup, domain::Error> {
    Ok(views::home(&ctx.fragment()))
}

fn render_about(ctx: &RenderContext<'_>) -> Result<Markup, domain::Error> {
    Ok(views::about(&ctx.fragment()))
}

fn render_users(_ctx: &RenderContext<'_>) -> Result<Markup, domain::Error> {
    Ok(views::user_listing(&UserRef::samples()))
}

fn render_user_details(ctx: &RenderContext<'_>) -> Result<Markup, domain::Error> {
    let id = ctx.params().require("id")?;
    Ok(views::user_details(&UserRef::new(id)))
}

#[cfg(test)]
mod tests;
