//! Page request handlers.
//!
//! Handlers are registered per route by
//! [`RouteTable::configure`](super::routes::RouteTable::configure); they
//! only translate between HTTP and the pure route renderers.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use super::ApiResult;
use super::routes::{PageRoute, RouteParams};
use super::state::PageState;
use crate::domain::Error;
use crate::domain::ports::RenderEvent;

/// Methods every page resource answers.
pub(crate) const ALLOWED_METHODS: &str = "GET, HEAD";

/// Decode a matched path segment completely.
///
/// The router leaves `%25`, `%2F` and `%2B` encoded so that segment
/// boundaries survive matching; handlers want the identifier as typed.
/// Byte sequences that are not UTF-8 are replaced rather than rejected.
fn decode_segment(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

fn route_params(req: &HttpRequest) -> RouteParams {
    req.match_info()
        .iter()
        .map(|(name, raw)| (name, decode_segment(raw)))
        .collect()
}

/// Render `route` for `req` and notify the render observer.
///
/// The observer runs after rendering succeeds, so a failed render reports
/// nothing.
pub(crate) fn serve_page(
    route: &PageRoute,
    req: &HttpRequest,
    state: &PageState,
) -> ApiResult<HttpResponse> {
    let html = route.render(&route_params(req), state.fragment())?;
    state.observer().page_rendered(&RenderEvent {
        page: route.page(),
        path: req.path(),
        diagnostic: route.diagnostic(),
    });
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html.into_string()))
}

/// Answer for a registered path requested with an unsupported method.
pub(crate) async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    debug!(path = req.path(), method = %req.method(), "method not allowed");
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, ALLOWED_METHODS))
        .finish()
}

/// Fallback for paths without a registered page.
pub(crate) async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(path = req.path(), method = %req.method(), "no page registered");
    Err(Error::not_found(format!("no page for {}", req.path())))
}
