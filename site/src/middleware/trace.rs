//! Request tracing middleware.
//!
//! Every request runs with a [`TraceId`] in scope: the one a proxy sent in
//! the `trace-id` header when it holds a UUID, otherwise a fresh one. The
//! identifier is returned in the `trace-id` response header, and one
//! `debug` event is logged per completed request.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, error};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware factory; wrap the app with it.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use site::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let inbound = req
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(TraceId::from_header);
        let adopted = inbound.is_some();
        let trace_id = inbound.unwrap_or_else(TraceId::generate);
        let method = req.method().clone();
        let path = req.path().to_owned();
        let fut = self.service.call(req);
        Box::pin(trace_id.scope(async move {
            let mut res = fut.await?;
            match HeaderValue::from_str(&trace_id.to_string()) {
                Ok(value) => {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                }
                Err(err) => {
                    error!(error = %err, %trace_id, "failed to encode trace identifier header");
                }
            }
            debug!(
                %method,
                path = %path,
                status = res.status().as_u16(),
                %trace_id,
                adopted,
                "request completed"
            );
            Ok(res)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    const UPSTREAM: &str = "3f9d2b64-7c1e-4a8f-b0d5-61e2c9a7f4b8";

    async fn echo_current() -> HttpResponse {
        let id = TraceId::current().map(|id| id.to_string()).unwrap_or_default();
        HttpResponse::Ok().body(id)
    }

    /// Send one request, returning the response header and the identifier
    /// the handler observed.
    async fn round_trip(inbound: Option<&str>) -> (String, String) {
        let app =
            test::init_service(App::new().wrap(Trace).route("/", web::get().to(echo_current)))
                .await;
        let mut req = test::TestRequest::get().uri("/");
        if let Some(value) = inbound {
            req = req.insert_header((TRACE_ID_HEADER, value));
        }
        let res = test::call_service(&app, req.to_request()).await;
        let header = res
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .expect("trace id header")
            .to_owned();
        let body = test::read_body(res).await;
        (header, String::from_utf8(body.to_vec()).expect("utf8 body"))
    }

    #[actix_web::test]
    async fn handler_and_response_share_a_fresh_identifier() {
        let (header, seen) = round_trip(None).await;
        assert!(TraceId::from_header(&header).is_some());
        assert_eq!(seen, header);
    }

    #[actix_web::test]
    async fn requests_without_header_get_distinct_identifiers() {
        let (first, _) = round_trip(None).await;
        let (second, _) = round_trip(None).await;
        assert_ne!(first, second);
    }

    #[actix_web::test]
    async fn upstream_identifier_is_adopted() {
        let (header, seen) = round_trip(Some(UPSTREAM)).await;
        assert_eq!(header, UPSTREAM);
        assert_eq!(seen, UPSTREAM);
    }

    #[actix_web::test]
    async fn malformed_upstream_identifier_is_replaced() {
        let (header, seen) = round_trip(Some("not a uuid")).await;
        assert_ne!(header, "not a uuid");
        assert!(TraceId::from_header(&header).is_some());
        assert_eq!(seen, header);
    }
}
