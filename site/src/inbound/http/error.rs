//! HTTP presentation of domain errors.
//!
//! Page routes answer browsers, so errors render as HTML documents rather
//! than JSON envelopes. Internal messages never reach the client.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};
use crate::views::{document, pages};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const INTERNAL_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self.code() {
            ErrorCode::NotFound => pages::not_found(),
            ErrorCode::InternalError => {
                error!(
                    error = %self,
                    trace_id = self.trace_id(),
                    "page render failed"
                );
                pages::error_page(status.as_u16(), INTERNAL_MESSAGE)
            }
        };
        let title = status.canonical_reason().unwrap_or("Error");

        let mut builder = HttpResponse::build(status);
        builder.content_type(ContentType::html());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.body(document(title, &body).into_string())
    }
}
