//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn failures into the HTML error page with a consistent status
//! code.

use actix_web::http::header::HeaderName;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TRACE_ID_HEADER;

use super::views::{TodoViews, html_response};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Shown when a submitted title is missing, empty, or too long.
pub const INVALID_TITLE_MESSAGE: &str = "Titill ekki rétt formaður";
/// Shown for any path no route matches.
pub const NOT_FOUND_MESSAGE: &str = "ekkert að finna hér ;-))";
/// Shown when a new task could not be stored.
pub const SAVE_FAILED_MESSAGE: &str = "gat ekki vistað gagnagrunn";
/// Shown on the list page when the store cannot be read.
pub const LIST_FAILED_MESSAGE: &str = "villa";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let page = TodoViews::shared().render_error(self.message());
        let mut response = html_response(self.status_code(), page);
        if let Some(id) = self.trace_id()
            && let Ok(value) = id.parse()
        {
            response
                .headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        response
    }
}
