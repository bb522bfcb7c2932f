use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body for every non-2xx response: a single code-style message,
/// surfaced verbatim to the caller.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
