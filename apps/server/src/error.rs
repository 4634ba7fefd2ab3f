//! Maps core errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use margindesk_core::fx::FxError;
use margindesk_core::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            // A missing rate kills one reporting request, nothing else.
            Error::Fx(FxError::RateNotFound(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Fx(_) => StatusCode::BAD_GATEWAY,
            Error::Database(_) => StatusCode::BAD_GATEWAY,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!("request failed: {}", self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
