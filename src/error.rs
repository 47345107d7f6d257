// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::store::StoreError;
use crate::validation::FieldError;

/// HTTP API error with client-facing body shapes.
///
/// The contract only defines bodies for validation failures and missing
/// records; anything else surfaces as a generic 500 with the real cause
/// logged server-side.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request, body `{"errors": [...]}`
    Validation(Vec<FieldError>),
    /// 404 Not Found, body `{"error": "..."}`
    NotFound(&'static str),
    /// 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    pub fn bot_not_found() -> Self {
        ApiError::NotFound("Bot No Encontrado")
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body. The `errors` and `error` shapes are mutually exclusive and
    /// never mixed within one response.
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Validation(errors) => json!({ "errors": errors }),
            ApiError::NotFound(message) => json!({ "error": message }),
            // Internal details stay in the logs.
            ApiError::Internal(_) => json!({ "error": "Internal Server Error" }),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::bot_not_found(),
            other => {
                tracing::error!("store error: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(errors) => write!(f, "validation failed ({} errors)", errors.len()),
            ApiError::NotFound(message) => write!(f, "{}", message),
            ApiError::Internal(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
