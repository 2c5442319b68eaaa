use axum::{Json, extract::rejection::JsonRejection};
use http::StatusCode;
use serde_json::{Value, json};

use dropbox_oauth2::{CoordinationError, OAuth2Error};

/// Error response body: `{"error": ..., "message": ...}`
pub(super) type ErrorResponse = (StatusCode, Json<Value>);

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, ErrorResponse>;
}

/// Map a rejected JSON request body to the same 400 shape as validation errors
pub(super) fn json_rejection_response(rejection: JsonRejection) -> ErrorResponse {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Invalid request", "message": rejection.body_text() })),
    )
}

fn oauth2_status(err: &OAuth2Error) -> StatusCode {
    if err.is_caller_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Implementation for CoordinationError to map variants to appropriate status codes
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, ErrorResponse> {
        self.map_err(|e| match e {
            CoordinationError::ProviderError { error, .. } => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": error })))
            }
            CoordinationError::OAuth2Error(err) => {
                let status = oauth2_status(&err);
                let label = if status == StatusCode::BAD_REQUEST {
                    "Invalid request"
                } else {
                    "Failed to complete OAuth flow"
                };
                (
                    status,
                    Json(json!({ "error": label, "message": err.to_string() })),
                )
            }
        })
    }
}
