use crate::domain::RecordPayload;
use crate::storage::StoreError;
use crate::transport::http::types::{ErrorResponse, MSG_INVALID_BODY, MSG_NOT_FOUND};
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::Json;

pub type ErrorReply = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, message: impl Into<String>) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// 400 for a body that is not JSON or does not match the payload shape.
pub fn invalid_body(err: serde_json::Error) -> ErrorReply {
    tracing::debug!(error = %err, "rejected request body");
    error_response(StatusCode::BAD_REQUEST, MSG_INVALID_BODY)
}

/// Decodes a record payload regardless of the request's `Content-Type`.
pub fn parse_payload(body: &Bytes) -> Result<RecordPayload, ErrorReply> {
    serde_json::from_slice(body).map_err(invalid_body)
}

pub fn not_found() -> ErrorReply {
    error_response(StatusCode::NOT_FOUND, MSG_NOT_FOUND)
}

/// 500 with a generic message; the underlying fault only goes to the log.
pub fn store_failure(operation: &'static str, err: &StoreError, message: &str) -> ErrorReply {
    tracing::error!(operation, kind = err.kind(), error = %err, "store operation failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}
