//! CRUD handlers for `/records`.
//!
//! Each handler is a one-shot pipeline: parse, validate, one store call
//! (two for update), shape the response. Nothing is retried.

use crate::domain::{validate, Record, RecordPayload};
use crate::transport::http::handlers::common::{
    error_response, not_found, parse_payload, store_failure,
};
use crate::transport::http::types::{
    AckResponse, AppState, CreatedResponse, ErrorResponse, MSG_CREATE_FAILED, MSG_LIST_FAILED,
    MSG_UPDATE_FAILED,
};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[utoipa::path(
    get,
    path = "/records/",
    responses(
        (status = 200, description = "All records", body = [Record]),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn list_records_handler(State(state): State<AppState>) -> Response {
    match state.store.list_all().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => store_failure("list", &e, MSG_LIST_FAILED).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/records/",
    request_body = RecordPayload,
    responses(
        (status = 201, description = "Record created", body = CreatedResponse),
        (status = 400, description = "Malformed or invalid body", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn create_record_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    let payload = match parse_payload(&body) {
        Ok(p) => p,
        Err(resp) => return resp.into_response(),
    };

    if let Err(e) = validate(&payload) {
        return error_response(StatusCode::BAD_REQUEST, e.to_string()).into_response();
    }

    let record = Record::new(state.ids.generate(), payload);
    match state.store.insert(&record).await {
        Ok(()) => {
            tracing::info!(id = %record.id, "record created");
            (StatusCode::CREATED, Json(CreatedResponse::new(record.id))).into_response()
        }
        Err(e) => store_failure("create", &e, MSG_CREATE_FAILED).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/records/{id}",
    params(
        ("id" = String, Path, description = "Record id")
    ),
    request_body = RecordPayload,
    responses(
        (status = 200, description = "Record updated", body = AckResponse),
        (status = 400, description = "Malformed or invalid body", body = ErrorResponse),
        (status = 404, description = "Record not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    )
)]
pub async fn update_record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let payload = match parse_payload(&body) {
        Ok(p) => p,
        Err(resp) => return resp.into_response(),
    };

    if let Err(e) = validate(&payload) {
        return error_response(StatusCode::BAD_REQUEST, e.to_string()).into_response();
    }

    let mut record = match state.store.find_by_id(&id).await {
        Ok(r) => r,
        Err(e) if e.is_not_found() => return not_found().into_response(),
        Err(e) => return store_failure("update", &e, MSG_UPDATE_FAILED).into_response(),
    };
    record.apply(payload);

    // The store only rewrites a row that still exists, so a concurrent delete surfaces as 404.
    match state.store.update(&record).await {
        Ok(()) => {
            tracing::info!(id = %record.id, "record updated");
            (StatusCode::OK, Json(AckResponse::ok())).into_response()
        }
        Err(e) if e.is_not_found() => not_found().into_response(),
        Err(e) => store_failure("update", &e, MSG_UPDATE_FAILED).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/records/{id}",
    params(
        ("id" = String, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Record deleted", body = AckResponse),
        (status = 404, description = "Record not found, or the store failed", body = ErrorResponse)
    )
)]
pub async fn delete_record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.store.delete(&id).await {
        Ok(()) => {
            tracing::info!(id = %id, "record deleted");
            (StatusCode::OK, Json(AckResponse::ok())).into_response()
        }
        Err(e) if e.is_not_found() => not_found().into_response(),
        Err(e) => {
            // Faults keep the 404 status existing clients rely on.
            tracing::error!(id = %id, kind = e.kind(), error = %e, "delete failed, answering 404");
            not_found().into_response()
        }
    }
}
