use crate::domain::{IdGenerator, UuidV4Generator};
use crate::storage::RecordStore;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared handler state: the process-wide store handle and id generator.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    /// State with random UUID identifiers.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            ids: Arc::new(UuidV4Generator),
        }
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }
}

/// Body of every non-2xx response: `{"error": "<message>"}`.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of a successful create: `{"error": false, "id": "<id>"}`.
///
/// The `error` flag on success bodies is part of the wire format existing
/// clients expect.
#[derive(Serialize, Debug, ToSchema)]
pub struct CreatedResponse {
    pub error: bool,
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: String) -> Self {
        Self { error: false, id }
    }
}

/// Body of a successful update or delete: `{"error": false}`.
#[derive(Serialize, Debug, ToSchema)]
pub struct AckResponse {
    pub error: bool,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self { error: false }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub const MSG_INVALID_BODY: &str = "Invalid request body";
pub const MSG_NOT_FOUND: &str = "Record not found";
pub const MSG_LIST_FAILED: &str = "Error retrieving records";
pub const MSG_CREATE_FAILED: &str = "Error creating record";
pub const MSG_UPDATE_FAILED: &str = "Error updating record";
