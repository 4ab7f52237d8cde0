use crate::domain::{Record, RecordPayload};
use crate::transport::http::handlers::{health, records};
use crate::transport::http::types::{
    AckResponse, AppState, CreatedResponse, ErrorResponse, HealthResponse,
};
use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        records::list_records_handler,
        records::create_record_handler,
        records::update_record_handler,
        records::delete_record_handler
    ),
    components(schemas(
        Record,
        RecordPayload,
        CreatedResponse,
        AckResponse,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

/// Routes only; no middleware.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/records",
            get(records::list_records_handler).post(records::create_record_handler),
        )
        .route(
            "/records/",
            get(records::list_records_handler).post(records::create_record_handler),
        )
        .route(
            "/records/:id",
            put(records::update_record_handler).delete(records::delete_record_handler),
        )
        .with_state(app_state)
}

/// The served application: routes, Swagger UI, CORS and per-request tracing.
pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
