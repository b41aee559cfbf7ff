//! quicknotes-api - HTTP surface for the notes store.
//!
//! The router is a static table keyed by method and path. Handlers receive
//! the repository through [`AppState`]; nothing else is shared between
//! requests.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use quicknotes_core::NoteRepository;

pub use config::ServerSettings;
pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Note storage. PostgreSQL in production.
    pub notes: Arc<dyn NoteRepository>,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }
}

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Fully open CORS.
///
/// Browsers refuse a literal `*` together with credentials, so the request's
/// origin, method, and headers are echoed back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    use handlers::{notes, system};

    Router::new()
        // Health check
        .route("/health", get(system::health_check))
        // OpenAPI document and Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi::openapi()))
        // Notes
        .route("/notes/", get(notes::list_notes).post(notes::create_note))
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/notes/:note_id",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        // Middleware
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors_layer())
        .with_state(state)
}
