//! Router configuration for the Web API.

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::dto::{
    FileInfoResponse, FileUploadResponse, TextResponse, TextUploadResponse, UploadConfigResponse,
};
use super::handlers::{file, text, AppState};

/// Extra room on top of the upload cap so multipart framing never trips
/// the transport-level limit; oversize payloads are rejected by the
/// handlers with the uniform 400 body instead of a bare 413.
const BODY_LIMIT_HEADROOM: usize = 1024 * 1024;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        file::get_upload_config,
        file::upload_file,
        file::verify_file_password,
        file::download_file,
        file::delete_file,
        file::upload_text_as_file,
        file::list_files,
        text::upload_text,
        text::verify_text_password,
        text::get_text,
        text::list_texts,
        text::delete_text,
    ),
    components(schemas(
        UploadConfigResponse,
        FileUploadResponse,
        FileInfoResponse,
        TextUploadResponse,
        TextResponse,
    )),
    tags(
        (name = "files", description = "File upload, download and management"),
        (name = "texts", description = "Text snippet management")
    )
)]
pub struct ApiDoc;

/// Create the main API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.max_upload_bytes() as usize + BODY_LIMIT_HEADROOM;

    Router::new()
        .route("/api/files", get(file::list_files))
        .route("/api/files/config", get(file::get_upload_config))
        .route("/api/files/upload", post(file::upload_file))
        .route("/api/files/upload/text", post(file::upload_text_as_file))
        .route(
            "/api/files/:id",
            get(file::download_file).delete(file::delete_file),
        )
        .route("/api/files/:id/verify", post(file::verify_file_password))
        .route("/api/texts", get(text::list_texts))
        .route("/api/texts/upload", post(text::upload_text))
        .route(
            "/api/texts/:id",
            get(text::get_text).delete(text::delete_text),
        )
        .route("/api/texts/:id/verify", post(text::verify_text_password))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

/// Create a CORS layer.
///
/// The API is open to any origin on all endpoints.
pub fn create_cors_layer() -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

    CorsLayer::new()
        .allow_methods(methods)
        .allow_headers(Any)
        .allow_origin(Any)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the Swagger UI router serving the OpenAPI document.
pub fn create_swagger_router() -> Router {
    Router::new().merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
