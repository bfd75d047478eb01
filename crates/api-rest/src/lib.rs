//! # API REST
//!
//! REST API implementation for ChargedFile.
//!
//! Handles:
//! - HTTP endpoints with axum (upload, download, list, delete, metadata, health)
//! - OpenAPI documentation served as JSON
//! - REST-specific concerns (multipart parsing, status mapping, CORS, body limits)
//!
//! Uses `api-shared` for response types and `chargedfile_files` for storage.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod handlers;

use api_shared::{FileMetadataRes, HealthRes};
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use chargedfile_files::FileStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use config::RestConfig;
pub use error::ApiError;

/// Application state shared across REST API handlers
///
/// Cloning is cheap: every clone refers to the same underlying store.
#[derive(Clone, Default)]
pub struct AppState {
    store: FileStore,
}

impl AppState {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::upload_file,
        handlers::download_file,
        handlers::list_files,
        handlers::delete_file,
        handlers::file_metadata,
    ),
    components(schemas(HealthRes, FileMetadataRes, handlers::UploadForm))
)]
pub struct ApiDoc;

/// Builds the REST router over `state`.
///
/// Request bodies are capped at [`RestConfig::max_upload_bytes`].
pub fn router(state: AppState, config: &RestConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api-docs/openapi.json", get(handlers::openapi))
        .route("/files", get(handlers::list_files))
        .route("/files/upload", post(handlers::upload_file))
        .route("/files/download/:id", get(handlers::download_file))
        .route("/files/:id", delete(handlers::delete_file))
        .route("/files/:id/metadata", get(handlers::file_metadata))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
