//! Request handlers for the file endpoints.
//!
//! Each handler translates one HTTP operation into a single [`FileStore`] call and formats the
//! result. No handler holds state between requests.
//!
//! [`FileStore`]: chargedfile_files::FileStore

use crate::error::ApiError;
use crate::{ApiDoc, AppState};
use api_shared::messages::FILE_DELETED;
use api_shared::{FileMetadataRes, HealthRes, HealthService};
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Json, Response};
use utoipa::{OpenApi, ToSchema};

/// Name of the multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Multipart upload form, for the OpenAPI document only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used by monitoring and load balancer health checks.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health(state.store.len()))
}

/// Serves the OpenAPI document describing this API.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    post,
    path = "/files/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored; body is the generated identifier", body = String),
        (status = 400, description = "No `file` field in the form"),
        (status = 500, description = "Upload could not be read")
    )
)]
/// Store an uploaded file
///
/// Reads multipart fields until the one named `file`, stores its filename and bytes, and answers
/// with the generated identifier as plain text. Other fields are ignored. A `file` field without
/// a filename is stored under the empty name.
///
/// # Errors
/// Returns `500 Internal Server Error` with a generic message if the body is not multipart or a
/// field cannot be read (including bodies over the configured size limit), and `400 Bad Request`
/// if no `file` field is present.
#[axum::debug_handler]
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<String, ApiError> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            tracing::debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let content = field.bytes().await?;
        let size_bytes = content.len();

        let id = state.store.put(name, content.to_vec());
        tracing::info!(file_id = %id, size_bytes, "File uploaded");

        return Ok(id.to_string());
    }

    Err(ApiError::MissingFileField)
}

#[utoipa::path(
    get,
    path = "/files/download/{id}",
    params(("id" = String, Path, description = "File identifier")),
    responses(
        (status = 200, description = "Raw file bytes, with a Content-Disposition attachment header"),
        (status = 404, description = "Unknown identifier (empty body)")
    )
)]
/// Download a stored file
///
/// Answers with the exact stored bytes and a `Content-Disposition: attachment` header naming the
/// original file, so browsers offer to save it.
#[axum::debug_handler]
pub async fn download_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let record = state.store.get(&id).ok_or_else(|| {
        tracing::debug!(file_id = %id, "Download of unknown file");
        ApiError::DownloadNotFound
    })?;

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/octet-stream"),
        ),
        (header::CONTENT_DISPOSITION, content_disposition(record.name())),
    ];

    Ok((headers, record.content().to_vec()).into_response())
}

#[utoipa::path(
    get,
    path = "/files",
    responses(
        (status = 200, description = "Names of all stored files, in no particular order", body = [String])
    )
)]
/// List stored file names
///
/// Only names are returned; identifiers and content are not part of the listing.
#[axum::debug_handler]
pub async fn list_files(State(state): State<AppState>) -> Json<Vec<String>> {
    let names = state
        .store
        .list()
        .iter()
        .map(|record| record.name().to_string())
        .collect();

    Json(names)
}

#[utoipa::path(
    delete,
    path = "/files/{id}",
    params(("id" = String, Path, description = "File identifier")),
    responses(
        (status = 200, description = "File deleted", body = String),
        (status = 404, description = "File not found", body = String)
    )
)]
/// Delete a stored file
#[axum::debug_handler]
pub async fn delete_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    if state.store.delete(&id) {
        tracing::info!(file_id = %id, "File deleted");
        Ok(FILE_DELETED)
    } else {
        Err(ApiError::NotFound)
    }
}

#[utoipa::path(
    get,
    path = "/files/{id}/metadata",
    params(("id" = String, Path, description = "File identifier")),
    responses(
        (status = 200, description = "Metadata of the stored file", body = FileMetadataRes),
        (status = 404, description = "File not found", body = String)
    )
)]
/// Describe a stored file without returning its content
#[axum::debug_handler]
pub async fn file_metadata(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FileMetadataRes>, ApiError> {
    let record = state.store.get(&id).ok_or(ApiError::NotFound)?;
    Ok(Json(FileMetadataRes::from(record.as_ref())))
}

/// Builds `attachment; filename="<name>"` for a stored name.
///
/// The name goes between the quotes verbatim. Control characters cannot appear in a header value,
/// so they are left out of the header; the stored name itself is untouched.
pub(crate) fn content_disposition(name: &str) -> HeaderValue {
    let name: String = name.chars().filter(|c| !c.is_control()).collect();
    let value = format!("attachment; filename=\"{}\"", name);

    HeaderValue::from_bytes(value.as_bytes())
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}
