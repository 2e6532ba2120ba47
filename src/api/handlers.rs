//! API request handlers
//!
//! Handlers for the upload/download boundary: multipart batches in, zip
//! archive (or JSON preview) out.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::batch;
use crate::types::{BatchWarning, RenamedFile, UploadedFile};

use super::server::AppState;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Sheetpack API Server".to_string(),
        version: state.version.clone(),
        description: "Batch-rename spreadsheets by cell content and pack them into a zip"
            .to_string(),
        endpoints: vec![
            EndpointInfo {
                path: "/health".to_string(),
                method: "GET".to_string(),
                description: "Health check endpoint".to_string(),
            },
            EndpointInfo {
                path: "/version".to_string(),
                method: "GET".to_string(),
                description: "Get server version".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/process".to_string(),
                method: "POST".to_string(),
                description: "Upload spreadsheets (multipart), download the renamed zip"
                    .to_string(),
            },
            EndpointInfo {
                path: "/api/v1/preview".to_string(),
                method: "POST".to_string(),
                description: "Upload spreadsheets (multipart), get the rename report as JSON"
                    .to_string(),
            },
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec!["process".to_string(), "preview".to_string()],
    }))
}

/// Preview response
#[derive(Serialize, Default)]
pub struct PreviewResponse {
    pub files: Vec<RenamedFile>,
    pub warnings: Vec<BatchWarning>,
}

/// POST /api/v1/process - Rename the uploaded batch and return the archive
///
/// Responds with the zip bytes as an attachment. Per-file warnings are
/// logged and counted in the `x-batch-warnings` header; they do not fail
/// the request.
pub async fn process_batch(multipart: Multipart) -> Response {
    let files = match collect_files(multipart).await {
        Ok(files) => files,
        Err(message) => return reject(StatusCode::BAD_REQUEST, message),
    };
    if files.is_empty() {
        return reject(StatusCode::BAD_REQUEST, "no files uploaded".to_string());
    }

    match batch::process(files) {
        Ok(output) => {
            for warning in &output.warnings {
                warn!("{warning}");
            }

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "application/zip")
                .header(
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", output.archive_name),
                )
                .header("x-batch-warnings", output.warnings.len().to_string())
                .body(Body::from(output.archive))
                .unwrap()
        }
        Err(e) => reject(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// POST /api/v1/preview - Report the names a process run would produce
pub async fn preview_batch(multipart: Multipart) -> Response {
    let files = match collect_files(multipart).await {
        Ok(files) => files,
        Err(message) => return reject(StatusCode::BAD_REQUEST, message),
    };
    if files.is_empty() {
        return reject(StatusCode::BAD_REQUEST, "no files uploaded".to_string());
    }

    match batch::preview(files) {
        Ok(result) => Json(ApiResponse::ok(PreviewResponse {
            files: result.files,
            warnings: result.warnings,
        }))
        .into_response(),
        Err(e) => reject(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// Drain the multipart stream, keeping every file-bearing field.
async fn collect_files(mut multipart: Multipart) -> Result<Vec<UploadedFile>, String> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("invalid multipart body: {e}"))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content = field
            .bytes()
            .await
            .map_err(|e| format!("failed to read upload {file_name}: {e}"))?;
        files.push(UploadedFile::new(file_name, content.to_vec()));
    }

    Ok(files)
}

fn reject(status: StatusCode, message: String) -> Response {
    (status, Json(ApiResponse::<PreviewResponse>::err(message))).into_response()
}
