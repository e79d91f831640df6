//! File handlers for the Web API.

use axum::{
    body::Body,
    extract::{Host, Multipart, Path, Query, State},
    http::header,
    response::Response,
    Form, Json,
};
use std::sync::Arc;
use utoipa;

use crate::file::{FileService, StoreFile};
use crate::web::dto::{
    FileInfoResponse, FileUploadResponse, PasswordQuery, TextAsFileRequest, UploadConfigResponse,
    VerifyRequest,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::SharebinError;

/// Generate a safe Content-Disposition header value for file downloads.
///
/// Control characters are removed (they could otherwise inject headers),
/// quotes and backslashes are replaced in the plain `filename` fallback,
/// and the full name is carried in the RFC 5987 UTF-8 `filename*`
/// parameter so non-ASCII names survive the round trip.
fn content_disposition_header(filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '"' => '_',
            '\\' => '_',
            _ => c,
        })
        .collect();

    let encoded = urlencoding::encode(filename);

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        sanitized, encoded
    )
}

/// GET /api/files/config - Return the configured upload limit.
#[utoipa::path(
    get,
    path = "/api/files/config",
    tag = "files",
    responses(
        (status = 200, description = "Upload limit in megabytes", body = UploadConfigResponse)
    )
)]
pub async fn get_upload_config(State(state): State<Arc<AppState>>) -> Json<UploadConfigResponse> {
    Json(UploadConfigResponse {
        max_file_size: state.max_file_size_mb,
    })
}

/// POST /api/files/upload - Upload a file.
///
/// Request body: multipart/form-data with a "file" part and optional
/// "remark" and "password" text parts.
#[utoipa::path(
    post,
    path = "/api/files/upload",
    tag = "files",
    responses(
        (status = 200, description = "File stored", body = FileUploadResponse),
        (status = 400, description = "Missing file, oversize upload, or store failure")
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<FileUploadResponse>, ApiError> {
    let mut file_name: Option<String> = None;
    let mut declared_type: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;
    let mut remark: Option<String> = None;
    let mut password: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        ApiError::bad_request("Invalid multipart data")
    })? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                file_name = field.file_name().map(|s| s.to_string());
                declared_type = field.content_type().map(|s| s.to_string());
                content = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| {
                            tracing::error!("Failed to read file content: {}", e);
                            ApiError::bad_request("Failed to read file")
                        })?
                        .to_vec(),
                );
            }
            "remark" => {
                remark = Some(field.text().await.map_err(|e| {
                    tracing::error!("Failed to read remark: {}", e);
                    ApiError::bad_request("Invalid remark")
                })?);
            }
            "password" => {
                password = Some(field.text().await.map_err(|e| {
                    tracing::error!("Failed to read password: {}", e);
                    ApiError::bad_request("Invalid password field")
                })?);
            }
            _ => {}
        }
    }

    let file_name = file_name.ok_or_else(|| ApiError::bad_request("No file provided"))?;
    let content = content.ok_or_else(|| ApiError::bad_request("No file content"))?;

    // Enforce the upload limit before anything is persisted
    if content.len() as u64 > state.max_upload_bytes() {
        return Err(SharebinError::SizeExceeded {
            limit_mb: state.max_file_size_mb,
        }
        .into());
    }

    let size = content.len();

    let mut store = StoreFile::new(file_name, content);
    if let Some(ct) = declared_type {
        store = store.with_content_type(ct);
    }
    if let Some(r) = remark {
        store = store.with_remark(r);
    }
    if let Some(p) = password {
        store = store.with_password(p);
    }

    let service = FileService::new(state.db.pool());
    let record = service.store(store).await?;

    Ok(Json(FileUploadResponse {
        id: record.id,
        file_name: record.file_name,
        file_type: record.file_type,
        size,
        remark: record.remark,
        create_time: record.create_time,
    }))
}

/// POST /api/files/:id/verify - Verify a file password.
#[utoipa::path(
    post,
    path = "/api/files/{id}/verify",
    tag = "files",
    params(
        ("id" = i64, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "Password accepted", body = String),
        (status = 400, description = "Unknown file or wrong password")
    )
)]
pub async fn verify_file_password(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(req): Form<VerifyRequest>,
) -> Result<String, ApiError> {
    let password = req
        .password
        .ok_or_else(|| ApiError::bad_request("password is required"))?;

    let service = FileService::new(state.db.pool());
    service.fetch_with_password(id, &password).await?;

    Ok("Password verified successfully".to_string())
}

/// GET /api/files/:id - Download a file.
///
/// Always serves the payload as an attachment with a generic binary
/// content type so browsers save it instead of rendering it.
#[utoipa::path(
    get,
    path = "/api/files/{id}",
    tag = "files",
    params(
        ("id" = i64, Path, description = "File ID"),
        ("password" = Option<String>, Query, description = "Access password for protected files")
    ),
    responses(
        (status = 200, description = "File content", content_type = "application/x-binary"),
        (status = 400, description = "Unknown file, empty payload, or wrong password")
    )
)]
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<PasswordQuery>,
) -> Result<Response<Body>, ApiError> {
    let service = FileService::new(state.db.pool());

    let record = match query.password.as_deref() {
        Some(password) => service.fetch_with_password(id, password).await?,
        None => service.fetch(id).await?,
    };

    if record.data.is_empty() {
        return Err(ApiError::bad_request("File has no content"));
    }

    let file_name = if record.file_name.is_empty() {
        "download"
    } else {
        record.file_name.as_str()
    };
    let disposition = content_disposition_header(file_name);

    let length = record.data.len();
    let response = Response::builder()
        .header(header::CONTENT_TYPE, "application/x-binary")
        .header(header::CONTENT_DISPOSITION, disposition)
        .header(header::CONTENT_LENGTH, length)
        .header(
            header::CONTENT_RANGE,
            format!("bytes 0-{}/{}", length - 1, length),
        )
        .header(header::X_CONTENT_TYPE_OPTIONS, "nosniff")
        .body(Body::from(record.data))
        .map_err(|e| {
            tracing::error!("Failed to build download response: {}", e);
            ApiError::internal("Failed to build response")
        })?;

    Ok(response)
}

/// DELETE /api/files/:id - Delete a file.
#[utoipa::path(
    delete,
    path = "/api/files/{id}",
    tag = "files",
    params(
        ("id" = i64, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File deleted", body = String),
        (status = 400, description = "Unknown file")
    )
)]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<String, ApiError> {
    let service = FileService::new(state.db.pool());
    service.delete(id).await?;

    Ok("File deleted successfully".to_string())
}

/// POST /api/files/upload/text - Store text as a downloadable file.
///
/// Responds with the absolute URL of the new file resource.
#[utoipa::path(
    post,
    path = "/api/files/upload/text",
    tag = "files",
    responses(
        (status = 200, description = "URL of the stored file", body = String),
        (status = 400, description = "Missing content or file name")
    )
)]
pub async fn upload_text_as_file(
    State(state): State<Arc<AppState>>,
    Host(host): Host,
    Form(req): Form<TextAsFileRequest>,
) -> Result<String, ApiError> {
    let content = req
        .content
        .ok_or_else(|| ApiError::bad_request("content is required"))?;
    let file_name = req
        .file_name
        .ok_or_else(|| ApiError::bad_request("fileName is required"))?;

    let service = FileService::new(state.db.pool());
    let record = service.store_raw(&file_name, content.into_bytes()).await?;

    Ok(format!("http://{}/api/files/{}", host, record.id))
}

/// GET /api/files - List all files, newest first.
///
/// Listings expose metadata only; whether a file is protected shows up
/// as a flag, the payload is never included.
#[utoipa::path(
    get,
    path = "/api/files",
    tag = "files",
    responses(
        (status = 200, description = "All files, newest first", body = Vec<FileInfoResponse>)
    )
)]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FileInfoResponse>>, ApiError> {
    let service = FileService::new(state.db.pool());
    let records = service.list().await?;

    let responses = records
        .into_iter()
        .map(|r| FileInfoResponse {
            id: r.id,
            size: r.data.len(),
            password_protected: r.is_protected(),
            file_name: r.file_name,
            file_type: r.file_type,
            create_time: r.create_time,
            remark: r.remark,
        })
        .collect();

    Ok(Json(responses))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_header_simple_ascii() {
        let result = content_disposition_header("document.txt");
        assert_eq!(
            result,
            "attachment; filename=\"document.txt\"; filename*=UTF-8''document.txt"
        );
    }

    #[test]
    fn test_content_disposition_header_with_spaces() {
        let result = content_disposition_header("my document.txt");
        assert!(result.contains("filename=\"my document.txt\""));
        assert!(result.contains("filename*=UTF-8''my%20document.txt"));
    }

    #[test]
    fn test_content_disposition_header_japanese() {
        let result = content_disposition_header("日本語ファイル.txt");
        assert!(result.starts_with("attachment; filename=\""));
        assert!(result.contains("filename*=UTF-8''"));
        assert!(result.contains("%E6%97%A5%E6%9C%AC%E8%AA%9E"));
    }

    #[test]
    fn test_content_disposition_header_double_quote() {
        let result = content_disposition_header("test\"file.txt");
        assert!(result.contains("filename=\"test_file.txt\""));
        assert!(result.contains("%22"));
    }

    #[test]
    fn test_content_disposition_header_backslash() {
        let result = content_disposition_header("test\\file.txt");
        assert!(result.contains("filename=\"test_file.txt\""));
    }

    #[test]
    fn test_content_disposition_header_control_characters() {
        // Carriage return and line feed would otherwise split the header
        let result = content_disposition_header("test\r\nX-Injected: bad.txt");
        assert!(!result.contains('\r'));
        assert!(!result.contains('\n'));
        assert!(result.starts_with("attachment; filename="));
    }

    #[test]
    fn test_content_disposition_header_null_character() {
        let result = content_disposition_header("test\x00null.txt");
        assert!(!result.contains('\x00'));
        assert!(result.starts_with("attachment; filename="));
    }
}
