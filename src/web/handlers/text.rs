//! Text handlers for the Web API.

use axum::{
    extract::{Path, Query, State},
    Form, Json,
};
use std::sync::Arc;
use utoipa;

use crate::text::{StoreText, TextService};
use crate::web::dto::{PasswordQuery, TextResponse, TextUploadRequest, TextUploadResponse, VerifyRequest};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Sentinel shown in place of the content of protected entries in the
/// listing. The listing never reveals protected content, with or without
/// a password.
const LIST_CONTENT_MASK: &str = "******";

/// POST /api/texts/upload - Store a text snippet.
#[utoipa::path(
    post,
    path = "/api/texts/upload",
    tag = "texts",
    responses(
        (status = 200, description = "Text stored", body = TextUploadResponse),
        (status = 400, description = "Missing content or store failure")
    )
)]
pub async fn upload_text(
    State(state): State<Arc<AppState>>,
    Form(req): Form<TextUploadRequest>,
) -> Result<Json<TextUploadResponse>, ApiError> {
    let content = req
        .content
        .ok_or_else(|| ApiError::bad_request("content is required"))?;

    let mut store = StoreText::new(content);
    if let Some(r) = req.remark {
        store = store.with_remark(r);
    }
    if let Some(p) = req.password {
        store = store.with_password(p);
    }

    let service = TextService::new(state.db.pool());
    let record = service.store(store).await?;

    Ok(Json(TextUploadResponse {
        id: record.id,
        content: record.content,
        remark: record.remark,
        create_time: record.create_time,
    }))
}

/// POST /api/texts/:id/verify - Verify a text password.
#[utoipa::path(
    post,
    path = "/api/texts/{id}/verify",
    tag = "texts",
    params(
        ("id" = i64, Path, description = "Text ID")
    ),
    responses(
        (status = 200, description = "Password accepted", body = String),
        (status = 400, description = "Unknown text or wrong password")
    )
)]
pub async fn verify_text_password(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(req): Form<VerifyRequest>,
) -> Result<String, ApiError> {
    let password = req
        .password
        .ok_or_else(|| ApiError::bad_request("password is required"))?;

    let service = TextService::new(state.db.pool());
    service.fetch_with_password(id, &password).await?;

    Ok("Password verified successfully".to_string())
}

/// GET /api/texts/:id - Fetch a text snippet.
///
/// Without a password a protected snippet comes back with masked
/// content; with the correct password the real content is returned.
#[utoipa::path(
    get,
    path = "/api/texts/{id}",
    tag = "texts",
    params(
        ("id" = i64, Path, description = "Text ID"),
        ("password" = Option<String>, Query, description = "Access password for protected texts")
    ),
    responses(
        (status = 200, description = "The text snippet", body = TextResponse),
        (status = 400, description = "Unknown text or wrong password")
    )
)]
pub async fn get_text(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<PasswordQuery>,
) -> Result<Json<TextResponse>, ApiError> {
    let service = TextService::new(state.db.pool());

    let record = match query.password.as_deref() {
        Some(password) => service.fetch_with_password(id, password).await?,
        None => service.fetch(id).await?,
    };

    Ok(Json(TextResponse {
        id: record.id,
        password_protected: record.is_protected(),
        content: record.content,
        remark: record.remark,
        create_time: record.create_time,
    }))
}

/// GET /api/texts - List all text snippets, newest first.
#[utoipa::path(
    get,
    path = "/api/texts",
    tag = "texts",
    responses(
        (status = 200, description = "All texts, newest first", body = Vec<TextResponse>)
    )
)]
pub async fn list_texts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TextResponse>>, ApiError> {
    let service = TextService::new(state.db.pool());
    let records = service.list().await?;

    let responses = records
        .into_iter()
        .map(|r| {
            let protected = r.is_protected();
            TextResponse {
                id: r.id,
                content: if protected {
                    LIST_CONTENT_MASK.to_string()
                } else {
                    r.content
                },
                remark: r.remark,
                create_time: r.create_time,
                password_protected: protected,
            }
        })
        .collect();

    Ok(Json(responses))
}

/// DELETE /api/texts/:id - Delete a text snippet.
#[utoipa::path(
    delete,
    path = "/api/texts/{id}",
    tag = "texts",
    params(
        ("id" = i64, Path, description = "Text ID")
    ),
    responses(
        (status = 200, description = "Text deleted", body = String),
        (status = 400, description = "Unknown text")
    )
)]
pub async fn delete_text(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<String, ApiError> {
    let service = TextService::new(state.db.pool());
    service.delete(id).await?;

    Ok("Text deleted successfully".to_string())
}
