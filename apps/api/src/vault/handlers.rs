use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeMeta;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SecretRequest {
    pub password: String,
}

/// POST /upload — multipart with a `file` part and a `password` text part.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut secret: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let data = field.bytes().await.map_err(bad_multipart)?;
                file = Some((filename, data));
            }
            Some("password") => {
                secret = Some(field.text().await.map_err(bad_multipart)?);
            }
            _ => {}
        }
    }

    let (filename, data) = file.ok_or_else(|| AppError::Validation("No file uploaded.".to_string()))?;
    let secret = secret.ok_or_else(|| AppError::Validation("password is required".to_string()))?;

    let id = state.vault.upload(&filename, &data, &secret).await?;
    Ok(Json(json!({
        "message": "File uploaded successfully!",
        "id": id
    })))
}

/// POST /resumes — list resumes matching the presented shared secret.
pub async fn handle_list_by_secret(
    State(state): State<AppState>,
    Json(req): Json<SecretRequest>,
) -> Result<Json<Vec<ResumeMeta>>, AppError> {
    let resumes = state.vault.list_by_secret(&req.password).await?;
    Ok(Json(resumes))
}

/// GET /resumes — unrestricted enumeration.
pub async fn handle_list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeMeta>>, AppError> {
    let resumes = state.vault.list_all().await?;
    Ok(Json(resumes))
}

/// GET /download/:id — streams the stored bytes back under the original
/// filename.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let (filename, data) = state.vault.download(id).await?;
    let headers = [
        (
            header::CONTENT_TYPE,
            "application/octet-stream".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, data))
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart request: {e}"))
}
