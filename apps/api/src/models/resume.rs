#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Resume metadata as exposed by the listing endpoints. Never carries the
/// file blob or the access hash.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ResumeMeta {
    pub id: Uuid,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Metadata plus the stored access hash, fetched for the vault's capability
/// check. Internal only; handlers serialize `ResumeMeta`.
#[derive(Debug, Clone, FromRow)]
pub struct GatedResumeMeta {
    pub id: Uuid,
    pub filename: String,
    pub password: String,
    pub uploaded_at: DateTime<Utc>,
}

impl GatedResumeMeta {
    pub fn meta(&self) -> ResumeMeta {
        ResumeMeta {
            id: self.id,
            filename: self.filename.clone(),
            uploaded_at: self.uploaded_at,
        }
    }
}

/// A full stored resume row including the binary content.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub filename: String,
    pub filedata: Vec<u8>,
    pub password: String,
    pub uploaded_at: DateTime<Utc>,
}
