use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{GatedResumeMeta, ResumeRow};

/// Persistence seam for resume blobs. Rows are immutable once inserted.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn insert(
        &self,
        filename: &str,
        content: &[u8],
        access_hash: &str,
    ) -> Result<Uuid, AppError>;

    /// Metadata plus access hash for every stored resume, oldest first.
    /// The vault runs its capability check over this set.
    async fn list(&self) -> Result<Vec<GatedResumeMeta>, AppError>;

    async fn fetch(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError>;
}

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn insert(
        &self,
        filename: &str,
        content: &[u8],
        access_hash: &str,
    ) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO resumes (filename, filedata, password)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(filename)
        .bind(content)
        .bind(access_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("resumes insert failed: {e}");
            AppError::Database(e)
        })?;

        Ok(id)
    }

    async fn list(&self) -> Result<Vec<GatedResumeMeta>, AppError> {
        let rows = sqlx::query_as::<_, GatedResumeMeta>(
            "SELECT id, filename, password, uploaded_at FROM resumes ORDER BY uploaded_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("resumes list failed: {e}");
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            "SELECT id, filename, filedata, password, uploaded_at FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("resumes fetch failed: {e}");
            AppError::Database(e)
        })?;

        Ok(row)
    }
}
