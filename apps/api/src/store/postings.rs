use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::posting::{JobPostingRow, NewJobPosting};

/// Persistence seam for the append-only job-posting log.
#[async_trait]
pub trait PostingStore: Send + Sync {
    async fn append(&self, posting: &NewJobPosting) -> Result<JobPostingRow, AppError>;

    /// Every posting in insertion order.
    async fn list_all(&self) -> Result<Vec<JobPostingRow>, AppError>;
}

pub struct PgPostingStore {
    pool: PgPool,
}

impl PgPostingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostingStore for PgPostingStore {
    async fn append(&self, posting: &NewJobPosting) -> Result<JobPostingRow, AppError> {
        let row = sqlx::query_as::<_, JobPostingRow>(
            "INSERT INTO employees (company_name, address, experienceneeded, technology_stack)
             VALUES ($1, $2, $3, $4)
             RETURNING id, company_name, address, experienceneeded, technology_stack, submitted_at",
        )
        .bind(&posting.company_name)
        .bind(&posting.address)
        .bind(&posting.experience_needed)
        .bind(&posting.technology_stack)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("employees insert failed: {e}");
            AppError::Database(e)
        })?;

        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<JobPostingRow>, AppError> {
        let rows = sqlx::query_as::<_, JobPostingRow>(
            "SELECT id, company_name, address, experienceneeded, technology_stack, submitted_at
             FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("employees list failed: {e}");
            AppError::Database(e)
        })?;

        Ok(rows)
    }
}
