use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::credential::CredentialRow;

/// Persistence seam for login credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Inserts a new credential. A unique-constraint violation on the email
    /// column surfaces as `AppError::DuplicateEmail`, distinct from any other
    /// storage failure. Concurrent registrations with the same email race at
    /// the constraint; the loser gets `DuplicateEmail`, never a silent
    /// overwrite.
    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        user_type: &str,
    ) -> Result<CredentialRow, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRow>, AppError>;
}

pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        user_type: &str,
    ) -> Result<CredentialRow, AppError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "INSERT INTO usersLogin (email, password, user_type)
             VALUES ($1, $2, $3)
             RETURNING email, password, user_type",
        )
        .bind(email)
        .bind(password_hash)
        .bind(user_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateEmail,
            _ => {
                tracing::error!("usersLogin insert failed: {e}");
                AppError::Database(e)
            }
        })?;

        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRow>, AppError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT email, password, user_type FROM usersLogin WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("usersLogin lookup failed: {e}");
            AppError::Database(e)
        })?;

        Ok(row)
    }
}
