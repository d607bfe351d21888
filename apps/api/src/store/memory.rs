//! In-memory store fakes for deterministic service tests. No database
//! required; duplicate detection and ordering mirror the Postgres behavior.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::credential::CredentialRow;
use crate::models::posting::{JobPostingRow, NewJobPosting};
use crate::models::resume::{GatedResumeMeta, ResumeRow};
use crate::store::credentials::CredentialStore;
use crate::store::postings::PostingStore;
use crate::store::resumes::ResumeStore;

#[derive(Default)]
pub struct InMemoryCredentialStore {
    rows: Mutex<HashMap<String, CredentialRow>>,
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        user_type: &str,
    ) -> Result<CredentialRow, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(email) {
            return Err(AppError::DuplicateEmail);
        }
        let row = CredentialRow {
            email: email.to_string(),
            password: password_hash.to_string(),
            user_type: user_type.to_string(),
        };
        rows.insert(email.to_string(), row.clone());
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<CredentialRow>, AppError> {
        Ok(self.rows.lock().unwrap().get(email).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryResumeStore {
    rows: Mutex<Vec<ResumeRow>>,
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn insert(
        &self,
        filename: &str,
        content: &[u8],
        access_hash: &str,
    ) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        self.rows.lock().unwrap().push(ResumeRow {
            id,
            filename: filename.to_string(),
            filedata: content.to_vec(),
            password: access_hash.to_string(),
            uploaded_at: Utc::now(),
        });
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<GatedResumeMeta>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|r| GatedResumeMeta {
                id: r.id,
                filename: r.filename.clone(),
                password: r.password.clone(),
                uploaded_at: r.uploaded_at,
            })
            .collect())
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryPostingStore {
    rows: Mutex<Vec<JobPostingRow>>,
}

#[async_trait]
impl PostingStore for InMemoryPostingStore {
    async fn append(&self, posting: &NewJobPosting) -> Result<JobPostingRow, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let row = JobPostingRow {
            id: rows.len() as i32 + 1,
            company_name: posting.company_name.clone(),
            address: posting.address.clone(),
            experienceneeded: posting.experience_needed.clone(),
            technology_stack: posting.technology_stack.clone(),
            submitted_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<JobPostingRow>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }
}
