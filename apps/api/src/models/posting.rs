#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A persisted job posting. Append-only; no update or delete path exists.
/// Column names (`experienceneeded` included) match the table this service
/// inherited.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobPostingRow {
    pub id: i32,
    pub company_name: String,
    pub address: String,
    pub experienceneeded: String,
    pub technology_stack: String,
    pub submitted_at: DateTime<Utc>,
}

/// Fields for a posting about to be appended.
#[derive(Debug, Clone)]
pub struct NewJobPosting {
    pub company_name: String,
    pub address: String,
    pub experience_needed: String,
    pub technology_stack: String,
}
