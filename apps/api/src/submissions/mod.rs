//! Append-only log of employer job postings.

pub mod handlers;

use std::sync::Arc;

use crate::errors::AppError;
use crate::models::posting::{JobPostingRow, NewJobPosting};
use crate::store::postings::PostingStore;

#[derive(Clone)]
pub struct SubmissionLog {
    store: Arc<dyn PostingStore>,
}

impl SubmissionLog {
    pub fn new(store: Arc<dyn PostingStore>) -> Self {
        Self { store }
    }

    /// Pure append. Required-field presence is the handler's concern.
    pub async fn submit(&self, posting: NewJobPosting) -> Result<JobPostingRow, AppError> {
        self.store.append(&posting).await
    }

    pub async fn list_all(&self) -> Result<Vec<JobPostingRow>, AppError> {
        self.store.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryPostingStore;

    fn log() -> SubmissionLog {
        SubmissionLog::new(Arc::new(InMemoryPostingStore::default()))
    }

    fn posting(company: &str) -> NewJobPosting {
        NewJobPosting {
            company_name: company.to_string(),
            address: "1 Main St".to_string(),
            experience_needed: "3 years".to_string(),
            technology_stack: "Rust, Postgres".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_appends_in_order() {
        let log = log();
        log.submit(posting("Acme")).await.unwrap();
        log.submit(posting("Globex")).await.unwrap();

        let all = log.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].company_name, "Acme");
        assert_eq!(all[1].company_name, "Globex");
    }

    #[tokio::test]
    async fn test_submit_returns_the_stored_row() {
        let log = log();
        let row = log.submit(posting("Acme")).await.unwrap();
        assert_eq!(row.company_name, "Acme");
        assert_eq!(row.experienceneeded, "3 years");
    }
}
