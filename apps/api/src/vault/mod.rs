//! Resume vault.
//!
//! Access is gated by a shared secret chosen at upload time, hashed with the
//! same primitive as account passwords but unrelated to any account: the
//! secret is a capability token over the set of resumes uploaded with it,
//! not an identity. Login and vault access never mix.

pub mod handlers;

use std::sync::Arc;

use uuid::Uuid;

use crate::auth::password;
use crate::errors::AppError;
use crate::models::resume::ResumeMeta;
use crate::store::resumes::ResumeStore;

#[derive(Clone)]
pub struct ResumeVault {
    store: Arc<dyn ResumeStore>,
}

impl ResumeVault {
    pub fn new(store: Arc<dyn ResumeStore>) -> Self {
        Self { store }
    }

    /// Stores one resume. The filename is kept verbatim; the shared secret
    /// is hashed before it touches the store.
    pub async fn upload(
        &self,
        filename: &str,
        content: &[u8],
        secret: &str,
    ) -> Result<Uuid, AppError> {
        if content.is_empty() {
            return Err(AppError::Validation("uploaded file is empty".to_string()));
        }
        let access_hash = password::hash(secret)?;
        self.store.insert(filename, content, &access_hash).await
    }

    /// Metadata for every resume whose access hash matches `secret`.
    ///
    /// Zero matches is `Forbidden`, preserving the surface of the service
    /// this replaces: a wrong secret and an empty vault are indistinguishable
    /// to the caller.
    pub async fn list_by_secret(&self, secret: &str) -> Result<Vec<ResumeMeta>, AppError> {
        let matches: Vec<ResumeMeta> = self
            .store
            .list()
            .await?
            .into_iter()
            .filter(|row| password::verify(secret, &row.password))
            .map(|row| row.meta())
            .collect();

        if matches.is_empty() {
            return Err(AppError::Forbidden);
        }
        Ok(matches)
    }

    /// Unrestricted enumeration, bypassing the secret gate. Carried over
    /// from the service this replaces as its admin/debug surface.
    pub async fn list_all(&self) -> Result<Vec<ResumeMeta>, AppError> {
        Ok(self
            .store
            .list()
            .await?
            .into_iter()
            .map(|row| row.meta())
            .collect())
    }

    pub async fn download(&self, id: Uuid) -> Result<(String, Vec<u8>), AppError> {
        let row = self
            .store
            .fetch(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
        Ok((row.filename, row.filedata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryResumeStore;

    fn vault() -> ResumeVault {
        ResumeVault::new(Arc::new(InMemoryResumeStore::default()))
    }

    #[tokio::test]
    async fn test_upload_then_download_round_trips() {
        let v = vault();
        let content = b"%PDF-1.4 fake resume bytes".to_vec();
        let id = v.upload("r.pdf", &content, "s1").await.unwrap();

        let (filename, data) = v.download(id).await.unwrap();
        assert_eq!(filename, "r.pdf");
        assert_eq!(data, content);
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_content() {
        let v = vault();
        let err = v.upload("r.pdf", b"", "s1").await;
        assert!(matches!(err, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_download_unknown_id_is_not_found() {
        let v = vault();
        let err = v.download(Uuid::new_v4()).await;
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_by_secret_partitions_exactly() {
        let v = vault();
        let a = v.upload("a.pdf", b"aaa", "s1").await.unwrap();
        let b = v.upload("b.pdf", b"bbb", "s1").await.unwrap();
        let c = v.upload("c.pdf", b"ccc", "s2").await.unwrap();

        let s1: Vec<Uuid> = v
            .list_by_secret("s1")
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert!(s1.contains(&a));
        assert!(s1.contains(&b));
        assert!(!s1.contains(&c));

        let s2: Vec<Uuid> = v
            .list_by_secret("s2")
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(s2, vec![c]);
    }

    #[tokio::test]
    async fn test_wrong_secret_is_forbidden() {
        let v = vault();
        v.upload("a.pdf", b"aaa", "s1").await.unwrap();
        let err = v.list_by_secret("wrong").await;
        assert!(matches!(err, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_empty_vault_is_forbidden_too() {
        // Wrong secret and no resumes yet are deliberately indistinguishable.
        let v = vault();
        let err = v.list_by_secret("s1").await;
        assert!(matches!(err, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_list_all_bypasses_the_gate() {
        let v = vault();
        v.upload("a.pdf", b"aaa", "s1").await.unwrap();
        v.upload("b.pdf", b"bbb", "s2").await.unwrap();
        assert_eq!(v.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_metadata_never_carries_content() {
        let v = vault();
        v.upload("a.pdf", b"aaa", "s1").await.unwrap();
        let listed = v.list_by_secret("s1").await.unwrap();
        let json = serde_json::to_string(&listed).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("filedata"));
    }
}
