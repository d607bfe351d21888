//! Registration and login orchestration over the credential store.

use std::sync::Arc;

use serde::Serialize;

use crate::auth::password;
use crate::errors::AppError;
use crate::models::credential::{CredentialRow, Role};
use crate::store::credentials::CredentialStore;

/// Post-login destinations, keyed by role. Two fixed pages; any role that is
/// not an employer falls through to the job-seeker page.
pub const EMPLOYER_DESTINATION: &str = "Employer.html";
pub const JOB_SEEKER_DESTINATION: &str = "Job%20Seeker.html";

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
}

#[derive(Debug, Serialize)]
pub struct LoginOutcome {
    pub role: Role,
    pub redirect: &'static str,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Validates the input, hashes the password, and persists one credential.
    /// `DuplicateEmail` passes through to the handler as a 409.
    pub async fn register(
        &self,
        email: &str,
        plaintext: &str,
        user_type: &str,
    ) -> Result<CredentialRow, AppError> {
        if email.trim().is_empty() {
            return Err(AppError::Validation("email is required".to_string()));
        }
        if plaintext.is_empty() {
            return Err(AppError::Validation("password is required".to_string()));
        }
        let hashed = password::hash(plaintext)?;
        self.store.create(email, &hashed, user_type).await
    }

    /// An unknown email and a wrong password produce the identical
    /// `Unauthorized` outcome, so a response never reveals whether an email
    /// is registered.
    pub async fn login(&self, email: &str, plaintext: &str) -> Result<LoginOutcome, AppError> {
        let Some(cred) = self.store.find_by_email(email).await? else {
            return Err(AppError::Unauthorized);
        };
        if !password::verify(plaintext, &cred.password) {
            return Err(AppError::Unauthorized);
        }
        let role = cred.role();
        Ok(LoginOutcome {
            role,
            redirect: destination_for(role),
        })
    }
}

pub fn destination_for(role: Role) -> &'static str {
    match role {
        Role::Employer => EMPLOYER_DESTINATION,
        Role::JobSeeker => JOB_SEEKER_DESTINATION,
    }
}
