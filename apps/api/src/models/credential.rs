#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account role, decided at registration. Determines the post-login
/// destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    JobSeeker,
    Employer,
}

impl Role {
    /// Maps a stored `user_type` string onto a role. Anything that is not
    /// "employer" counts as a job seeker, so rows with an unrecognized type
    /// still land on the non-employer destination.
    pub fn parse(raw: &str) -> Role {
        if raw.eq_ignore_ascii_case("employer") {
            Role::Employer
        } else {
            Role::JobSeeker
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::JobSeeker => "job_seeker",
            Role::Employer => "employer",
        }
    }
}

/// A stored login credential. The `password` column holds the bcrypt hash,
/// never the plaintext, and is excluded from every serialized response.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CredentialRow {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub user_type: String,
}

impl CredentialRow {
    pub fn role(&self) -> Role {
        Role::parse(&self.user_type)
    }
}
