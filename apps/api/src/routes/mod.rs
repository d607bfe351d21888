pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::state::AppState;
use crate::submissions::handlers as submissions;
use crate::vault::handlers as vault;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/register", post(auth::handle_register))
        .route("/login", post(auth::handle_login))
        // Resume vault
        .route("/upload", post(vault::handle_upload))
        .route(
            "/resumes",
            post(vault::handle_list_by_secret).get(vault::handle_list_all),
        )
        .route("/download/:id", get(vault::handle_download))
        // Employer submissions
        .route("/submit", post(submissions::handle_submit))
        .route("/api/employees", get(submissions::handle_list_postings))
        .with_state(state)
}
