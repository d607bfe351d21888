use axum::{extract::State, response::Html, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::posting::{JobPostingRow, NewJobPosting};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitRequest {
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub address: String,
    pub experienceneeded: String,
    #[serde(rename = "technologyStack")]
    pub technology_stack: String,
}

/// POST /submit — returns the same HTML confirmation fragment the previous
/// service sent, for page compatibility.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Html<&'static str>, AppError> {
    let fields = [
        ("companyName", &req.company_name),
        ("address", &req.address),
        ("experienceneeded", &req.experienceneeded),
        ("technologyStack", &req.technology_stack),
    ];
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{name} is required")));
        }
    }

    state
        .submissions
        .submit(NewJobPosting {
            company_name: req.company_name,
            address: req.address,
            experience_needed: req.experienceneeded,
            technology_stack: req.technology_stack,
        })
        .await?;

    Ok(Html(
        "<h2>Form submitted successfully!</h2><a href=\"/\">Go Back</a>",
    ))
}

/// GET /api/employees — every posting, insertion order.
pub async fn handle_list_postings(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPostingRow>>, AppError> {
    let postings = state.submissions.list_all().await?;
    Ok(Json(postings))
}
