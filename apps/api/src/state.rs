use crate::auth::service::AuthService;
use crate::config::Config;
use crate::submissions::SubmissionLog;
use crate::vault::ResumeVault;

/// Shared application state injected into all route handlers via Axum
/// extractors. Each service owns its store behind an `Arc<dyn _>` seam, so
/// tests construct the same services over in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub vault: ResumeVault,
    pub submissions: SubmissionLog,
    #[allow(dead_code)]
    pub config: Config,
}
