use std::sync::Arc;

use crate::auth::JwtKeys;
use crate::llm_client::FeedbackClient;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Users, résumés and job descriptions. Postgres or in-memory.
    pub store: Arc<dyn DocumentStore>,
    /// Feedback generator for `/api/analyze`. Built once at startup.
    pub feedback: Arc<dyn FeedbackClient>,
    pub jwt: JwtKeys,
}
