//! Axum route handler for the submission proxy.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::submission::remap::remap_answers;
use crate::workable::Candidate;

#[derive(Debug, Deserialize)]
pub struct SubmitCandidateRequest {
    /// Absent or null candidate is rejected before any vendor call.
    pub candidate: Option<Candidate>,
}

/// POST /api/v1/candidates
///
/// Proxies a form submission to Workable: fetch the authoritative questions,
/// remap answer labels to vendor ids, forward, and relay the vendor's status
/// and body verbatim. Exists because Workable does not allow CORS from
/// browsers. Sequential, no retries; a rate-limited questions fetch aborts
/// with 429.
pub async fn handle_submit_candidate(
    State(state): State<AppState>,
    Json(request): Json<SubmitCandidateRequest>,
) -> Result<Response, AppError> {
    let Some(mut candidate) = request.candidate else {
        return Err(AppError::Validation("No candidate data".to_string()));
    };

    let questions = state.gateway.fetch_questions().await?;
    if let Some(vendor_error) = &questions.error {
        warn!(%vendor_error, "Workable questions endpoint reported an error");
        return Err(AppError::RateLimited);
    }

    candidate.answers = remap_answers(&candidate.answers, &questions.questions)?;

    // Candidate payloads are PII; log counts only.
    info!(
        answers = candidate.answers.len(),
        "Forwarding candidate to Workable"
    );

    let (status, body) = state.gateway.create_candidate(&candidate).await?;

    Ok((status, Json(body)).into_response())
}
