//! Form loader — proxies the vendor's public field schema to the renderer.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::state::AppState;
use crate::workable::FormField;

/// GET /api/v1/form
///
/// Fetches the public form schema for the configured job and hands it through
/// unchanged, in vendor order, as render input. No recovery on failure: the
/// page render fails with the error.
pub async fn handle_get_form(
    State(state): State<AppState>,
) -> Result<Json<Vec<FormField>>, AppError> {
    let form = state.gateway.fetch_form().await?;
    Ok(Json(form))
}
