pub mod health;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::form;
use crate::state::AppState;
use crate::submission::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form loader: public field schema, handed through for rendering
        .route("/api/v1/form", get(form::handle_get_form))
        // Submission proxy: the reason this service exists — Workable does
        // not allow cross-origin browser requests
        .route("/api/v1/candidates", post(handlers::handle_submit_candidate))
        .layer(cors_layer())
        .with_state(state)
}

/// Cross-origin POST from any origin, mirroring the policy of the hosted form.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
