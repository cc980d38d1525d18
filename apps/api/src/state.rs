use std::sync::Arc;

use crate::workable::VendorGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single seam to Workable. Production: `WorkableClient`;
    /// tests swap in a recording fake.
    pub gateway: Arc<dyn VendorGateway>,
}
