use std::sync::Arc;

use ckd_export::styles::DocumentStyles;

/// Shared application state, injected into route handlers via Axum state.
///
/// Evaluations share nothing; the state only carries export settings.
#[derive(Clone, Default)]
pub struct AppState {
    pub styles: Arc<DocumentStyles>,
}

impl AppState {
    pub fn new(styles: DocumentStyles) -> Self {
        Self {
            styles: Arc::new(styles),
        }
    }
}
