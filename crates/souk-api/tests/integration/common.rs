use std::sync::Arc;

use axum::Router;

use souk_api::routes;
use souk_api::state::AppState;
use souk_core::MockCatalog;

/// Build the app router over a seeded mock catalog.
pub fn setup_test_app() -> Router {
    let state = Arc::new(AppState {
        catalog: MockCatalog::seeded(),
    });
    routes::router(state)
}
