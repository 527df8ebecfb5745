use souk_core::MockCatalog;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub catalog: MockCatalog,
}
