//! Shared application state for the list-view server.
//!
//! [`AppState`] holds the `PostgreSQL` pool and the loaded templates.
//! Nothing in it is mutable: every request reads the database through a
//! fresh [`PersonStore`](matrika_db::PersonStore) and renders through
//! the shared template environment, so requests share no mutable state.

use matrika_db::PostgresPool;

use crate::templates::Templates;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Debug)]
pub struct AppState {
    /// Connection pool; one connection is checked out per request.
    pub pool: PostgresPool,
    /// Pre-loaded `minijinja` views.
    pub templates: Templates,
}

impl AppState {
    /// Create the application state.
    pub const fn new(pool: PostgresPool, templates: Templates) -> Self {
        Self { pool, templates }
    }
}
