//! Axum router construction for the list-view application.
//!
//! Assembles the seven routes into a single [`Router`] with request
//! tracing enabled.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the registry.
///
/// The router includes:
/// - `GET /` -- all persons
/// - `GET /dle-data-narozeni` -- all persons by birth date
/// - `GET /rok-narozeni` -- birth-year range filter
/// - `GET /prijmeni` -- surname prefix filter
/// - `GET /obec` -- municipality filter
/// - `GET /minimalni-vek` -- minimum-age filter
/// - `GET /vyber` -- static selection page
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_all))
        .route("/dle-data-narozeni", get(handlers::list_by_birth_date))
        .route("/rok-narozeni", get(handlers::filter_by_birth_year))
        .route("/prijmeni", get(handlers::filter_by_surname))
        .route("/obec", get(handlers::filter_by_municipality))
        .route("/minimalni-vek", get(handlers::filter_by_min_age))
        .route("/vyber", get(handlers::selection))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
