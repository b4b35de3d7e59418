//! Server-rendered list views for the Matrika person registry.
//!
//! This crate provides an Axum HTTP application that maps each incoming
//! list request onto one of the five queries in
//! [`matrika_db::PersonStore`] and renders the resulting page with
//! `minijinja` templates. It holds no business logic of its own: query
//! parameters in, `(filter operation, page request)` out, rendered HTML
//! back.
//!
//! # Routes
//!
//! | Path | Filter |
//! |------|--------|
//! | `/` | none (all persons, sorted by surname then given name) |
//! | `/dle-data-narozeni` | none, sorted by birth date |
//! | `/rok-narozeni` | birth-year range (`rokOd`, `rokDo`) |
//! | `/prijmeni` | surname prefix (`prijmeni`) |
//! | `/obec` | municipality exact match (`obec`) |
//! | `/minimalni-vek` | minimum age (`vek`) |
//! | `/vyber` | static selection page |

pub mod error;
pub mod handlers;
pub mod pagination;
pub mod router;
pub mod server;
pub mod state;
pub mod templates;
pub mod urls;

// Re-export primary types for convenience.
pub use error::WebError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
pub use templates::Templates;
