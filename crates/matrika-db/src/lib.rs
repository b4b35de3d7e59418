//! `PostgreSQL` query layer for the Matrika person registry.
//!
//! The registry is read-only at runtime: two tables (`person`, `address`)
//! are created and seeded by the bundled migrations, and every listing is
//! served by one of the five hand-written queries in [`PersonStore`].
//! There is no query derivation and no lazy loading -- each query joins
//! the address row eagerly and applies `ORDER BY`, `LIMIT`, and `OFFSET`
//! inside a single per-request transaction.
//!
//! # Modules
//!
//! - [`postgres`] -- connection pool wrapper and configuration
//! - [`person_store`] -- the five paginated filter queries
//! - [`query`] -- `ORDER BY` construction and `LIKE` pattern escaping
//! - [`error`] -- shared error types

pub mod error;
pub mod person_store;
pub mod postgres;
pub mod query;

// Re-export primary types for convenience.
pub use error::DbError;
pub use person_store::{PersonRow, PersonStore};
pub use postgres::{PostgresConfig, PostgresPool};
