//! Error types for the data layer.
//!
//! All errors are propagated via [`DbError`] which wraps the underlying
//! [`sqlx`] errors with additional context about which operation failed.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A person row came back without its address.
    ///
    /// The address reference is mandatory, so this signals a
    /// data-integrity fault; the request fails rather than rendering
    /// partial data.
    #[error("person {person_id} has no address row")]
    AddressMissing {
        /// The person whose address could not be resolved.
        person_id: i64,
    },

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
