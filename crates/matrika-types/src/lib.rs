//! Domain types for the Matrika person registry.
//!
//! This crate defines the entities stored in `PostgreSQL` ([`Person`],
//! [`Address`]) and the pagination vocabulary shared between the query
//! layer and the web layer ([`Page`], [`PageRequest`], [`SortKey`]).
//! It carries no I/O; the database and web crates depend on it from
//! both directions so neither needs to know about the other.
//!
//! # Modules
//!
//! - [`person`] -- person and address records, birth-date arithmetic
//! - [`page`] -- page requests, sort keys, and page results

pub mod page;
pub mod person;

// Re-export primary types for convenience.
pub use page::{Page, PageRequest, SortDirection, SortField, SortKey};
pub use person::{latest_birth_date_for_age, Address, Person};
