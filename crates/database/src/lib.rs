//! # Guestbook Database Crate
//!
//! This crate is the persistence gateway for comments. It owns the mapping
//! between the `Comment` record and its row, and hides which SQL dialect is
//! in use from the rest of the application.
//!
//! ## Public API
//!
//! - `connect`: builds a connection pool for the configured `Dialect`.
//! - `ensure_schema`: creates the `comments` table if it does not exist yet.
//!   Safe to run on every startup.
//! - `DbRepository`: the handle shared across requests, providing
//!   `find_by_id`, `list_recent` and `insert`.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;
pub mod statements;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, ensure_schema, DbPool};
pub use error::DbError;
pub use repository::{DbRepository, RECENT_COMMENTS_LIMIT};
