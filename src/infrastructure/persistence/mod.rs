//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - PostgreSQL-backed bulk soft-deletion
//! - [`MemoryUrlRepository`] - In-process map, used for tests and embedding
//!
//! [`database`] holds pool construction and migrations for the PostgreSQL backend.

pub mod database;
pub mod memory_url_repository;
pub mod pg_url_repository;
mod updates;

pub use database::connect;
pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
