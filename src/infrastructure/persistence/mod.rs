//! Link repository implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL storage, the durable default
//! - [`MemoryLinkRepository`] - In-process storage for development and tests

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
