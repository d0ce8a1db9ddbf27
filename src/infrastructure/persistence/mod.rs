//! Author store implementations.
//!
//! - [`PgAuthorRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryAuthorRepository`] - In-process storage for tests and local runs

pub mod memory_author_repository;
pub mod pg_author_repository;

pub use memory_author_repository::MemoryAuthorRepository;
pub use pg_author_repository::PgAuthorRepository;
