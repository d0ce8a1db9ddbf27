//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod author_repository;

pub use author_repository::AuthorRepository;

#[cfg(test)]
pub use author_repository::MockAuthorRepository;
