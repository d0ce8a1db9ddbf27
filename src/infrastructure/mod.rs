//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence, caching and identity.
//!
//! # Modules
//!
//! - [`cache`] - List cache implementations (Redis, in-process LRU, no-op)
//! - [`identity`] - Identity service client for token validation
//! - [`persistence`] - Author store implementations

pub mod cache;
pub mod identity;
pub mod persistence;
