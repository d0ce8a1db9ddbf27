//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and give the HTTP and gRPC handlers a
//! transport-neutral API.
//!
//! # Available Services
//!
//! - [`services::author_service::AuthorService`] - Author CRUD and cached listing
//! - [`services::auth_service::AuthService`] - Bearer token authentication
pub mod services;
