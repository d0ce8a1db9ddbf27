//! Business logic services for the application layer.

pub mod auth_service;
pub mod author_service;

pub use auth_service::AuthService;
pub use author_service::{AuthorDetail, AuthorPage, AuthorService, PageInfo};
