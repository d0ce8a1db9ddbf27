//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod authors;
pub mod health;

pub use authors::{
    create_author_handler, delete_author_handler, get_author_handler, list_authors_handler,
    update_author_handler,
};
pub use health::health_handler;
