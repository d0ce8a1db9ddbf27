//! gRPC surface of the author service.

pub mod author_adapter;

pub use author_adapter::AuthorAdapter;
