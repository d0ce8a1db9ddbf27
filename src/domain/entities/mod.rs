//! Core domain entities.
//!
//! - [`Author`] - A stored author record
//! - [`NewAuthor`] - Input for inserting an author
//! - [`AuthorUpdate`] - Full-record replacement of an author's mutable fields

pub mod author;

pub use author::{Author, AuthorUpdate, NewAuthor};
