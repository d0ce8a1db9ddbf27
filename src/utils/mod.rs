//! Helpers shared by the HTTP and gRPC surfaces.
//!
//! - [`date`] - `YYYY-MM-DD` parsing and nullable-date formatting
//! - [`id`] - Author id parsing

pub mod date;
pub mod id;
