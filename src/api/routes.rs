//! API route configuration.
//!
//! All author endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_author_handler, delete_author_handler, get_author_handler, list_authors_handler,
    update_author_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Author routes, mounted under `/author/v1`.
///
/// # Endpoints
///
/// - `POST   /create` - Create an author
/// - `PUT    /update` - Replace an author's fields
/// - `GET    /`       - List authors (paginated, cached)
/// - `GET    /{id}`   - Author detail
/// - `DELETE /{id}`   - Delete an author
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_authors_handler))
        .route("/create", post(create_author_handler))
        .route("/update", put(update_author_handler))
        .route(
            "/{id}",
            get(get_author_handler).delete(delete_author_handler),
        )
}
