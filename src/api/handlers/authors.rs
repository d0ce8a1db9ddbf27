//! Handlers for author endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::author::{CreateAuthorRequest, MessageResponse, UpdateAuthorRequest};
use crate::api::dto::pagination::PaginationParams;
use crate::application::services::{AuthorDetail, AuthorPage};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::id::parse_author_id;

/// Creates an author.
///
/// # Endpoint
///
/// `POST /author/v1/create`
///
/// # Request Body
///
/// ```json
/// { "name": "Jane Doe", "bio": "Writer", "birth_date": "1970-01-01" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, fails validation or
/// carries a date that is not `YYYY-MM-DD`.
pub async fn create_author_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateAuthorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthorDetail>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let author = state
        .author_service
        .create_author(payload.name, payload.bio, &payload.birth_date)
        .await?;

    Ok((StatusCode::CREATED, Json(author)))
}

/// Returns one author.
///
/// # Endpoint
///
/// `GET /author/v1/{id}`
///
/// # Response
///
/// ```json
/// {
///   "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
///   "name": "Jane Doe",
///   "bio": "Writer",
///   "birth_date": "1970-01-01",
///   "death_date": ""
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a UUID.
/// Returns 404 Not Found if no author has that id.
pub async fn get_author_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AuthorDetail>, AppError> {
    let id = parse_author_id(&id)?;
    let author = state.author_service.get_detail_author(id).await?;
    Ok(Json(author))
}

/// Lists authors, most recently updated first.
///
/// # Endpoint
///
/// `GET /author/v1/?page=1&limit=10`
///
/// Pages may be served from the list cache and lag recent writes.
pub async fn list_authors_handler(
    Query(params): Query<PaginationParams>,
    State(state): State<AppState>,
) -> Result<Json<AuthorPage>, AppError> {
    let (page, limit) = params.resolve();
    let authors = state.author_service.get_list_author(limit, page).await?;
    Ok(Json(authors))
}

/// Replaces an author's fields.
///
/// # Endpoint
///
/// `PUT /author/v1/update`
///
/// # Request Body
///
/// ```json
/// {
///   "id": "0f8fad5b-d9cb-469f-a165-70867728950e",
///   "name": "Jane Doe",
///   "bio": "Writer",
///   "birth_date": "1970-01-01",
///   "death_date": "2020-05-17"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on a malformed body, id or date.
/// Returns 404 Not Found if the author does not exist.
pub async fn update_author_handler(
    State(state): State<AppState>,
    payload: Result<Json<UpdateAuthorRequest>, JsonRejection>,
) -> Result<Json<AuthorDetail>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let id = parse_author_id(&payload.id)?;
    let author = state
        .author_service
        .update_author(
            id,
            payload.name,
            payload.bio,
            &payload.birth_date,
            payload.death_date.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(author))
}

/// Deletes an author.
///
/// # Endpoint
///
/// `DELETE /author/v1/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a UUID.
/// Returns 404 Not Found if the author does not exist.
pub async fn delete_author_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_author_id(&id)?;
    state.author_service.delete_author(id).await?;
    Ok(Json(MessageResponse::success()))
}
