use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};

use crate::{
    dto::{CreateCommentRequest, CreatePostRequest, ShareLinkResponse},
    errors::ApiError,
    respond,
    states::AppState,
};

/// POST /posts
/// Body: { "content": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;
    let post = state.store.create(payload)?;

    respond::json(&post)
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let post = state.store.get(&id)?;

    respond::json(&post)
}

/// POST /posts/{id}/comments
/// Body: { "content": "..." }
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    // An unknown post is reported as such even when the body is garbage.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(_) if !state.store.contains(&id) => return Err(ApiError::NotFound(id)),
        Err(rejection) => return Err(rejection.into()),
    };
    let comment = state.store.add_comment(&id, payload)?;

    respond::json(&comment)
}

/// POST /posts/{id}/like
pub async fn like_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let post = state.store.like(&id)?;

    respond::json(&post)
}

/// POST /posts/{id}/dislike
pub async fn dislike_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let post = state.store.dislike(&id)?;

    respond::json(&post)
}

/// GET /posts/{id}/share
pub async fn share_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let shareable_link = state.store.share_link(&id, &state.config.share_base_url)?;

    respond::json(&ShareLinkResponse { shareable_link })
}
