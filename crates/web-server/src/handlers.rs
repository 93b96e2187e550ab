use crate::{error::AppError, extract::CommentPayload, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use core_types::Comment;
use database::RECENT_COMMENTS_LIMIT;
use std::sync::Arc;

/// # GET /api/comments/:id
pub async fn get_comment(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Comment>, AppError> {
    let id: i64 = id.parse().map_err(|_| AppError::InvalidId(id))?;
    let comment = state
        .db_repo
        .find_by_id(id)
        .await
        .map_err(AppError::database("SelectOne"))?
        .ok_or(AppError::NotFound)?;
    Ok(Json(comment))
}

/// # GET /api/comments
/// The most recent comments, newest first.
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = state
        .db_repo
        .list_recent(RECENT_COMMENTS_LIMIT)
        .await
        .map_err(AppError::database("Select"))?;
    Ok(Json(comments))
}

/// # POST /api/comments
/// Accepts JSON or form bodies. Responds `201 Created` with an empty body.
pub async fn insert_comment(
    State(state): State<Arc<AppState>>,
    CommentPayload(candidate): CommentPayload,
) -> Result<StatusCode, AppError> {
    state.validator.validate(&candidate)?;
    let comment = state
        .db_repo
        .insert(&candidate)
        .await
        .map_err(AppError::database("Insert"))?;
    tracing::info!(id = comment.id, "inserted comment");
    Ok(StatusCode::CREATED)
}
