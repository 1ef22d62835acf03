//! Video record handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use clipdock_models::VideoRecord;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::handlers::uploads::fetch_owned;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Register a new video record owned by the caller. Media is attached by
/// the upload endpoints afterwards.
pub async fn create_video(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateVideoRequest>,
) -> ApiResult<(StatusCode, Json<VideoRecord>)> {
    let mut record = VideoRecord::new(user.user_id);
    record.title = req.title;
    record.description = req.description;

    state.catalog.create_video(record.clone()).await?;
    info!(video_id = %record.id, user_id = %record.user_id, "Registered video");

    Ok((StatusCode::CREATED, Json(record)))
}

/// List the caller's video records, newest first.
pub async fn list_videos(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<VideoRecord>>> {
    let records = state.catalog.list_videos(&user.user_id).await?;
    Ok(Json(records))
}

/// Fetch a video record the caller owns.
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    user: AuthUser,
) -> ApiResult<Json<VideoRecord>> {
    let record = fetch_owned(&state, &video_id, &user).await?;
    Ok(Json(record))
}
