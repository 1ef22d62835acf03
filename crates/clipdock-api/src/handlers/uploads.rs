//! Media upload handlers.
//!
//! Each upload runs one sequential pipeline: authorize → validate content
//! type → stage → classify (video only) → resolve key → transfer → commit
//! metadata → respond with the updated record.

use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use tracing::{info, warn};

use clipdock_media::{classify, StagedUpload};
use clipdock_models::{AssetKind, Orientation, VideoId, VideoRecord};
use clipdock_storage::{thumbnail_key, video_key};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Resolve the target record for a path id and enforce ownership.
pub(crate) async fn fetch_owned(
    state: &AppState,
    video_id: &str,
    user: &AuthUser,
) -> ApiResult<VideoRecord> {
    let id = VideoId::parse(video_id).map_err(|_| ApiError::bad_request("Invalid video ID"))?;
    let record = state.catalog.get_video(id).await?;
    if !record.is_owned_by(&user.user_id) {
        return Err(ApiError::forbidden("User is not the video owner"));
    }
    Ok(record)
}

fn multipart_error(e: MultipartError) -> ApiError {
    ApiError::bad_request(format!("Invalid multipart payload: {e}"))
}

/// Upload a thumbnail image for a video the caller owns.
///
/// Accepts `image/jpeg` and `image/png` in a multipart field named
/// `thumbnail`, held fully in memory under the configured cap, then written
/// under the local asset root as `{video_id}.{ext}`.
pub async fn upload_thumbnail(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    user: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<VideoRecord>> {
    let mut record = fetch_owned(&state, &video_id, &user).await?;

    let mut upload: Option<(&'static str, Bytes)> = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(AssetKind::Thumbnail.field_name()) {
            continue;
        }
        let content_type = field
            .content_type()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::bad_request("Missing content type on thumbnail field"))?;
        let ext = AssetKind::Thumbnail.validate_content_type(&content_type)?;

        let data = field.bytes().await.map_err(multipart_error)?;
        if data.len() as u64 > state.config.max_thumbnail_bytes {
            return Err(ApiError::PayloadTooLarge {
                limit: state.config.max_thumbnail_bytes,
            });
        }
        upload = Some((ext, data));
        break;
    }
    let (ext, data) =
        upload.ok_or_else(|| ApiError::bad_request("Missing multipart field 'thumbnail'"))?;

    let key = thumbnail_key(record.id, ext);
    state.assets.put(&key, &data).await?;
    let url = state.assets.public_url(&key);
    info!(video_id = %record.id, key, bytes = data.len(), "Stored thumbnail");

    record.thumbnail_url = Some(url);
    let record = commit(&state, record, &key).await?;
    Ok(Json(record))
}

/// Upload the video file for a video the caller owns.
///
/// Accepts `video/mp4` in a multipart field named `video`, staged to a
/// bounded temp file, classified by orientation, and written to the remote
/// bucket as `{orientation}/{video_id}.mp4`.
pub async fn upload_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    user: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<VideoRecord>> {
    let mut record = fetch_owned(&state, &video_id, &user).await?;

    let mut staged: Option<StagedUpload> = None;
    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(AssetKind::Video.field_name()) {
            continue;
        }
        let content_type = field
            .content_type()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::bad_request("Missing content type on video field"))?;
        AssetKind::Video.validate_content_type(&content_type)?;

        let mut upload = StagedUpload::create(state.config.max_video_bytes).await?;
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            upload.write_chunk(&chunk).await?;
        }
        upload.finish().await?;
        staged = Some(upload);
        break;
    }
    let staged = staged.ok_or_else(|| ApiError::bad_request("Missing multipart field 'video'"))?;

    // Classification failure is non-fatal: the upload proceeds under the
    // default orientation.
    let orientation = match classify(state.inspector.as_ref(), staged.path()).await {
        Ok(orientation) => orientation,
        Err(e) => {
            warn!(video_id = %record.id, error = %e, "Classification failed, defaulting orientation");
            Orientation::Other
        }
    };

    let key = video_key(record.id, orientation);
    state
        .objects
        .put_file(staged.path(), &key, "video/mp4")
        .await?;
    let url = state.objects.public_url(&key);
    info!(video_id = %record.id, %orientation, key, bytes = staged.len(), "Stored video object");

    record.video_url = Some(url);
    let record = commit(&state, record, &key).await?;
    Ok(Json(record))
}

/// Write the mutated record back through the catalog.
///
/// A commit failure after a successful transfer leaves the object at `key`
/// orphaned; no compensating deletion is attempted.
async fn commit(state: &AppState, record: VideoRecord, key: &str) -> ApiResult<VideoRecord> {
    match state.catalog.update_video(record).await {
        Ok(stored) => Ok(stored),
        Err(e) => {
            warn!(key, error = %e, "Metadata commit failed, stored object is orphaned");
            Err(ApiError::MetadataCommit(e.to_string()))
        }
    }
}
