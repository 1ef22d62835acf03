//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use crate::handlers::health::health;
use crate::handlers::uploads::{upload_thumbnail, upload_video};
use crate::handlers::videos::{create_video, get_video, list_videos};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Slack on top of the payload caps for multipart framing overhead.
const MULTIPART_OVERHEAD: usize = 1 << 20;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let thumbnail_limit = state.config.max_thumbnail_bytes as usize + MULTIPART_OVERHEAD;
    let video_limit = state.config.max_video_bytes as usize + MULTIPART_OVERHEAD;

    let video_routes = Router::new()
        .route("/videos", post(create_video).get(list_videos))
        .route("/videos/:video_id", get(get_video))
        .route(
            "/videos/:video_id/thumbnail",
            post(upload_thumbnail).layer(DefaultBodyLimit::max(thumbnail_limit)),
        )
        .route(
            "/videos/:video_id/video",
            post(upload_video).layer(DefaultBodyLimit::max(video_limit)),
        );

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health));

    Router::new()
        .nest("/api", video_routes)
        .merge(health_routes)
        // Thumbnails are served straight from the asset root
        .nest_service("/assets", ServeDir::new(state.assets.root()))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
