//! API configuration.

use std::path::PathBuf;

/// API server configuration.
///
/// Built once at startup and passed by reference into the application
/// state; there is no process-wide mutable configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Environment (development/production)
    pub environment: String,
    /// Secret for signing and verifying bearer tokens
    pub jwt_secret: String,
    /// Local directory thumbnails are written to
    pub assets_root: PathBuf,
    /// Public base URL at which the asset root is served
    pub assets_base_url: String,
    /// Upper bound on thumbnail payloads, in bytes
    pub max_thumbnail_bytes: u64,
    /// Upper bound on video payloads, in bytes
    pub max_video_bytes: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8091,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            jwt_secret: String::new(),
            assets_root: PathBuf::from("./assets"),
            assets_base_url: "http://localhost:8091/assets".to_string(),
            max_thumbnail_bytes: 10 << 20, // 10 MiB
            max_video_bytes: 1 << 30,      // 1 GiB
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            assets_root: std::env::var("ASSETS_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_root),
            assets_base_url: std::env::var("ASSETS_BASE_URL").unwrap_or(defaults.assets_base_url),
            max_thumbnail_bytes: std::env::var("MAX_THUMBNAIL_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_thumbnail_bytes),
            max_video_bytes: std::env::var("MAX_VIDEO_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_video_bytes),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}
