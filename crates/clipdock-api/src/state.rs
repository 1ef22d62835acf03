//! Application state.

use std::sync::Arc;

use clipdock_catalog::{MemoryCatalog, VideoCatalog};
use clipdock_media::{FfprobeInspector, StreamInspector};
use clipdock_storage::{AssetStore, ObjectStore, S3Client};

use crate::auth::Authenticator;
use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub catalog: Arc<dyn VideoCatalog>,
    pub objects: Arc<dyn ObjectStore>,
    pub assets: AssetStore,
    pub inspector: Arc<dyn StreamInspector>,
    pub auth: Arc<Authenticator>,
}

impl AppState {
    /// Create new application state with the production collaborators.
    pub async fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        crate::error::set_redact_internal_details(config.is_production());

        let objects = S3Client::from_env()?;

        let assets = AssetStore::new(&config.assets_root, &config.assets_base_url);
        assets.ensure_root().await?;

        let auth = Authenticator::new(&config.jwt_secret);

        Ok(Self {
            config,
            catalog: Arc::new(MemoryCatalog::new()),
            objects: Arc::new(objects),
            assets,
            inspector: Arc::new(FfprobeInspector),
            auth: Arc::new(auth),
        })
    }
}
