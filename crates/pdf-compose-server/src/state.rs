use crate::config::Config;
use crate::store::ArtifactStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ArtifactStore,
    pub config: Config,
}

impl AppState {
    /// Open the artifact store named by `config`
    pub async fn new(config: Config) -> crate::store::Result<Self> {
        let store = ArtifactStore::open(&config.output_dir).await?;
        Ok(Self { store, config })
    }
}
