use std::path::PathBuf;

/// Startup failures. Both kinds are fatal with a diagnostic; neither is
/// retried. The simulation itself has no error conditions.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to load sprite {path:?}: {source}")]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to initialize display: {0}")]
    DisplayInit(String),
}
