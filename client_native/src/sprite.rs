//! Sprite asset loading

use std::path::Path;

use crate::error::ClientError;

/// Decoded RGBA sprite and its pixel dimensions.
///
/// The dimensions seed the body extent and the arena border insets, so the
/// asset is loaded before the simulation is built.
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Sprite {
    /// Load and decode an image file. There is no fallback asset; a missing
    /// or undecodable file aborts startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| ClientError::AssetLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!("Loaded sprite {:?} ({}x{})", path, width, height);

        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }
}
