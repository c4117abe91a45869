//! Certificate and project images, decoded off the UI thread

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use image::{DynamicImage, RgbaImage};
use tokio::sync::mpsc;

use crate::event::ImageLoadResult;
use crate::widgets::image::fit;

#[derive(Debug, Clone)]
pub enum AssetState {
    Loading,
    Ready(Arc<DynamicImage>),
    Failed(String),
}

/// Decoded images keyed by their asset reference
#[derive(Debug, Default)]
pub struct AssetCache {
    images: HashMap<String, AssetState>,
    /// Latest resized copy of each asset, with the cell size it was made for
    thumbnails: HashMap<String, Thumbnail>,
}

#[derive(Debug)]
struct Thumbnail {
    cols: u16,
    rows: u16,
    image: RgbaImage,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, asset: &str) -> Option<&AssetState> {
        self.images.get(asset)
    }

    pub fn get(&self, asset: &str) -> Option<&Arc<DynamicImage>> {
        match self.images.get(asset) {
            Some(AssetState::Ready(image)) => Some(image),
            _ => None,
        }
    }

    pub fn is_ready(&self, asset: &str) -> bool {
        matches!(self.images.get(asset), Some(AssetState::Ready(_)))
    }

    pub fn is_loading(&self, asset: &str) -> bool {
        matches!(self.images.get(asset), Some(AssetState::Loading))
    }

    pub fn is_failed(&self, asset: &str) -> bool {
        matches!(self.images.get(asset), Some(AssetState::Failed(_)))
    }

    /// Mark `asset` as loading; false if it was already requested
    ///
    /// Failed assets stay failed and are never requested again.
    pub fn start_loading(&mut self, asset: &str) -> bool {
        if self.images.contains_key(asset) {
            return false;
        }
        self.images.insert(asset.to_string(), AssetState::Loading);
        true
    }

    /// Store a finished load
    pub fn apply(&mut self, result: ImageLoadResult) {
        match result {
            ImageLoadResult::Success { asset, image } => {
                tracing::debug!(%asset, "Image ready");
                self.images.insert(asset, AssetState::Ready(image));
            }
            ImageLoadResult::Failure { asset, error } => {
                tracing::warn!(%asset, %error, "Image failed to load");
                self.images.insert(asset, AssetState::Failed(error));
            }
        }
    }

    /// Resize a ready image for a `cols` x `rows` cell slot
    ///
    /// A thumbnail of another size is replaced, so each asset keeps one.
    /// Returns true when a new thumbnail was produced.
    pub fn prepare_thumbnail(&mut self, asset: &str, cols: u16, rows: u16) -> bool {
        if cols == 0 || rows == 0 || self.thumbnail(asset, cols, rows).is_some() {
            return false;
        }
        let Some(image) = self.get(asset) else {
            return false;
        };
        let image = fit(image, cols, rows);
        self.thumbnails
            .insert(asset.to_string(), Thumbnail { cols, rows, image });
        true
    }

    pub fn thumbnail(&self, asset: &str, cols: u16, rows: u16) -> Option<&RgbaImage> {
        self.thumbnails
            .get(asset)
            .filter(|thumb| thumb.cols == cols && thumb.rows == rows)
            .map(|thumb| &thumb.image)
    }

    pub fn thumbnail_count(&self) -> usize {
        self.thumbnails.len()
    }

    /// Status text shown in place of an image that is not ready
    pub fn placeholder(&self, asset: &str) -> &'static str {
        match self.images.get(asset) {
            Some(AssetState::Loading) | None => "[loading image]",
            Some(AssetState::Failed(_)) => "[image unavailable]",
            Some(AssetState::Ready(_)) => "",
        }
    }
}

/// Decode the image at `path` on the blocking pool
pub async fn load_image(path: PathBuf) -> Result<DynamicImage, String> {
    let display = path.display().to_string();
    tokio::task::spawn_blocking(move || image::open(&path))
        .await
        .map_err(|e| format!("decode task failed: {}", e))?
        .map_err(|e| format!("{}: {}", display, e))
}

/// Spawn a decode of `path`; the outcome arrives on `tx` tagged with `asset`
pub fn spawn_image_load(asset: String, path: PathBuf, tx: mpsc::UnboundedSender<ImageLoadResult>) {
    tokio::spawn(async move {
        let result = match load_image(path).await {
            Ok(image) => ImageLoadResult::Success {
                asset,
                image: Arc::new(image),
            },
            Err(error) => ImageLoadResult::Failure { asset, error },
        };
        // Receiver gone means the UI has shut down
        let _ = tx.send(result);
    });
}
