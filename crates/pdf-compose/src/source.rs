//! Decoded input images

use crate::types::*;
use image::DynamicImage;
use std::path::Path;

/// One decoded raster image awaiting placement
#[derive(Debug, Clone)]
pub struct ImageSource {
    image: DynamicImage,
}

impl ImageSource {
    /// Wrap an already decoded image
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Decode an image from its encoded bytes, guessing the format from content
    pub fn decode(bytes: &[u8]) -> std::result::Result<Self, image::ImageError> {
        image::load_from_memory(bytes).map(Self::new)
    }

    /// Pixel width
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Pixel height
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel dimensions as floats, for layout math
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width() as f32, self.height() as f32)
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

impl From<DynamicImage> for ImageSource {
    fn from(image: DynamicImage) -> Self {
        Self::new(image)
    }
}

/// Decode an ordered batch of encoded images.
///
/// The first failure aborts the batch and reports the index of the
/// offending image.
pub fn decode_images(encoded: &[Vec<u8>]) -> Result<Vec<ImageSource>> {
    encoded
        .iter()
        .enumerate()
        .map(|(index, bytes)| {
            ImageSource::decode(bytes).map_err(|source| ComposeError::ImageDecode { index, source })
        })
        .collect()
}

/// Load and decode a single image file
pub async fn load_image(path: impl AsRef<Path>) -> Result<ImageSource> {
    let mut images = load_images(&[path]).await?;
    images.pop().ok_or(ComposeError::EmptyInput)
}

/// Load and decode multiple image files, preserving order
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<ImageSource>> {
    let mut encoded = Vec::with_capacity(paths.len());
    for path in paths {
        encoded.push(tokio::fs::read(path.as_ref()).await?);
    }
    let images = tokio::task::spawn_blocking(move || decode_images(&encoded)).await??;
    log::debug!("Decoded {} image(s)", images.len());
    Ok(images)
}
