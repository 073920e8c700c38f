//! File I/O around composition

use super::compose_pdf;
use crate::options::LayoutOptions;
use crate::source::load_images;
use crate::types::*;
use std::path::Path;

/// Compose image files into a PDF written to `output_path`.
///
/// Returns the number of pages written.
pub async fn generate_pdf(
    image_paths: &[impl AsRef<Path>],
    options: &LayoutOptions,
    output_path: impl AsRef<Path>,
) -> Result<usize> {
    if image_paths.is_empty() {
        return Err(ComposeError::EmptyInput);
    }

    let images = load_images(image_paths).await?;
    let options = *options;
    let page_count = crate::stats::calculate_statistics(images.len(), &options)?.output_pages;

    let bytes = tokio::task::spawn_blocking(move || compose_pdf(&images, &options)).await??;

    save_pdf(bytes, output_path).await?;
    Ok(page_count)
}

/// Write serialized PDF bytes to disk
pub async fn save_pdf(bytes: Vec<u8>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    tokio::fs::write(&path, bytes).await?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
