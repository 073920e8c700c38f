//! Image composition - laying images out on PDF pages
//!
//! This module orchestrates the composition process:
//! 1. Reject empty input and zero-sized images
//! 2. Group images and lay them out on pages
//! 3. Render the layout to a PDF

mod io;

pub use io::{generate_pdf, save_pdf};

use crate::layout::{Document, layout_pages};
use crate::options::LayoutOptions;
use crate::render::{render_pdf, to_bytes};
use crate::source::ImageSource;
use crate::types::*;

/// Compose images into a page layout.
///
/// Composition is all-or-nothing: any invalid image fails the whole call.
pub fn compose(images: &[ImageSource], options: &LayoutOptions) -> Result<Document> {
    options.validate()?;

    if images.is_empty() {
        return Err(ComposeError::EmptyInput);
    }

    let dimensions = images
        .iter()
        .enumerate()
        .map(|(index, image)| match (image.width(), image.height()) {
            (width, height) if width == 0 || height == 0 => Err(ComposeError::DegenerateImage {
                index,
                width,
                height,
            }),
            _ => Ok(image.dimensions()),
        })
        .collect::<Result<Vec<_>>>()?;

    let document = layout_pages(&dimensions, options);
    log::info!(
        "Composed {} image(s) onto {} page(s) ({} layout, {} border {})",
        images.len(),
        document.page_count(),
        options.mode.name(),
        options.border_color.name(),
        options.border_width
    );
    Ok(document)
}

/// Compose images and render the result to PDF bytes
pub fn compose_pdf(images: &[ImageSource], options: &LayoutOptions) -> Result<Vec<u8>> {
    let document = compose(images, options)?;
    let pdf = render_pdf(&document, images)?;
    to_bytes(pdf)
}
