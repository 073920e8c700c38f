//! Image placement within pages
//!
//! This module handles the geometry of a single page:
//! - Page size for a group of one or two images
//! - Splitting the page into per-image regions
//! - Scaling each image to fit its region inside the border inset
//! - Centering the scaled image within its full region
//! - The border stroke path

use crate::constants::MIN_IMAGE_SCALE;
use crate::types::BorderColor;

use super::{Border, ImagePlacement, Rect};

/// Page size for a group of `group_len` images.
///
/// One image gets the reference page; two images get a spread of twice the
/// reference width and the same height.
pub fn page_dimensions(reference: (f32, f32), group_len: usize) -> (f32, f32) {
    let (width, height) = reference;
    if group_len > 1 {
        (width * 2.0, height)
    } else {
        (width, height)
    }
}

/// Split a page into one region per image.
///
/// A single image gets the whole page; two images get the left and right
/// halves.
pub fn allocate_regions(page_width: f32, page_height: f32, group_len: usize) -> Vec<Rect> {
    if group_len > 1 {
        let half = page_width / 2.0;
        vec![
            Rect::new(0.0, 0.0, half, page_height),
            Rect::new(half, 0.0, half, page_height),
        ]
    } else {
        vec![Rect::new(0.0, 0.0, page_width, page_height)]
    }
}

/// Largest uniform scale that fits an image inside `region` shrunk by
/// `border` on every side.
///
/// Returns `None` when the border leaves no usable interior.
pub fn fit_scale(image_width: f32, image_height: f32, region: &Rect, border: f32) -> Option<f32> {
    let scale_w = (region.width - 2.0 * border) / image_width;
    let scale_h = (region.height - 2.0 * border) / image_height;
    let scale = scale_w.min(scale_h);
    (scale > 0.0).then_some(scale)
}

/// Place one image in its region.
///
/// The image is scaled with [`fit_scale`] (clamped to [`MIN_IMAGE_SCALE`]
/// when the border consumes the region) and centered on the full region.
pub fn place_image(
    source_index: usize,
    image_width: f32,
    image_height: f32,
    region: &Rect,
    border: f32,
) -> ImagePlacement {
    let scale = fit_scale(image_width, image_height, region, border).unwrap_or_else(|| {
        log::warn!(
            "Border of {} leaves no room for image {} in a {}x{} region; clamping scale",
            border,
            source_index,
            region.width,
            region.height
        );
        MIN_IMAGE_SCALE
    });

    let scaled_width = image_width * scale;
    let scaled_height = image_height * scale;

    let x = region.x + (region.width - scaled_width) / 2.0;
    let y = region.y + (region.height - scaled_height) / 2.0;

    ImagePlacement {
        source_index,
        region: *region,
        rect: Rect::new(x, y, scaled_width, scaled_height),
        scale,
    }
}

/// Border stroke for a page, or `None` when `width` is zero.
///
/// The path is inset by half the line width so the outer edge of the stroke
/// touches the page edge.
pub fn page_border(
    page_width: f32,
    page_height: f32,
    width: u32,
    color: BorderColor,
) -> Option<Border> {
    if width == 0 {
        return None;
    }
    let line_width = width as f32;
    let margin = line_width / 2.0;
    Some(Border {
        rect: Rect::new(
            margin,
            margin,
            (page_width - line_width).max(0.0),
            (page_height - line_width).max(0.0),
        ),
        line_width,
        color,
    })
}
