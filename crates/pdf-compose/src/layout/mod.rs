//! Layout calculation for composition
//!
//! This module handles all the geometric calculations:
//! - Grouping images into pages (single or paired)
//! - Page sizing and region allocation
//! - Scale-to-fit, centering and the border stroke

mod grouping;
mod placement;
mod types;

pub use grouping::*;
pub use placement::*;
pub use types::*;

use crate::options::LayoutOptions;

/// Lay out images of the given pixel dimensions onto pages.
///
/// This is the pure geometric core; callers are responsible for rejecting
/// empty input and degenerate dimensions.
pub fn layout_pages(dimensions: &[(f32, f32)], options: &LayoutOptions) -> Document {
    let reference = options.paper_size.dimensions_pt();
    let border = options.border_width_pt();

    let pages = group_images(dimensions.len(), options.mode)
        .into_iter()
        .map(|group| {
            let (width, height) = page_dimensions(reference, group.len());
            let regions = allocate_regions(width, height, group.len());

            let placements = group
                .zip(regions.iter())
                .map(|(index, region)| {
                    let (image_width, image_height) = dimensions[index];
                    place_image(index, image_width, image_height, region, border)
                })
                .collect();

            Page {
                width,
                height,
                placements,
                border: page_border(width, height, options.border_width, options.border_color),
            }
        })
        .collect();

    Document { pages }
}
