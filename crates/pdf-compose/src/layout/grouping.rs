//! Page grouping: which input images share a page

use crate::types::LayoutMode;
use std::ops::Range;

/// Partition `image_count` images into per-page groups.
///
/// Each group is a range of input indices. Single mode yields one image per
/// group; double mode pairs consecutive images, leaving a trailing group of
/// one when the count is odd. Order is preserved and every index appears in
/// exactly one group.
pub fn group_images(image_count: usize, mode: LayoutMode) -> Vec<Range<usize>> {
    let per_page = mode.images_per_page();
    (0..image_count)
        .step_by(per_page)
        .map(|start| start..(start + per_page).min(image_count))
        .collect()
}
