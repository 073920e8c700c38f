use crate::options::LayoutOptions;
use crate::types::*;

/// Calculate page statistics for composing `image_count` images
pub fn calculate_statistics(
    image_count: usize,
    options: &LayoutOptions,
) -> Result<CompositionStatistics> {
    if image_count == 0 {
        return Err(ComposeError::EmptyInput);
    }

    let (spread_pages, single_pages) = match options.mode {
        LayoutMode::Single => (0, image_count),
        LayoutMode::Double => (image_count / 2, image_count % 2),
    };

    Ok(CompositionStatistics {
        source_images: image_count,
        output_pages: spread_pages + single_pages,
        spread_pages,
        single_pages,
    })
}
