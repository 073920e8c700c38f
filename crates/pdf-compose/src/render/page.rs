//! Output page rendering

use crate::layout::{Border, ImagePlacement, Page};
use crate::source::ImageSource;
use crate::types::{ComposeError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::xobject::create_image_xobject;

/// Render one composed page into `output` and return the page object id.
///
/// The border is drawn first, then each image in placement order.
pub fn render_page(
    output: &mut Document,
    page: &Page,
    images: &[ImageSource],
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page.width),
            Object::Real(page.height),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    if let Some(border) = &page.border {
        content_ops.push(generate_border_command(border));
    }

    for (idx, placement) in page.placements.iter().enumerate() {
        let source = images.get(placement.source_index).ok_or_else(|| {
            ComposeError::Internal(format!(
                "Placement refers to image {} but only {} were supplied",
                placement.source_index,
                images.len()
            ))
        })?;

        let xobject_name = format!("Im{}", idx);
        let xobject_id = create_image_xobject(output, source)?;
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        content_ops.push(generate_placement_command(&xobject_name, placement));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Content stream command drawing an image XObject into its placed rectangle.
///
/// Image space is the unit square, so the matrix scales it to the drawn size.
pub fn generate_placement_command(xobject_name: &str, placement: &ImagePlacement) -> String {
    let rect = &placement.rect;
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        rect.width, rect.height, rect.x, rect.y, xobject_name
    )
}

/// Content stream commands stroking the page border
pub fn generate_border_command(border: &Border) -> String {
    let (r, g, b) = border.color.rgb_unit();
    let rect = &border.rect;
    format!(
        "q {} {} {} RG {} w {} {} {} {} re S Q\n",
        r, g, b, border.line_width, rect.x, rect.y, rect.width, rect.height
    )
}
