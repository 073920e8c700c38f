//! PDF rendering for composed documents
//!
//! This module handles all PDF-specific operations:
//! - Creating image XObjects from decoded pixels
//! - Building output pages with border and image draw commands
//! - Assembling the page tree and catalog

mod page;
mod xobject;

pub use page::*;
pub use xobject::create_image_xobject;

use crate::constants::PDF_VERSION;
use crate::layout::Document;
use crate::source::ImageSource;
use crate::types::Result;
use lopdf::{Dictionary, Object};

/// Render a composed document to a PDF object graph.
pub fn render_pdf(document: &Document, images: &[ImageSource]) -> Result<lopdf::Document> {
    let mut output = lopdf::Document::with_version(PDF_VERSION);
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(document.page_count());

    for page in &document.pages {
        let page_id = render_page(&mut output, page, images, pages_tree_id)?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}

/// Serialize a PDF object graph to bytes
pub fn to_bytes(mut doc: lopdf::Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}
