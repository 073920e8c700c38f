//! Image XObject creation
//!
//! Decoded pixels are written as Flate-compressed image XObjects. Color
//! images use `/DeviceRGB`, grayscale images `/DeviceGray`; an alpha channel
//! becomes a separate `/SMask` image.

use crate::constants::IMAGE_BITS_PER_COMPONENT;
use crate::source::ImageSource;
use crate::types::Result;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::DynamicImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;

/// Add an image XObject for `source` to `output` and return its id.
pub fn create_image_xobject(output: &mut Document, source: &ImageSource) -> Result<ObjectId> {
    let image = source.image();
    let color = image.color();

    let (color_space, pixels) = if color.has_color() {
        ("DeviceRGB", image.to_rgb8().into_raw())
    } else {
        ("DeviceGray", image.to_luma8().into_raw())
    };

    let mut dict = image_dictionary(source.width(), source.height(), color_space);

    if color.has_alpha() {
        let mask_id = create_alpha_mask(output, image)?;
        dict.set("SMask", Object::Reference(mask_id));
    }

    Ok(output.add_object(Stream::new(dict, deflate(&pixels)?)))
}

/// Soft mask carrying the alpha channel of `image`
fn create_alpha_mask(output: &mut Document, image: &DynamicImage) -> Result<ObjectId> {
    let alpha: Vec<u8> = image
        .to_rgba8()
        .into_raw()
        .chunks_exact(4)
        .map(|px| px[3])
        .collect();

    let dict = image_dictionary(image.width(), image.height(), "DeviceGray");
    Ok(output.add_object(Stream::new(dict, deflate(&alpha)?)))
}

fn image_dictionary(width: u32, height: u32, color_space: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(width as i64));
    dict.set("Height", Object::Integer(height as i64));
    dict.set("ColorSpace", Object::Name(color_space.as_bytes().to_vec()));
    dict.set("BitsPerComponent", Object::Integer(IMAGE_BITS_PER_COMPONENT));
    dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
    dict
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
