pub mod compose;
pub mod constants;
pub mod layout;
mod options;
pub mod render;
mod source;
mod stats;
mod types;

pub use compose::{compose, compose_pdf, generate_pdf, save_pdf};
pub use layout::{Border, Document, ImagePlacement, Page, Rect};
pub use options::*;
pub use source::{ImageSource, decode_images, load_image, load_images};
pub use stats::calculate_statistics;
pub use types::*;
