use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("No images to compose")]
    EmptyInput,
    #[error("Image {index} could not be decoded: {source}")]
    ImageDecode {
        index: usize,
        #[source]
        source: image::ImageError,
    },
    #[error("Image {index} has no pixels ({width}x{height})")]
    DegenerateImage {
        index: usize,
        width: u32,
        height: u32,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ComposeError>;

/// How images are grouped onto pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase", from = "String")
)]
pub enum LayoutMode {
    /// One image per reference-sized page
    #[default]
    Single,
    /// Two images side by side on a double-width spread
    Double,
}

impl LayoutMode {
    /// Resolve a user-supplied layout name.
    ///
    /// Only "double" (any case) selects spreads; every other value,
    /// including typos, lays out one image per page.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("double") {
            LayoutMode::Double
        } else {
            LayoutMode::Single
        }
    }

    /// Number of images placed on a full page
    pub fn images_per_page(self) -> usize {
        match self {
            LayoutMode::Single => 1,
            LayoutMode::Double => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::Single => "single",
            LayoutMode::Double => "double",
        }
    }
}

impl From<String> for LayoutMode {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Border stroke colors offered to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase", from = "String")
)]
pub enum BorderColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
    Gray,
}

impl BorderColor {
    /// Resolve a user-supplied color name.
    ///
    /// Matching ignores case and surrounding whitespace. Names outside the
    /// palette resolve to black rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "red" => BorderColor::Red,
            "blue" => BorderColor::Blue,
            "green" => BorderColor::Green,
            "gray" => BorderColor::Gray,
            _ => BorderColor::Black,
        }
    }

    /// 8-bit RGB components
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            BorderColor::Black => (0, 0, 0),
            BorderColor::Red => (255, 0, 0),
            BorderColor::Blue => (0, 0, 255),
            BorderColor::Green => (0, 255, 0),
            BorderColor::Gray => (128, 128, 128),
        }
    }

    /// RGB components scaled to the 0.0..=1.0 range used by PDF color operators
    pub fn rgb_unit(self) -> (f32, f32, f32) {
        let (r, g, b) = self.rgb();
        (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn name(self) -> &'static str {
        match self {
            BorderColor::Black => "black",
            BorderColor::Red => "red",
            BorderColor::Blue => "blue",
            BorderColor::Green => "green",
            BorderColor::Gray => "gray",
        }
    }
}

impl From<String> for BorderColor {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Reference page sizes.
///
/// A single-image page uses these dimensions as-is (portrait); a spread
/// doubles the width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom {
        width_mm: f32,
        height_mm: f32,
    },
}

impl PaperSize {
    /// Portrait dimensions in millimeters
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Portrait dimensions in points
    pub fn dimensions_pt(self) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        (crate::constants::mm_to_pt(w), crate::constants::mm_to_pt(h))
    }
}

/// Summary of a composition, computed without decoding any pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionStatistics {
    /// Number of input images
    pub source_images: usize,
    /// Total pages in the output document
    pub output_pages: usize,
    /// Double-width pages carrying two images
    pub spread_pages: usize,
    /// Reference-width pages carrying one image
    pub single_pages: usize,
}
