//! Layout data types for composition
//!
//! These types describe composed pages geometrically. They carry no pixel
//! data; placements refer back to the input images by index.

use crate::types::BorderColor;

/// A rectangular area in points, origin at the bottom-left of the page
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }

    /// Whether `other` lies inside this rectangle, within `tolerance`
    pub fn contains(&self, other: &Rect, tolerance: f32) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.top() <= self.top() + tolerance
    }
}

/// Where one input image is drawn on its page
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePlacement {
    /// Index of the image in the composition input
    pub source_index: usize,
    /// The region of the page allotted to this image
    pub region: Rect,
    /// The drawn rectangle: scaled and centered within `region`
    pub rect: Rect,
    /// Uniform scale from image pixels to page units
    pub scale: f32,
}

/// The stroked frame around a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    /// Path of the stroke; the line is centered on this rectangle
    pub rect: Rect,
    /// Stroke thickness in points
    pub line_width: f32,
    pub color: BorderColor,
}

/// One output page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub width: f32,
    pub height: f32,
    pub placements: Vec<ImagePlacement>,
    pub border: Option<Border>,
}

impl Page {
    pub fn has_border(&self) -> bool {
        self.border.is_some()
    }

    /// Full page bounds
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Page bounds minus the border margin
    pub fn content_area(&self) -> Rect {
        let margin = self.border.map(|b| b.line_width).unwrap_or(0.0);
        self.bounds().inset(margin)
    }

    /// Whether this page is a double-width spread
    pub fn is_spread(&self) -> bool {
        self.placements.len() > 1
    }
}

/// The composed document: pages in output order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All placements across pages, in input order
    pub fn placements(&self) -> impl Iterator<Item = &ImagePlacement> {
        self.pages.iter().flat_map(|page| page.placements.iter())
    }
}
