//! Shared constants for page composition

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Option Defaults
// =============================================================================

/// Border width applied when the caller does not supply one (points)
pub const DEFAULT_BORDER_WIDTH: u32 = 3;

// =============================================================================
// Placement
// =============================================================================

/// Smallest scale factor an image is drawn at.
///
/// A border wider than half the region leaves no usable interior; the fit
/// ratio is clamped to this value instead of going to zero or negative.
pub const MIN_IMAGE_SCALE: f32 = 1.0e-4;

// =============================================================================
// PDF Output
// =============================================================================

/// PDF version written to the output header
pub const PDF_VERSION: &str = "1.7";

/// Bits per color component for embedded images
pub const IMAGE_BITS_PER_COMPONENT: i64 = 8;
