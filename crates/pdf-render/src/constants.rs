//! Shared constants for page rendering
//!
//! Layout numbers follow the classic office-document conventions: inch
//! margins, Helvetica body text and a fixed line height.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Points per inch
pub const INCH: f32 = 72.0;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Text Layout
// =============================================================================

/// Margin around flowed text pages (points)
pub const TEXT_MARGIN: f32 = INCH;

/// Body font size for flowed text (points)
pub const BODY_FONT_SIZE: f32 = 10.0;

/// Font size for the heading of a flowed document (points)
pub const HEADING_FONT_SIZE: f32 = 12.0;

/// Baseline-to-baseline distance for flowed text (points)
pub const LINE_HEIGHT: f32 = 14.0;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Approximate character width ratio for Helvetica-Bold
pub const HELVETICA_BOLD_CHAR_WIDTH_RATIO: f32 = 0.55;

// =============================================================================
// Title Pages
// =============================================================================

pub const TITLE_FONT_SIZE: f32 = 24.0;
pub const SUBTITLE_FONT_SIZE: f32 = 14.0;
pub const FOOTER_FONT_SIZE: f32 = 12.0;

/// Distance of the title baseline from the top edge (points)
pub const TITLE_OFFSET: f32 = 3.0 * INCH;
pub const SUBTITLE_OFFSET: f32 = 3.5 * INCH;
pub const FOOTER_OFFSET: f32 = 5.0 * INCH;

pub const FOOTER_TEXT: &str = "Generated by DocMerge";

// =============================================================================
// Image Pages
// =============================================================================

/// Margin around a placed image (points)
pub const IMAGE_MARGIN: f32 = 0.5 * INCH;

/// Vertical space reserved for the source label (points)
pub const LABEL_BAND: f32 = 0.5 * INCH;

pub const LABEL_FONT_SIZE: f32 = 8.0;
