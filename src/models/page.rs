//! Physical page geometry
//!
//! The preview is laid out in CSS pixels at 96 dpi, so an A4 sheet is
//! 794 x 1123 px on screen. Print output uses the millimetre sizes directly.

use serde::{Deserialize, Serialize};

/// CSS reference resolution
pub const CSS_DPI: f64 = 96.0;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Convert millimetres to CSS pixels, rounded to the nearest device pixel
pub fn mm_to_px(mm: f64) -> f64 {
    (mm / MM_PER_INCH * CSS_DPI).round()
}

/// Fixed size of the document being previewed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageSize {
    pub width_mm: f64,
    pub height_mm: f64,
    /// Inner padding applied on all four sides
    pub padding_mm: f64,
}

impl PageSize {
    /// ISO 216 A4 with the cover page's 20mm padding
    pub const A4: PageSize = PageSize {
        width_mm: 210.0,
        height_mm: 297.0,
        padding_mm: 20.0,
    };

    pub fn width_px(&self) -> f64 {
        mm_to_px(self.width_mm)
    }

    pub fn height_px(&self) -> f64 {
        mm_to_px(self.height_mm)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_pixel_size() {
        assert_eq!(PageSize::A4.width_px(), 794.0);
        assert_eq!(PageSize::A4.height_px(), 1123.0);
    }

    #[test]
    fn test_mm_to_px() {
        assert_eq!(mm_to_px(25.4), 96.0);
        assert_eq!(mm_to_px(0.0), 0.0);
    }
}
