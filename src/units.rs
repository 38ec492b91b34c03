//! Physical → pixel unit conversion and page geometry.
//!
//! Every physical length in the crate becomes pixels through [`mm_to_px`],
//! which truncates. Centres, radii and page sizes downstream all assume that
//! rounding, so it must stay uniform.
//!
//! ```
//! use badgelayout::units::{mm_to_px, Page};
//!
//! assert_eq!(mm_to_px(25.4, 300).unwrap(), 300);
//! assert_eq!(mm_to_px(58.0, 300).unwrap(), 685);
//!
//! let a4 = Page::A4.to_pixels(300).unwrap();
//! assert_eq!((a4.width, a4.height), (2480, 3507));
//! ```

use crate::error::BadgeError;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either axis is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Convert a physical length to whole pixels at `dpi`.
///
/// Computes `trunc(mm / 25.4 * dpi)`. Fails when `dpi <= 0` or when `mm` is
/// negative or not finite.
pub fn mm_to_px(mm: f64, dpi: i32) -> Result<u32, BadgeError> {
    if dpi <= 0 {
        return Err(BadgeError::invalid("dpi", "must be positive"));
    }
    if !mm.is_finite() || mm < 0.0 {
        return Err(BadgeError::invalid("mm", "must be finite and non-negative"));
    }
    // Float → int casts saturate, so absurd lengths clamp to u32::MAX.
    Ok((mm / MM_PER_INCH * dpi as f64) as u32)
}

/// Like [`mm_to_px`], but rejects lengths that come out below one pixel.
///
/// Used for circle diameters, where a zero-pixel result has no meaning.
pub fn diameter_px(diameter_mm: f64, dpi: i32) -> Result<u32, BadgeError> {
    let d = mm_to_px(diameter_mm, dpi)?;
    if d == 0 {
        return Err(BadgeError::invalid(
            "diameter_mm",
            "is smaller than one pixel at this dpi",
        ));
    }
    Ok(d)
}

/// A physical page in millimetres.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Page {
    /// Page width in millimetres.
    pub width_mm: f64,
    /// Page height in millimetres.
    pub height_mm: f64,
}

impl Page {
    /// ISO A4 portrait, 210 × 297 mm.
    pub const A4: Self = Self::new(210.0, 297.0);

    /// Create a page of the given physical size.
    pub const fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    /// Page size in pixels at `dpi`.
    pub fn to_pixels(&self, dpi: i32) -> Result<Size, BadgeError> {
        let size = Size::new(mm_to_px(self.width_mm, dpi)?, mm_to_px(self.height_mm, dpi)?);
        if size.is_empty() {
            return Err(BadgeError::invalid("page", "is smaller than one pixel at this dpi"));
        }
        Ok(size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::A4
    }
}
