//! Circular crop geometry: parameters, placement math, and the circle mask.
//!
//! Pure computation. The pixel pipeline in [`crate::raster`] consumes these
//! results; nothing here touches pixel data.
//!
//! # Example
//!
//! ```
//! use badgelayout::crop::{CropGeometry, CropParameters};
//! use badgelayout::units::Size;
//!
//! let params = CropParameters::new(58.0).offset(10, -4);
//! let geo = CropGeometry::compute(&params, 300, Size::new(800, 600)).unwrap();
//!
//! assert_eq!(geo.diameter, 685);
//! assert_eq!(geo.radius, 342);
//! // Image centred on the circle, then displaced by the offset.
//! assert_eq!(geo.paste, (342 - 400 + 10, 342 - 300 - 4));
//! ```

use num_traits::Float;

use crate::error::BadgeError;
use crate::units::{Size, diameter_px};

/// Default badge diameter, the common 58 mm pin-back size.
pub const DEFAULT_DIAMETER_MM: f64 = 58.0;

/// User-facing controls for one circular crop.
///
/// All fields are independent. The only hard rule is `scale > 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CropParameters {
    /// Circle diameter in millimetres.
    pub diameter_mm: f64,
    /// Uniform scale applied after rotation. `1.0` skips resampling.
    pub scale: f64,
    /// Horizontal displacement in pixels, positive to the right.
    pub offset_x: i32,
    /// Vertical displacement in pixels, positive downward.
    pub offset_y: i32,
    /// Counter-clockwise rotation in degrees.
    pub rotation_degrees: f64,
}

impl Default for CropParameters {
    fn default() -> Self {
        Self::new(DEFAULT_DIAMETER_MM)
    }
}

impl CropParameters {
    /// Identity crop (scale 1, no offset, no rotation) at the given diameter.
    pub const fn new(diameter_mm: f64) -> Self {
        Self {
            diameter_mm,
            scale: 1.0,
            offset_x: 0,
            offset_y: 0,
            rotation_degrees: 0.0,
        }
    }

    /// Set the uniform scale factor.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the pixel offset of the image relative to the circle centre.
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Set the counter-clockwise rotation in degrees.
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Parameters that make an `image`-sized source exactly cover the circle:
    /// [`optimal_scale`], centred, unrotated.
    pub fn auto_fit(image: Size, diameter_mm: f64, dpi: i32) -> Result<Self, BadgeError> {
        let d = diameter_px(diameter_mm, dpi)?;
        Ok(Self::new(diameter_mm).scale(optimal_scale(image, d)?))
    }

    /// Check the hard parameter domain.
    pub fn validate(&self) -> Result<(), BadgeError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(BadgeError::invalid("scale", "must be finite and positive"));
        }
        if !self.rotation_degrees.is_finite() {
            return Err(BadgeError::invalid("rotation_degrees", "must be finite"));
        }
        if !self.diameter_mm.is_finite() || self.diameter_mm < 0.0 {
            return Err(BadgeError::invalid(
                "diameter_mm",
                "must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Dimensions of an image after uniform scaling: `round(w·s) × round(h·s)`.
///
/// Fails when the scale is not positive or either side would vanish.
pub fn scaled_size(size: Size, scale: f64) -> Result<Size, BadgeError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(BadgeError::invalid("scale", "must be finite and positive"));
    }
    let w = Float::round(size.width as f64 * scale);
    let h = Float::round(size.height as f64 * scale);
    if w < 1.0 || h < 1.0 {
        return Err(BadgeError::invalid("scale", "scaled image would be empty"));
    }
    Ok(Size::new(w as u32, h as u32))
}

/// Smallest scale at which an `image`-sized source covers a `diameter`-pixel
/// circle's bounding square: `max(d / w, d / h)`.
pub fn optimal_scale(image: Size, diameter: u32) -> Result<f64, BadgeError> {
    if image.is_empty() {
        return Err(BadgeError::invalid("image", "has a zero dimension"));
    }
    let sx = diameter as f64 / image.width as f64;
    let sy = diameter as f64 / image.height as f64;
    Ok(sx.max(sy))
}

/// Where the working image lands on the crop canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CropGeometry {
    /// Canvas side and circle diameter in pixels.
    pub diameter: u32,
    /// `diameter / 2`, floored. Odd diameters keep the 1px asymmetry.
    pub radius: u32,
    /// Top-left of the working image on the canvas. May be negative or past
    /// the canvas; the paste clips.
    pub paste: (i64, i64),
}

impl CropGeometry {
    /// Compute placement for a `working`-sized image (already rotated and
    /// scaled) under `params` at `dpi`.
    pub fn compute(params: &CropParameters, dpi: i32, working: Size) -> Result<Self, BadgeError> {
        let diameter = diameter_px(params.diameter_mm, dpi)?;
        let radius = diameter / 2;
        let paste_x = radius as i64 - (working.width / 2) as i64 + params.offset_x as i64;
        let paste_y = radius as i64 - (working.height / 2) as i64 + params.offset_y as i64;
        Ok(Self {
            diameter,
            radius,
            paste: (paste_x, paste_y),
        })
    }
}

/// Whether pixel `(x, y)` of a `diameter`-sided square lies in its inscribed
/// circle, judged at the pixel centre.
///
/// Evaluated as `(2x+1-d)² + (2y+1-d)² ≤ d²`, i.e. the centre-distance test
/// scaled by two so it stays in integers.
pub fn in_circle(diameter: u32, x: u32, y: u32) -> bool {
    let d = diameter as i64;
    let dx = 2 * x as i64 + 1 - d;
    let dy = 2 * y as i64 + 1 - d;
    dx * dx + dy * dy <= d * d
}
