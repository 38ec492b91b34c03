//! Rotation about the image centre with an expanded canvas.
//!
//! Angles are counter-clockwise degrees, as a user dragging a dial expects.
//! Quarter turns are recognised so they can be applied as exact transposes;
//! every other angle goes through an inverse affine map sampled at pixel
//! centres.
//!
//! ```text
//!     Ccw90 of a 3×2 image → 2×3       Free(30°) → expanded canvas
//!     ┌─────┐      ┌───┐               ┌───────┐
//!     │ F   │  →   │   │               │  ╱╲   │
//!     └─────┘      │ F │               │ ╱F ╲  │  corners never clipped,
//!                  └───┘               │ ╲  ╱  │  exposed area is fill
//!                                      │  ╲╱   │
//!                                      └───────┘
//! ```

use num_traits::Float;

use crate::error::BadgeError;
use crate::units::Size;

/// Exact counter-clockwise quarter turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum QuarterTurn {
    /// 90° counter-clockwise.
    Ccw90,
    /// 180°.
    Ccw180,
    /// 270° counter-clockwise (90° clockwise).
    Ccw270,
}

impl QuarterTurn {
    /// Whether this turn swaps width and height.
    pub fn swaps_axes(self) -> bool {
        !matches!(self, Self::Ccw180)
    }
}

/// A normalised rotation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Rotation {
    /// No rotation. The pipeline skips the stage entirely.
    Identity,
    /// Lossless quarter turn.
    Quarter(QuarterTurn),
    /// Any other angle, kept as its (rounded) cosine and sine.
    Free {
        /// Normalised angle in degrees, in `(0, 360)`.
        degrees: f64,
        /// `cos(angle)`, rounded to 15 decimals.
        cos: f64,
        /// `sin(angle)`, rounded to 15 decimals.
        sin: f64,
    },
}

/// Normalise an angle to `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // A tiny negative input can land exactly on 360 after the shift.
    if r >= 360.0 || r == 0.0 { 0.0 } else { r }
}

impl Rotation {
    /// Classify a counter-clockwise angle in degrees.
    ///
    /// `0`, `360`, `-360`, ... are all [`Rotation::Identity`].
    pub fn from_degrees(degrees: f64) -> Result<Self, BadgeError> {
        if !degrees.is_finite() {
            return Err(BadgeError::invalid("rotation_degrees", "must be finite"));
        }
        let d = normalize_degrees(degrees);
        Ok(if d == 0.0 {
            Self::Identity
        } else if d == 90.0 {
            Self::Quarter(QuarterTurn::Ccw90)
        } else if d == 180.0 {
            Self::Quarter(QuarterTurn::Ccw180)
        } else if d == 270.0 {
            Self::Quarter(QuarterTurn::Ccw270)
        } else {
            let rad = d.to_radians();
            Self::Free {
                degrees: d,
                cos: round15(Float::cos(rad)),
                sin: round15(Float::sin(rad)),
            }
        })
    }

    /// Whether applying this rotation is a no-op.
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Canvas size after rotating a `w × h` image, large enough that no
    /// source corner is clipped.
    pub fn output_size(&self, w: u32, h: u32) -> Size {
        match *self {
            Self::Identity => Size::new(w, h),
            Self::Quarter(q) if q.swaps_axes() => Size::new(h, w),
            Self::Quarter(_) => Size::new(w, h),
            Self::Free { cos, sin, .. } => {
                let (cx, cy) = (w as f64 / 2.0, h as f64 / 2.0);
                let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
                let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
                for (x, y) in [(0.0, 0.0), (w as f64, 0.0), (w as f64, h as f64), (0.0, h as f64)] {
                    let (dx, dy) = (x - cx, y - cy);
                    let rx = cos * dx - sin * dy + cx;
                    let ry = sin * dx + cos * dy + cy;
                    min_x = min_x.min(rx);
                    max_x = max_x.max(rx);
                    min_y = min_y.min(ry);
                    max_y = max_y.max(ry);
                }
                let nw = Float::ceil(max_x) - Float::floor(min_x);
                let nh = Float::ceil(max_y) - Float::floor(min_y);
                Size::new(nw as u32, nh as u32)
            }
        }
    }

    /// Map the centre of output pixel `(x, y)` back to source coordinates.
    ///
    /// `source` is the unrotated size, `output` the result of
    /// [`output_size`](Self::output_size). The returned point may fall
    /// outside the source, in which case the caller fills.
    pub fn source_point(&self, source: Size, output: Size, x: u32, y: u32) -> (f64, f64) {
        let dx = x as f64 + 0.5 - output.width as f64 / 2.0;
        let dy = y as f64 + 0.5 - output.height as f64 / 2.0;
        let (cx, cy) = (source.width as f64 / 2.0, source.height as f64 / 2.0);
        let (cos, sin) = match *self {
            Self::Identity => (1.0, 0.0),
            Self::Quarter(QuarterTurn::Ccw90) => (0.0, 1.0),
            Self::Quarter(QuarterTurn::Ccw180) => (-1.0, 0.0),
            Self::Quarter(QuarterTurn::Ccw270) => (0.0, -1.0),
            Self::Free { cos, sin, .. } => (cos, sin),
        };
        (cos * dx - sin * dy + cx, sin * dx + cos * dy + cy)
    }
}

fn round15(v: f64) -> f64 {
    Float::round(v * 1e15) / 1e15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_full_turns_are_identity() {
        for d in [0.0, 360.0, -360.0, 720.0, -0.0] {
            assert_eq!(Rotation::from_degrees(d).unwrap(), Rotation::Identity, "{d}");
        }
    }

    #[test]
    fn quarter_turns_recognised() {
        assert_eq!(
            Rotation::from_degrees(90.0).unwrap(),
            Rotation::Quarter(QuarterTurn::Ccw90)
        );
        assert_eq!(
            Rotation::from_degrees(-90.0).unwrap(),
            Rotation::Quarter(QuarterTurn::Ccw270)
        );
        assert_eq!(
            Rotation::from_degrees(540.0).unwrap(),
            Rotation::Quarter(QuarterTurn::Ccw180)
        );
    }

    #[test]
    fn normalize_wraps_negative() {
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(390.0), 30.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
    }

    #[test]
    fn non_finite_errors() {
        assert!(Rotation::from_degrees(f64::NAN).is_err());
        assert!(Rotation::from_degrees(f64::INFINITY).is_err());
    }

    #[test]
    fn quarter_turn_swaps_dimensions() {
        let r = Rotation::from_degrees(90.0).unwrap();
        assert_eq!(r.output_size(800, 600), Size::new(600, 800));
        let r = Rotation::from_degrees(180.0).unwrap();
        assert_eq!(r.output_size(800, 600), Size::new(800, 600));
    }

    #[test]
    fn free_rotation_expands_canvas() {
        // 100×100 at 45°: half-extent 70.71 around 50 → [-20.71, 120.71]
        let r = Rotation::from_degrees(45.0).unwrap();
        assert_eq!(r.output_size(100, 100), Size::new(142, 142));

        // Expanded canvas always contains the source.
        for deg in [1.0, 10.0, 33.3, 89.0, 91.0, 135.0, 200.0, 359.0] {
            let r = Rotation::from_degrees(deg).unwrap();
            let s = r.output_size(640, 480);
            assert!(s.width >= 480 && s.height >= 480, "{deg}: {s:?}");
        }
    }

    #[test]
    fn identity_maps_pixel_centres_to_themselves() {
        let s = Size::new(7, 5);
        let (x, y) = Rotation::Identity.source_point(s, s, 3, 2);
        assert_eq!((x, y), (3.5, 2.5));
    }

    #[test]
    fn ccw90_maps_right_edge_to_bottom_edge() {
        // After a counter-clockwise quarter turn, the output's right column
        // shows what was the source's bottom row.
        let src = Size::new(4, 2);
        let r = Rotation::from_degrees(90.0).unwrap();
        let out = r.output_size(4, 2);
        assert_eq!(out, Size::new(2, 4));
        let (sx, sy) = r.source_point(src, out, 1, 0);
        assert_eq!((Float::floor(sx), Float::floor(sy)), (3.0, 1.0));
    }

    #[test]
    fn free_rotation_centre_maps_to_centre() {
        let src = Size::new(100, 60);
        let r = Rotation::from_degrees(30.0).unwrap();
        let out = r.output_size(100, 60);
        // Output centre pixel (even sizes) sits half a pixel off the centre.
        let (sx, sy) = r.source_point(src, out, out.width / 2, out.height / 2);
        assert!((sx - 50.0).abs() < 1.0 && (sy - 30.0).abs() < 1.0, "{sx},{sy}");
    }
}
