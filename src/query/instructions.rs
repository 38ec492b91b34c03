//! Parsed representation of a badge query string.

use core::ops::RangeInclusive;

use crate::crop::{CropParameters, DEFAULT_DIAMETER_MM};
use crate::pack::{DEFAULT_MARGIN_MM, DEFAULT_SPACING_MM, LayoutKind, LayoutSpec};

/// Output resolution when none is given.
pub const DEFAULT_DPI: i32 = 300;

/// Accepted badge diameters in millimetres.
pub const DIAMETER_MM_RANGE: RangeInclusive<f64> = 10.0..=200.0;
/// Accepted scale factors.
pub const SCALE_RANGE: RangeInclusive<f64> = 0.1..=5.0;
/// Accepted pixel offsets on either axis.
pub const OFFSET_RANGE: RangeInclusive<i32> = -1000..=1000;
/// Accepted rotations in degrees.
pub const ROTATION_RANGE: RangeInclusive<f64> = 0.0..=360.0;
/// Accepted resolutions.
pub const DPI_RANGE: RangeInclusive<i32> = 72..=600;
/// Accepted circle spacing in millimetres.
pub const SPACING_MM_RANGE: RangeInclusive<f64> = 0.0..=20.0;
/// Accepted page margins in millimetres.
pub const MARGIN_MM_RANGE: RangeInclusive<f64> = 0.0..=50.0;

/// Parsed badge instructions.
///
/// Every field is `None` until its key appears. Values are already clamped
/// to their ranges. Produced by [`crate::query::parse()`].
#[derive(Debug, Clone, PartialEq, Default)]
#[non_exhaustive]
pub struct Instructions {
    /// Circle diameter (`diameter`, `d`).
    pub diameter_mm: Option<f64>,
    /// Uniform scale (`scale`).
    pub scale: Option<f64>,
    /// Horizontal offset in pixels (`x`, `offset_x`).
    pub offset_x: Option<i32>,
    /// Vertical offset in pixels (`y`, `offset_y`).
    pub offset_y: Option<i32>,
    /// Counter-clockwise rotation in degrees (`rotate`, `rotation`).
    pub rotation_degrees: Option<f64>,
    /// Output resolution (`dpi`).
    pub dpi: Option<i32>,
    /// Sheet lattice (`layout`).
    pub layout: Option<LayoutKind>,
    /// Gap between circles (`spacing`).
    pub spacing_mm: Option<f64>,
    /// Page margin (`margin`).
    pub margin_mm: Option<f64>,
}

impl Instructions {
    /// Create empty instructions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolution, defaulting to [`DEFAULT_DPI`].
    pub fn dpi(&self) -> i32 {
        self.dpi.unwrap_or(DEFAULT_DPI)
    }

    /// Crop parameters with defaults for every missing key.
    pub fn crop_parameters(&self) -> CropParameters {
        let d = CropParameters::default();
        CropParameters::new(self.diameter_mm.unwrap_or(DEFAULT_DIAMETER_MM))
            .scale(self.scale.unwrap_or(d.scale))
            .offset(
                self.offset_x.unwrap_or(d.offset_x),
                self.offset_y.unwrap_or(d.offset_y),
            )
            .rotation(self.rotation_degrees.unwrap_or(d.rotation_degrees))
    }

    /// Sheet layout on A4 with defaults for every missing key.
    pub fn layout_spec(&self) -> LayoutSpec {
        LayoutSpec::new(self.diameter_mm.unwrap_or(DEFAULT_DIAMETER_MM))
            .kind(self.layout.unwrap_or_default())
            .spacing_mm(self.spacing_mm.unwrap_or(DEFAULT_SPACING_MM))
            .margin_mm(self.margin_mm.unwrap_or(DEFAULT_MARGIN_MM))
    }
}
