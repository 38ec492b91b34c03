//! Editing guides drawn over a cropped badge.
//!
//! These mark where the circle edge falls, what stays visible once the badge
//! is pressed, and where the centre is. They are for previews only and are
//! never part of a print sheet.

use image::{Rgb, RgbImage};

use super::draw::{hline, stroke_ring, vline};
use crate::error::BadgeError;

/// Circle edge.
pub const BOUNDARY_COLOR: Rgb<u8> = Rgb([255, 68, 68]);
/// Safe area ring and centre crosshair.
pub const CENTER_COLOR: Rgb<u8> = Rgb([68, 255, 68]);
/// Composition grid.
pub const GUIDE_LINE_COLOR: Rgb<u8> = Rgb([200, 200, 200]);

/// Safe area as a fraction of the radius when none is given.
pub const DEFAULT_SAFE_FRACTION: f64 = 0.9;

const RING_WIDTH: f64 = 2.0;

/// One guide to draw.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Overlay {
    /// Red ring just inside the crop edge.
    BoundaryRing,
    /// Green ring at `fraction` of the radius, `0 < fraction <= 1`.
    SafeArea { fraction: f64 },
    /// Green cross through the centre, `half_len` pixels each way.
    Crosshair { half_len: u32 },
    /// Lines dividing the image into `divisions × divisions` cells.
    GridLines { divisions: u32 },
}

impl Overlay {
    /// Safe area at [`DEFAULT_SAFE_FRACTION`].
    pub const fn safe_area() -> Self {
        Self::SafeArea {
            fraction: DEFAULT_SAFE_FRACTION,
        }
    }

    fn validate(&self) -> Result<(), BadgeError> {
        match *self {
            Self::SafeArea { fraction } if !(fraction > 0.0 && fraction <= 1.0) => Err(
                BadgeError::invalid("fraction", "must be in (0, 1]"),
            ),
            Self::GridLines { divisions: 0 } => {
                Err(BadgeError::invalid("divisions", "must be at least 1"))
            }
            _ => Ok(()),
        }
    }

    fn draw(&self, img: &mut RgbImage) {
        match *self {
            Self::BoundaryRing => draw_boundary_ring(img),
            Self::SafeArea { fraction } => draw_safe_area(img, fraction),
            Self::Crosshair { half_len } => draw_crosshair(img, half_len),
            Self::GridLines { divisions } => draw_grid_lines(img, divisions),
        }
    }
}

/// Draw `overlays` in order on a copy of `image`.
///
/// All overlays are checked before anything is drawn.
pub fn apply_overlays(image: &RgbImage, overlays: &[Overlay]) -> Result<RgbImage, BadgeError> {
    for overlay in overlays {
        overlay.validate()?;
    }
    let mut out = image.clone();
    for overlay in overlays {
        overlay.draw(&mut out);
    }
    Ok(out)
}

fn centre_and_radius(img: &RgbImage) -> ((f64, f64), f64) {
    let (w, h) = img.dimensions();
    ((w as f64 / 2.0, h as f64 / 2.0), w.min(h) as f64 / 2.0)
}

/// Ring on the inside of the inscribed circle's edge.
pub fn draw_boundary_ring(img: &mut RgbImage) {
    let (centre, r) = centre_and_radius(img);
    stroke_ring(img, centre, r - RING_WIDTH / 2.0, RING_WIDTH, BOUNDARY_COLOR);
}

/// Ring at `fraction` of the radius. `fraction` is clamped to `0..=1`.
pub fn draw_safe_area(img: &mut RgbImage, fraction: f64) {
    let (centre, r) = centre_and_radius(img);
    let fraction = if fraction.is_nan() {
        DEFAULT_SAFE_FRACTION
    } else {
        fraction.clamp(0.0, 1.0)
    };
    stroke_ring(img, centre, r * fraction, RING_WIDTH, CENTER_COLOR);
}

/// One-pixel cross at the centre pixel.
pub fn draw_crosshair(img: &mut RgbImage, half_len: u32) {
    let cx = (img.width() / 2) as i64;
    let cy = (img.height() / 2) as i64;
    let len = half_len as i64;
    hline(img, cy, cx - len, cx + len, CENTER_COLOR);
    vline(img, cx, cy - len, cy + len, CENTER_COLOR);
}

/// Full-height and full-width lines at every `k / divisions` of each side.
pub fn draw_grid_lines(img: &mut RgbImage, divisions: u32) {
    let (w, h) = img.dimensions();
    let n = divisions.max(1) as u64;
    for k in 1..n {
        let x = (w as u64 * k / n) as i64;
        let y = (h as u64 * k / n) as i64;
        vline(img, x, 0, h as i64 - 1, GUIDE_LINE_COLOR);
        hline(img, y, 0, w as i64 - 1, GUIDE_LINE_COLOR);
    }
}
