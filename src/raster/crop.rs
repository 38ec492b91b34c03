//! Circular crop pipeline: normalise → rotate → scale → place → mask.
//!
//! Stage order is fixed; each stage consumes the previous stage's output and
//! the caller's source is never modified.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use super::WHITE;
use super::normalize::to_rgb;
use crate::crop::{CropGeometry, CropParameters, in_circle, scaled_size};
use crate::error::BadgeError;
use crate::log::{debug, trace};
use crate::rotation::{QuarterTurn, Rotation};
use crate::units::{Size, diameter_px};

/// Resampling filter for every resize in the crate.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Crop `source` to a white-backed circular badge.
///
/// The result is exactly `d × d` where `d` is the diameter at `dpi`. Pixels
/// inside the inscribed circle show the rotated, scaled, offset source (or
/// white where the source does not reach); everything outside is white.
pub fn crop_circle(
    source: &DynamicImage,
    params: &CropParameters,
    dpi: i32,
) -> Result<RgbImage, BadgeError> {
    params.validate()?;
    let diameter = diameter_px(params.diameter_mm, dpi)?;
    let rgb = to_rgb(source)?;
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(BadgeError::invalid("source", "has a zero dimension"));
    }
    debug!(
        width = rgb.width(),
        height = rgb.height(),
        diameter,
        scale = params.scale,
        rotation = params.rotation_degrees,
        "circular crop"
    );

    let rotation = Rotation::from_degrees(params.rotation_degrees)?;
    let working = if rotation.is_identity() {
        rgb
    } else {
        rotate(&rgb, rotation)
    };

    let working = if params.scale == 1.0 {
        working
    } else {
        scale(&working, params.scale)?
    };

    let geo = CropGeometry::compute(params, dpi, Size::new(working.width(), working.height()))?;
    trace!(paste_x = geo.paste.0, paste_y = geo.paste.1, "paste offset");

    debug_assert_eq!(geo.diameter, diameter);
    let mut canvas = RgbImage::from_pixel(diameter, diameter, WHITE);
    imageops::replace(&mut canvas, &working, geo.paste.0, geo.paste.1);
    apply_circle_mask(&mut canvas);
    Ok(canvas)
}

/// Rotate counter-clockwise about the centre onto an expanded white canvas.
///
/// Quarter turns are exact transposes. Other angles sample the nearest
/// source pixel at each output pixel centre.
pub fn rotate(image: &RgbImage, rotation: Rotation) -> RgbImage {
    match rotation {
        Rotation::Identity => image.clone(),
        // imageops turns clockwise.
        Rotation::Quarter(QuarterTurn::Ccw90) => imageops::rotate270(image),
        Rotation::Quarter(QuarterTurn::Ccw180) => imageops::rotate180(image),
        Rotation::Quarter(QuarterTurn::Ccw270) => imageops::rotate90(image),
        Rotation::Free { .. } => {
            let src = Size::new(image.width(), image.height());
            let out = rotation.output_size(src.width, src.height);
            RgbImage::from_fn(out.width, out.height, |x, y| {
                let (sx, sy) = rotation.source_point(src, out, x, y);
                if sx >= 0.0 && sy >= 0.0 && sx < src.width as f64 && sy < src.height as f64 {
                    *image.get_pixel(sx as u32, sy as u32)
                } else {
                    WHITE
                }
            })
        }
    }
}

/// Uniformly rescale to `round(w·s) × round(h·s)`.
pub fn scale(image: &RgbImage, factor: f64) -> Result<RgbImage, BadgeError> {
    let to = scaled_size(Size::new(image.width(), image.height()), factor)?;
    Ok(imageops::resize(image, to.width, to.height, RESAMPLE_FILTER))
}

/// Paint white every pixel outside the square's inscribed circle.
///
/// The image must be square; its width is taken as the diameter.
pub(crate) fn apply_circle_mask(canvas: &mut RgbImage) {
    let d = canvas.width();
    for (x, y, px) in canvas.enumerate_pixels_mut() {
        if !in_circle(d, x, y) {
            *px = WHITE;
        }
    }
}
