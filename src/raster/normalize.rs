//! Pixel format normalisation and raw buffer ingestion.
//!
//! The core works on opaque 8-bit RGB. Hosts hand over whatever they hold
//! (byte buffers, unit-range float tensors, decoded images); these helpers
//! get it into an [`RgbImage`] or reject it.

use image::{DynamicImage, RgbImage, RgbaImage};

use crate::error::BadgeError;

/// Flatten a 3- or 4-channel image to opaque RGB.
///
/// Alpha is dropped, not blended: a 4-channel input is taken to be
/// pre-multiplied against white already. 1- and 2-channel images are
/// rejected.
pub fn to_rgb(source: &DynamicImage) -> Result<RgbImage, BadgeError> {
    match source.color().channel_count() {
        3 | 4 => Ok(source.to_rgb8()),
        channels => Err(BadgeError::UnsupportedFormat { channels }),
    }
}

/// Wrap an interleaved 8-bit buffer of `channels` (3 or 4) per pixel.
pub fn from_raw_u8(
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
) -> Result<DynamicImage, BadgeError> {
    check_len(width, height, channels, data.len())?;
    let image = match channels {
        3 => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        _ => RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
    };
    image.ok_or(BadgeError::invalid("data", "does not fit width × height"))
}

/// Convert a unit-range float buffer (`0.0..=1.0` per channel) to 8 bits.
///
/// Each value becomes `trunc(clamp(v · 255, 0, 255))`; NaN maps to 0.
pub fn from_unit_f32(
    width: u32,
    height: u32,
    channels: u8,
    data: &[f32],
) -> Result<DynamicImage, BadgeError> {
    check_len(width, height, channels, data.len())?;
    let bytes = data
        .iter()
        .map(|&v| (v * 255.0).clamp(0.0, 255.0) as u8)
        .collect();
    from_raw_u8(width, height, channels, bytes)
}

/// Convert an RGB image back to interleaved unit-range floats.
pub fn to_unit_f32(image: &RgbImage) -> Vec<f32> {
    image.as_raw().iter().map(|&b| b as f32 / 255.0).collect()
}

fn check_len(width: u32, height: u32, channels: u8, len: usize) -> Result<(), BadgeError> {
    if !matches!(channels, 3 | 4) {
        return Err(BadgeError::UnsupportedFormat { channels });
    }
    let expected = width as u64 * height as u64 * channels as u64;
    if expected != len as u64 {
        return Err(BadgeError::invalid(
            "data",
            "length must be width × height × channels",
        ));
    }
    Ok(())
}
