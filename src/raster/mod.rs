//! Pixel operations: circular crop, sheet compositing, overlays, ingestion.
//!
//! Everything here works on 8-bit opaque RGB ([`image::RgbImage`]). Inputs
//! are borrowed and never modified; every function returns a freshly owned
//! image. Geometry comes from [`crate::crop`] and [`crate::pack`]; this
//! module only moves pixels.
//!
//! # Example
//!
//! ```
//! use badgelayout::crop::CropParameters;
//! use badgelayout::pack::LayoutSpec;
//! use badgelayout::raster::{crop_circle, render_layout};
//! use image::{DynamicImage, Rgb, RgbImage};
//!
//! let photo = DynamicImage::ImageRgb8(RgbImage::from_pixel(800, 600, Rgb([30, 90, 160])));
//! let badge = crop_circle(&photo, &CropParameters::new(58.0), 300).unwrap();
//! assert_eq!(badge.dimensions(), (685, 685));
//!
//! let sheet = render_layout(&LayoutSpec::new(58.0), 300, &[badge]).unwrap();
//! assert_eq!(sheet.dimensions(), (2480, 3507));
//! ```

mod compose;
mod crop;
mod draw;
mod normalize;
mod overlay;

use image::Rgb;

pub use compose::{GUIDE_COLOR, PLACEHOLDER_FILL, composite, render_layout};
pub use crop::{RESAMPLE_FILTER, crop_circle, rotate, scale};
pub use normalize::{from_raw_u8, from_unit_f32, to_rgb, to_unit_f32};
pub use overlay::{
    BOUNDARY_COLOR, CENTER_COLOR, DEFAULT_SAFE_FRACTION, GUIDE_LINE_COLOR, Overlay, apply_overlays,
    draw_boundary_ring, draw_crosshair, draw_grid_lines, draw_safe_area,
};

/// Background for pages, canvases and everything outside a circle.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
