//! Minimal clipped drawing primitives for guides and placeholders.

use image::{Rgb, RgbImage};

use crate::crop::in_circle;

/// Set a pixel if it lies on the image.
fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && x < img.width() as i64 && y < img.height() as i64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Outline the rectangle with inclusive corners `(x0, y0)`–`(x1, y1)`,
/// `width` pixels thick, growing inward.
pub(crate) fn stroke_rect(
    img: &mut RgbImage,
    (x0, y0): (i64, i64),
    (x1, y1): (i64, i64),
    width: u32,
    color: Rgb<u8>,
) {
    for i in 0..width as i64 {
        let (l, t, r, b) = (x0 + i, y0 + i, x1 - i, y1 - i);
        if l > r || t > b {
            break;
        }
        for x in l..=r {
            put(img, x, t, color);
            put(img, x, b, color);
        }
        for y in t..=b {
            put(img, l, y, color);
            put(img, r, y, color);
        }
    }
}

/// Fill the inscribed disc of the `diameter`-sided square at `origin`.
///
/// Uses the same pixel-centre test as the crop mask, so a placeholder covers
/// exactly the pixels a cropped badge would.
pub(crate) fn fill_disc(img: &mut RgbImage, origin: (i64, i64), diameter: u32, color: Rgb<u8>) {
    for j in 0..diameter {
        for i in 0..diameter {
            if in_circle(diameter, i, j) {
                put(img, origin.0 + i as i64, origin.1 + j as i64, color);
            }
        }
    }
}

/// One-pixel outline of the inscribed disc: disc pixels with a 4-neighbour
/// outside the disc.
pub(crate) fn outline_disc(img: &mut RgbImage, origin: (i64, i64), diameter: u32, color: Rgb<u8>) {
    let inside = |i: i64, j: i64| {
        i >= 0
            && j >= 0
            && i < diameter as i64
            && j < diameter as i64
            && in_circle(diameter, i as u32, j as u32)
    };
    for j in 0..diameter as i64 {
        for i in 0..diameter as i64 {
            if inside(i, j)
                && !(inside(i - 1, j) && inside(i + 1, j) && inside(i, j - 1) && inside(i, j + 1))
            {
                put(img, origin.0 + i, origin.1 + j, color);
            }
        }
    }
}

/// Ring of pixels whose centres lie within `width / 2` of the circle of
/// `radius` around `(cx, cy)`.
pub(crate) fn stroke_ring(
    img: &mut RgbImage,
    (cx, cy): (f64, f64),
    radius: f64,
    width: f64,
    color: Rgb<u8>,
) {
    let half = width / 2.0;
    let reach = radius + half;
    let x0 = (cx - reach).floor().max(0.0) as u32;
    let y0 = (cy - reach).floor().max(0.0) as u32;
    let x1 = ((cx + reach).ceil() as i64).min(img.width() as i64);
    let y1 = ((cy + reach).ceil() as i64).min(img.height() as i64);
    for y in y0 as i64..y1 {
        for x in x0 as i64..x1 {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if ((dx * dx + dy * dy).sqrt() - radius).abs() <= half {
                put(img, x, y, color);
            }
        }
    }
}

/// Horizontal line at row `y` from `x0` to `x1` inclusive.
pub(crate) fn hline(img: &mut RgbImage, y: i64, x0: i64, x1: i64, color: Rgb<u8>) {
    for x in x0..=x1 {
        put(img, x, y, color);
    }
}

/// Vertical line at column `x` from `y0` to `y1` inclusive.
pub(crate) fn vline(img: &mut RgbImage, x: i64, y0: i64, y1: i64, color: Rgb<u8>) {
    for y in y0..=y1 {
        put(img, x, y, color);
    }
}
