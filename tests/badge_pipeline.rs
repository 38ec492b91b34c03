//! End-to-end tests: photo → circular badge → print sheet.

#![cfg(feature = "raster")]

use badgelayout::crop::CropParameters;
use badgelayout::pack::{LayoutKind, LayoutSpec};
use badgelayout::raster::{
    self, Overlay, PLACEHOLDER_FILL, WHITE, apply_overlays, crop_circle, render_layout,
};
use badgelayout::units::Size;
use image::{DynamicImage, Rgb, RgbImage};

const TEAL: Rgb<u8> = Rgb([20, 150, 140]);

fn photo(w: u32, h: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, TEAL))
}

fn close(a: Rgb<u8>, b: Rgb<u8>) -> bool {
    (0..3).all(|c| a[c].abs_diff(b[c]) <= 1)
}

#[test]
fn default_crop_of_landscape_photo() {
    let badge = crop_circle(&photo(800, 600), &CropParameters::default(), 300).unwrap();
    assert_eq!(badge.dimensions(), (685, 685));
    for (x, y) in [(0, 0), (684, 0), (0, 684), (684, 684)] {
        assert_eq!(*badge.get_pixel(x, y), WHITE, "corner ({x},{y})");
    }
    assert_eq!(*badge.get_pixel(342, 342), TEAL);
    // 600px tall source under a 685px circle: white bands top and bottom.
    assert_eq!(*badge.get_pixel(342, 0), WHITE);
    assert_eq!(*badge.get_pixel(342, 684), WHITE);
    // Full width is covered.
    assert_eq!(*badge.get_pixel(0, 342), TEAL);
}

#[test]
fn auto_fit_fills_the_circle() {
    let params = CropParameters::auto_fit(Size::new(800, 600), 58.0, 300).unwrap();
    let badge = crop_circle(&photo(800, 600), &params, 300).unwrap();
    assert_eq!(badge.dimensions(), (685, 685));
    for (x, y) in [(342, 0), (342, 684), (0, 342), (684, 342), (342, 342)] {
        let p = *badge.get_pixel(x, y);
        assert!(close(p, TEAL), "({x},{y}) = {p:?}");
    }
    assert_eq!(*badge.get_pixel(0, 0), WHITE);
}

#[test]
fn rotated_and_offset_crop_stays_square() {
    let params = CropParameters::new(58.0)
        .scale(0.75)
        .offset(120, -80)
        .rotation(30.0);
    let badge = crop_circle(&photo(1200, 900), &params, 300).unwrap();
    assert_eq!(badge.dimensions(), (685, 685));
    assert_eq!(*badge.get_pixel(0, 0), WHITE);
}

#[test]
fn sheet_of_badges_and_placeholders() {
    let params = CropParameters::default();
    let badges: Vec<RgbImage> = (0..3)
        .map(|_| crop_circle(&photo(800, 600), &params, 300).unwrap())
        .collect();

    let spec = LayoutSpec::new(58.0);
    let plan = spec.plan(300).unwrap();
    let sheet = render_layout(&spec, 300, &badges).unwrap();
    assert_eq!(sheet.dimensions(), (2480, 3507));
    assert_eq!(plan.max_count(), 12);

    for (i, p) in plan.positions.iter().enumerate() {
        let px = *sheet.get_pixel(p.x as u32, p.y as u32);
        if i < badges.len() {
            assert_eq!(px, TEAL, "slot {i}");
        } else {
            assert_eq!(px, PLACEHOLDER_FILL, "slot {i}");
        }
    }
}

#[test]
fn empty_sheet_is_all_placeholders() {
    for kind in [LayoutKind::Grid, LayoutKind::Hex] {
        let spec = LayoutSpec::new(58.0).kind(kind);
        let plan = spec.plan(300).unwrap();
        let sheet = render_layout(&spec, 300, &[]).unwrap();
        for p in &plan.positions {
            assert_eq!(*sheet.get_pixel(p.x as u32, p.y as u32), PLACEHOLDER_FILL);
        }
    }
}

#[test]
fn unit_float_buffers_in_and_out() {
    let (w, h) = (64, 48);
    let data: Vec<f32> = (0..w * h).flat_map(|_| [0.5, 0.25, 1.0, 1.0]).collect();
    let src = raster::from_unit_f32(w, h, 4, &data).unwrap();

    // 5mm at 254dpi is 50px.
    let badge = crop_circle(&src, &CropParameters::new(5.0), 254).unwrap();
    assert_eq!(badge.dimensions(), (50, 50));
    assert_eq!(*badge.get_pixel(25, 25), Rgb([127, 63, 255]));

    let out = raster::to_unit_f32(&badge);
    assert_eq!(out.len(), 50 * 50 * 3);
    assert_eq!(out[0..3], [1.0, 1.0, 1.0]);
}

#[test]
fn overlays_on_a_finished_badge() {
    let badge = crop_circle(&photo(800, 600), &CropParameters::default(), 300).unwrap();
    let preview = apply_overlays(
        &badge,
        &[Overlay::BoundaryRing, Overlay::safe_area(), Overlay::Crosshair { half_len: 20 }],
    )
    .unwrap();
    assert_eq!(preview.dimensions(), badge.dimensions());
    assert_eq!(*preview.get_pixel(342, 342), raster::CENTER_COLOR);
    assert_eq!(*preview.get_pixel(0, 342), raster::BOUNDARY_COLOR);
    assert_eq!(*badge.get_pixel(342, 342), TEAL);
}
