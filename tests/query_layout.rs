//! Query string → crop parameters and sheet plans.

#![cfg(feature = "query")]

use badgelayout::crop::CropGeometry;
use badgelayout::pack::LayoutKind;
use badgelayout::query::{self, ParseWarning};
use badgelayout::units::Size;

#[test]
fn empty_query_gives_defaults() {
    let result = query::parse("");
    assert!(result.warnings.is_empty());
    let inst = result.instructions;
    assert_eq!(inst.dpi(), 300);

    let crop = inst.crop_parameters();
    assert_eq!(crop.diameter_mm, 58.0);
    assert_eq!(crop.scale, 1.0);
    assert_eq!((crop.offset_x, crop.offset_y), (0, 0));
    assert_eq!(crop.rotation_degrees, 0.0);

    let spec = inst.layout_spec();
    assert_eq!(spec.kind, LayoutKind::Grid);
    assert_eq!(spec.spacing_mm, 5.0);
    assert_eq!(spec.margin_mm, 10.0);
}

#[test]
fn default_query_plans_twelve_grid_slots() {
    let inst = query::parse("?diameter=58&dpi=300").instructions;
    let plan = inst.layout_spec().plan(inst.dpi()).unwrap();
    assert_eq!(plan.max_count(), 12);
    assert_eq!(plan.diameter, 685);
}

#[test]
fn hex_query_packs_more_small_badges() {
    let grid = query::parse("d=25&spacing=0&margin=0&layout=grid").instructions;
    let hex = query::parse("d=25&spacing=0&margin=0&layout=compact").instructions;
    let g = grid.layout_spec().plan(grid.dpi()).unwrap();
    let h = hex.layout_spec().plan(hex.dpi()).unwrap();
    assert_eq!(h.kind, LayoutKind::Hex);
    assert_eq!((g.max_count(), h.max_count()), (88, 99));
}

#[test]
fn crop_parameters_flow_into_geometry() {
    let inst = query::parse("d=32&x=15&y=-5&scale=2").instructions;
    let params = inst.crop_parameters();
    // 32mm at 300dpi truncates to 377px.
    let geo = CropGeometry::compute(&params, inst.dpi(), Size::new(200, 100)).unwrap();
    assert_eq!(geo.diameter, 377);
    assert_eq!(geo.paste, (188 - 100 + 15, 188 - 50 - 5));
}

#[test]
fn clamped_values_still_plan() {
    let result = query::parse("d=0.5&spacing=100&margin=90&dpi=10000");
    assert_eq!(result.warnings.len(), 4);
    assert!(
        result
            .warnings
            .iter()
            .all(|w| matches!(w, ParseWarning::ValueOutOfRange { .. }))
    );
    let inst = result.instructions;
    assert_eq!(inst.dpi(), 600);
    let plan = inst.layout_spec().plan(inst.dpi()).unwrap();
    assert!(plan.max_count() >= 1);
}

#[cfg(feature = "raster")]
#[test]
fn query_drives_pixel_crop() {
    use badgelayout::raster::crop_circle;
    use image::{DynamicImage, RgbImage};

    let inst = query::parse("d=10&dpi=254&rotate=90").instructions;
    let src = DynamicImage::ImageRgb8(RgbImage::new(300, 120));
    let badge = crop_circle(&src, &inst.crop_parameters(), inst.dpi()).unwrap();
    assert_eq!(badge.dimensions(), (100, 100));
}
