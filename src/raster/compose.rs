//! Sheet compositing: cropped badges onto a page at planned positions.

use image::imageops;
use image::{Rgb, RgbImage};

use super::WHITE;
use super::crop::RESAMPLE_FILTER;
use super::draw::{fill_disc, outline_disc, stroke_rect};
use crate::error::BadgeError;
use crate::log::debug;
use crate::pack::{LayoutSpec, PlacementPlan};

/// Margin guide and placeholder outline colour.
pub const GUIDE_COLOR: Rgb<u8> = Rgb([200, 200, 200]);
/// Fill of an empty slot.
pub const PLACEHOLDER_FILL: Rgb<u8> = Rgb([220, 220, 220]);

const GUIDE_WIDTH: u32 = 2;

/// Paste `items` into the slots of `plan` on a copy of `page`.
///
/// Slot `i` receives `items[i]`, resized to `diameter × diameter` when it is
/// any other size. Slots past the end of `items` get a grey placeholder
/// disc; items past the end of the plan are ignored. A 2 px guide marks the
/// margin box.
pub fn composite(page: &RgbImage, plan: &PlacementPlan, items: &[RgbImage]) -> RgbImage {
    let mut out = page.clone();
    let m = plan.margin as i64;
    let (w, h) = (out.width() as i64, out.height() as i64);
    stroke_rect(&mut out, (m, m), (w - m, h - m), GUIDE_WIDTH, GUIDE_COLOR);

    let d = plan.diameter;
    for i in 0..plan.max_count() {
        let Some(origin) = plan.slot_origin(i) else {
            break;
        };
        match items.get(i) {
            Some(item) if item.dimensions() == (d, d) => {
                imageops::replace(&mut out, item, origin.0, origin.1);
            }
            Some(item) => {
                let fitted = imageops::resize(item, d, d, RESAMPLE_FILTER);
                imageops::replace(&mut out, &fitted, origin.0, origin.1);
            }
            None => {
                fill_disc(&mut out, origin, d, PLACEHOLDER_FILL);
                outline_disc(&mut out, origin, d, GUIDE_COLOR);
            }
        }
    }

    if items.len() > plan.max_count() {
        debug!(
            dropped = items.len() - plan.max_count(),
            "more items than slots"
        );
    }
    out
}

/// Lay `items` out on a blank white page described by `spec` at `dpi`.
///
/// An empty `items` slice is allowed and yields a sheet of placeholders.
pub fn render_layout(
    spec: &LayoutSpec,
    dpi: i32,
    items: &[RgbImage],
) -> Result<RgbImage, BadgeError> {
    let plan = spec.plan(dpi)?;
    if items.is_empty() {
        debug!(slots = plan.max_count(), "no items, rendering placeholders");
    }
    debug!(
        kind = plan.kind.name(),
        slots = plan.max_count(),
        items = items.len(),
        "render layout"
    );
    let page = RgbImage::from_pixel(plan.page.width, plan.page.height, WHITE);
    Ok(composite(&page, &plan, items))
}
