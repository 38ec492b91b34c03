//! SVG preview of a sheet placement plan.
//!
//! Draws the page, the margin guide, and every slot as a numbered circle,
//! scaled down to a fixed panel. Useful for checking a layout before any
//! pixels are produced.
//!
//! # Example
//!
//! ```
//! use badgelayout::pack::{LayoutKind, LayoutSpec};
//! use badgelayout::svg::render_plan_svg;
//!
//! let plan = LayoutSpec::new(58.0).kind(LayoutKind::Hex).plan(300).unwrap();
//! let svg = render_plan_svg(&plan);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("hex"));
//! ```

#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::pack::PlacementPlan;
use crate::units::Size;

/// Maximum pixel width of the page panel.
const MAX_PANEL_W: f64 = 420.0;
/// Maximum pixel height of the page panel.
const MAX_PANEL_H: f64 = 594.0;
/// Horizontal margin around the panel.
const MARGIN_X: f64 = 30.0;
/// Top margin above the caption.
const MARGIN_TOP: f64 = 20.0;
/// Height of the caption text area above the panel.
const LABEL_H: f64 = 24.0;
/// Height of the annotation area below the panel.
const FOOTER_H: f64 = 30.0;
/// Slot numbers are dropped once circles get smaller than this on screen.
const MIN_NUMBERED_R: f64 = 7.0;

/// Render a complete SVG document showing `plan` on its page.
pub fn render_plan_svg(plan: &PlacementPlan) -> String {
    let (pw, ph, scale) = scale_to_fit(plan.page);
    let total_w = pw.max(MAX_PANEL_W) + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + ph + FOOTER_H;
    let center_x = total_w / 2.0;
    let panel_x = center_x - pw / 2.0;
    let panel_y = MARGIN_TOP + LABEL_H;

    let mut svg = String::with_capacity(1024 + plan.max_count() * 160);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .slot-number { font-size: 10px; fill: #2c6faa; }
  .page { fill: #fff; stroke: #999; stroke-width: 1; }
  .margin { fill: none; stroke: #c8c8c8; stroke-width: 1; stroke-dasharray: 4,2; }
  .slot { fill: #dcdcdc; stroke: #2c6faa; stroke-width: 1; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .slot-number { fill: #9cc7ee; }
    .page { fill: #2d2d2d; stroke: #555; }
    .margin { stroke: #666; }
    .slot { fill: #3d3d3d; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let label = format!(
        "{} layout  {} slot{}  d={}px",
        plan.kind.name(),
        plan.max_count(),
        if plan.max_count() == 1 { "" } else { "s" },
        plan.diameter
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&label)
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="page"/>"#,
        panel_x, panel_y, pw, ph
    ));
    svg.push('\n');

    let m = plan.margin as f64 * scale;
    if m > 0.0 && 2.0 * m < pw && 2.0 * m < ph {
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="margin"/>"#,
            panel_x + m,
            panel_y + m,
            pw - 2.0 * m,
            ph - 2.0 * m
        ));
        svg.push('\n');
    }

    let r = plan.radius as f64 * scale;
    for (i, p) in plan.positions.iter().enumerate() {
        let cx = panel_x + p.x as f64 * scale;
        let cy = panel_y + p.y as f64 * scale;
        svg.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" class="slot"/>"#,
            cx, cy, r
        ));
        svg.push('\n');
        if r >= MIN_NUMBERED_R {
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" class="slot-number" text-anchor="middle">{}</text>"#,
                cx,
                cy + 3.5,
                i + 1
            ));
            svg.push('\n');
        }
    }

    let annotation = format!(
        "page {}×{}px, margin {}px",
        plan.page.width, plan.page.height, plan.margin
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        panel_y + ph + 18.0,
        escape_xml(&annotation)
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Scale a Size to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(size: Size) -> (f64, f64, f64) {
    let w = size.width as f64;
    let h = size.height as f64;
    if w == 0.0 || h == 0.0 {
        return (MAX_PANEL_W, MAX_PANEL_H, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
