//! Circle packing on a margin-bounded page.
//!
//! Two lattices are offered:
//!
//! - [`pack_grid`]: axis-aligned rows and columns, centred on the page,
//!   enumerated row-major.
//! - [`pack_hex`]: honeycomb columns, odd columns shifted down by half a
//!   vertical step, enumerated column-major. Denser for most badge sizes.
//!
//! The enumeration order is part of the contract: callers zip positions
//! against an ordered list of images.
//!
//! # Example
//!
//! ```
//! use badgelayout::pack::{LayoutKind, LayoutSpec};
//!
//! let plan = LayoutSpec::new(25.0)
//!     .kind(LayoutKind::Hex)
//!     .spacing_mm(0.0)
//!     .margin_mm(10.0)
//!     .plan(300)
//!     .unwrap();
//!
//! assert_eq!(plan.diameter, 295);
//! assert_eq!(plan.max_count(), 84);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use num_traits::Float;

use crate::crop::DEFAULT_DIAMETER_MM;
use crate::error::BadgeError;
use crate::log::debug;
use crate::units::{Page, Size, diameter_px, mm_to_px};

/// Default gap between neighbouring circles, in millimetres.
pub const DEFAULT_SPACING_MM: f64 = 5.0;
/// Default empty border on every page edge, in millimetres.
pub const DEFAULT_MARGIN_MM: f64 = 10.0;

/// Which lattice to pack with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Rectangular rows × columns.
    #[default]
    Grid,
    /// Honeycomb (offset columns).
    Hex,
}

impl LayoutKind {
    /// Lowercase name, as used in query strings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Hex => "hex",
        }
    }
}

/// A circle centre in page pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal position, pixels from the left edge.
    pub x: i32,
    /// Vertical position, pixels from the top edge.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }
}

/// Rows × columns of a grid plan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
}

/// Packing inputs, already in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PackParams {
    /// Page size.
    pub page: Size,
    /// Circle diameter. Must be at least 1.
    pub diameter: u32,
    /// Gap between neighbouring circle boundaries.
    pub spacing: u32,
    /// Empty border kept on all four sides.
    pub margin: u32,
}

impl PackParams {
    /// Create packing parameters.
    pub const fn new(page: Size, diameter: u32, spacing: u32, margin: u32) -> Self {
        Self {
            page,
            diameter,
            spacing,
            margin,
        }
    }

    /// `diameter / 2`, floored.
    pub const fn radius(&self) -> u32 {
        self.diameter / 2
    }

    fn validate(&self) -> Result<(), BadgeError> {
        if self.diameter == 0 {
            return Err(BadgeError::invalid("diameter", "must be at least one pixel"));
        }
        if self.page.is_empty() {
            return Err(BadgeError::invalid("page", "has a zero dimension"));
        }
        Ok(())
    }
}

/// Ordered circle centres for one page, all of one diameter.
///
/// Computed fresh per request and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlacementPlan {
    /// Lattice that produced the plan.
    pub kind: LayoutKind,
    /// Circle diameter in pixels.
    pub diameter: u32,
    /// `diameter / 2`, floored.
    pub radius: u32,
    /// Circle centres, in slot order.
    pub positions: Vec<Point>,
    /// Rows × columns, for grid plans.
    pub grid: Option<GridShape>,
    /// Page the plan was computed for.
    pub page: Size,
    /// Margin the plan respects.
    pub margin: u32,
}

impl PlacementPlan {
    /// Number of slots.
    pub fn max_count(&self) -> usize {
        self.positions.len()
    }

    /// Whether the plan has no slots.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Top-left corner of the `diameter`-sided square around slot `i`.
    pub fn slot_origin(&self, i: usize) -> Option<(i64, i64)> {
        self.positions
            .get(i)
            .map(|p| (p.x as i64 - self.radius as i64, p.y as i64 - self.radius as i64))
    }
}

/// Rectangular lattice, centred in the margin box, row-major.
///
/// At least one slot is always offered. When the margin box is narrower
/// than `diameter + spacing` that lone slot may cross the margin; this
/// matches how the sheet has always been laid out and is left as is.
pub fn pack_grid(params: &PackParams) -> Result<PlacementPlan, BadgeError> {
    params.validate()?;
    let margin = params.margin as f64;
    let radius = params.radius() as f64;
    let avail_w = params.page.width as f64 - 2.0 * margin;
    let avail_h = params.page.height as f64 - 2.0 * margin;
    // Summed in f64: spacing may be anywhere up to u32::MAX.
    let step = params.diameter as f64 + params.spacing as f64;

    let cols = Float::floor(avail_w / step).max(1.0) as u32;
    let rows = Float::floor(avail_h / step).max(1.0) as u32;

    let start_x = margin + (avail_w - cols as f64 * step) / 2.0;
    let start_y = margin + (avail_h - rows as f64 * step) / 2.0;

    let mut positions = Vec::with_capacity(rows as usize * cols as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = start_x + col as f64 * step + radius;
            let y = start_y + row as f64 * step + radius;
            positions.push(Point::new(x as i32, y as i32));
        }
    }

    debug!(rows, cols, diameter = params.diameter, "grid layout");
    Ok(PlacementPlan {
        kind: LayoutKind::Grid,
        diameter: params.diameter,
        radius: params.radius(),
        positions,
        grid: Some(GridShape { rows, cols }),
        page: params.page,
        margin: params.margin,
    })
}

/// Honeycomb lattice of offset columns, column-major.
///
/// Columns sit `d·√3/2 + spacing` apart so neighbouring columns nest at 60°.
/// Within a column circles are `max(h·√3/2, d + spacing)` apart, and odd
/// columns start half that step lower. Columns that would cross the margin
/// are dropped whole; the slot count is whatever fits, possibly zero.
pub fn pack_hex(params: &PackParams) -> Result<PlacementPlan, BadgeError> {
    params.validate()?;
    let sqrt3_2 = Float::sqrt(3.0_f64) / 2.0;
    let margin = params.margin as f64;
    let radius = params.radius() as f64;
    let page_w = params.page.width as f64;
    let page_h = params.page.height as f64;
    let avail_w = page_w - 2.0 * margin;
    let diameter = params.diameter as f64;
    let spacing = params.spacing as f64;

    let h_spacing = diameter * sqrt3_2 + spacing;
    let max_cols = Float::floor((avail_w + h_spacing) / h_spacing).max(1.0) as u32;
    let v_spacing = (h_spacing * sqrt3_2).max(diameter + spacing);
    let stagger = v_spacing / 2.0;

    let mut positions = Vec::new();
    for col in 0..max_cols {
        let x = margin + radius + col as f64 * h_spacing;
        if x - radius < margin || x + radius > page_w - margin {
            continue;
        }
        let mut y = if col % 2 == 0 {
            margin + radius
        } else {
            margin + radius + stagger
        };
        while y + radius <= page_h - margin {
            positions.push(Point::new(x as i32, y as i32));
            y += v_spacing;
        }
    }

    debug!(max_cols, count = positions.len(), diameter = params.diameter, "hex layout");
    Ok(PlacementPlan {
        kind: LayoutKind::Hex,
        diameter: params.diameter,
        radius: params.radius(),
        positions,
        grid: None,
        page: params.page,
        margin: params.margin,
    })
}

/// Pack with the chosen lattice.
pub fn pack(params: &PackParams, kind: LayoutKind) -> Result<PlacementPlan, BadgeError> {
    match kind {
        LayoutKind::Grid => pack_grid(params),
        LayoutKind::Hex => pack_hex(params),
    }
}

/// A sheet layout request in physical units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutSpec {
    /// Circle diameter in millimetres.
    pub diameter_mm: f64,
    /// Gap between neighbouring circle boundaries in millimetres.
    pub spacing_mm: f64,
    /// Empty border on every edge in millimetres.
    pub margin_mm: f64,
    /// Lattice to use.
    pub kind: LayoutKind,
    /// Physical page. A4 unless changed.
    pub page: Page,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::new(DEFAULT_DIAMETER_MM)
    }
}

impl LayoutSpec {
    /// Grid layout on A4 with default spacing and margin.
    pub const fn new(diameter_mm: f64) -> Self {
        Self {
            diameter_mm,
            spacing_mm: DEFAULT_SPACING_MM,
            margin_mm: DEFAULT_MARGIN_MM,
            kind: LayoutKind::Grid,
            page: Page::A4,
        }
    }

    /// Set the lattice.
    pub fn kind(mut self, kind: LayoutKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the gap between circles.
    pub fn spacing_mm(mut self, spacing_mm: f64) -> Self {
        self.spacing_mm = spacing_mm;
        self
    }

    /// Set the page margin.
    pub fn margin_mm(mut self, margin_mm: f64) -> Self {
        self.margin_mm = margin_mm;
        self
    }

    /// Set the physical page.
    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    /// Convert every length to pixels at `dpi`.
    pub fn resolve(&self, dpi: i32) -> Result<PackParams, BadgeError> {
        if !(self.spacing_mm >= 0.0) {
            return Err(BadgeError::invalid("spacing_mm", "must be non-negative"));
        }
        if !(self.margin_mm >= 0.0) {
            return Err(BadgeError::invalid("margin_mm", "must be non-negative"));
        }
        Ok(PackParams {
            page: self.page.to_pixels(dpi)?,
            diameter: diameter_px(self.diameter_mm, dpi)?,
            spacing: mm_to_px(self.spacing_mm, dpi)?,
            margin: mm_to_px(self.margin_mm, dpi)?,
        })
    }

    /// Resolve at `dpi` and pack.
    pub fn plan(&self, dpi: i32) -> Result<PlacementPlan, BadgeError> {
        pack(&self.resolve(dpi)?, self.kind)
    }
}
