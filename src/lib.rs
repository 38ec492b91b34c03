//! Circular badge cropping and print-sheet packing.
//!
//! Turns arbitrary photos into circular badges of a physical diameter and
//! lays them out on a printable page, either on a rectangular grid or on a
//! denser honeycomb lattice.
//!
//! The geometry (`units`, `rotation`, `crop`, `pack`) is pure arithmetic and
//! `no_std` compatible; `pack` needs `alloc`. Pixel work lives behind the
//! `raster` feature and uses the `image` crate.
//!
//! # Modules
//!
//! - [`units`]: millimetre → pixel conversion, page sizes
//! - [`rotation`]: counter-clockwise rotation with canvas expansion
//! - [`crop`]: crop parameters, placement geometry, circle mask test
//! - [`pack`]: grid and hex slot planning
//! - `raster`: pixel pipeline: crop, composite, overlays (feature `raster`)
//! - `svg`: vector preview of a placement plan (feature `svg`)
//! - `query`: `key=value` parameter parsing with host ranges (feature `query`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod log;

pub mod crop;
pub mod error;
#[cfg(feature = "alloc")]
pub mod pack;
pub mod rotation;
pub mod units;

#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "raster")]
pub mod raster;
#[cfg(feature = "svg")]
pub mod svg;

pub use crop::{CropGeometry, CropParameters, optimal_scale};
pub use error::BadgeError;
#[cfg(feature = "alloc")]
pub use pack::{LayoutKind, LayoutSpec, PackParams, PlacementPlan, Point, pack_grid, pack_hex};
pub use rotation::Rotation;
pub use units::{Page, Size, mm_to_px};
