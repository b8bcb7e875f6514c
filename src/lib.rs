//! Notecover builds the printed cover for a pack of note cards.
//!
//! - Four photos are landscape-normalized, cover-scaled to a cell, and composed into a 2x2 PNG
//!   with an optional logo and a white separator cross ([`build_cover`]).
//! - The PNG can be placed twice on a letter-size SVG page as a back cover, with the wrapped
//!   title, a product description, and cut borders ([`render_sheet`]).
//!
//! [`run_raster`] and [`run_sheet`] wire those stages to files on disk.
#![forbid(unsafe_code)]

pub mod assets;
pub mod config;
mod foundation;
pub mod naming;
pub mod pipeline;
pub mod raster;
pub mod sheet;

pub use crate::assets::{EmbeddedResources, LOGO, MapResources, ResourceProvider};
pub use crate::config::{CoverConfig, LayoutConfig, SheetConfig};
pub use crate::foundation::core::{Anchor, PixelGrid, Point, Rect, Rgba8Premul, Size, Vec2};
pub use crate::foundation::error::{CoverError, CoverResult};
pub use crate::naming::{OutputNames, slugify};
pub use crate::pipeline::{
    CoverInputs, RasterJob, SheetJob, SheetOutputs, build_cover, run_raster, run_sheet,
};
pub use crate::sheet::render_sheet;
