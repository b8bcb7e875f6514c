//! Fixed geometry of the cover raster and the printed sheet, as explicit values.
//!
//! The defaults reproduce the production layout: a 1560x1200 canvas split into four 780x600
//! cells, and a US-letter page at 96 units per inch holding two back-cover blocks.
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Anchor, Rgba8Premul, Size};
use crate::foundation::error::{CoverError, CoverResult};

/// Geometry of the composed cover raster.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Output canvas size in pixels.
    pub canvas: Size,
    /// Target cell every input image is scaled to cover.
    pub cell: Size,
    /// Top-left paste position of each of the four images, in input order.
    pub cell_anchors: [Anchor; 4],
    /// Top-left paste position of the logo overlay.
    pub logo_anchor: Anchor,
    /// Column of the vertical separator line.
    pub separator_x: u32,
    /// Row of the horizontal separator line.
    pub separator_y: u32,
    /// Separator colour as straight RGBA8.
    pub separator_rgba: [u8; 4],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(1560, 1200),
            cell: Size::new(780, 600),
            cell_anchors: [
                Anchor::new(0, 0),
                Anchor::new(781, 0),
                Anchor::new(0, 601),
                Anchor::new(781, 601),
            ],
            logo_anchor: Anchor::new(56, 900),
            separator_x: 780,
            separator_y: 600,
            separator_rgba: [255, 255, 255, 255],
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> CoverResult<()> {
        if self.canvas.is_empty() {
            return Err(CoverError::config("canvas width and height must be > 0"));
        }
        if self.cell.is_empty() {
            return Err(CoverError::config("cell width and height must be > 0"));
        }
        Ok(())
    }

    pub fn separator_color(&self) -> Rgba8Premul {
        let [r, g, b, a] = self.separator_rgba;
        Rgba8Premul::from_straight_rgba(r, g, b, a)
    }
}

/// Geometry of the printable back-cover page. Lengths ending in `_in` are inches and are
/// converted to page units with [`SheetConfig::units`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Page units per inch.
    pub dpi: f64,
    pub page_width_in: f64,
    pub page_height_in: f64,
    /// Top-left corner of each back-cover block.
    pub block_origins_in: Vec<[f64; 2]>,
    pub font_family: String,

    pub image_offset_in: [f64; 2],
    /// Display width of the cover raster in page units, independent of its pixel aspect.
    pub image_width: f64,
    pub image_height_in: f64,

    pub title_offset_in: [f64; 2],
    /// Maximum columns per wrapped title line.
    pub title_wrap: usize,
    pub title_font_size: f64,
    pub title_line_height: f64,
    pub title_fill: String,

    pub description_offset_in: [f64; 2],
    pub description: String,
    pub description_style: String,

    pub border_in: [f64; 2],
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            dpi: 96.0,
            page_width_in: 8.5,
            page_height_in: 11.0,
            block_origins_in: vec![[0.5, 0.5], [0.5, 5.5]],
            font_family: "Arial".to_string(),
            image_offset_in: [0.5, 0.25],
            image_width: 499.0,
            image_height_in: 4.0,
            title_offset_in: [3.125, 0.75],
            title_wrap: 10,
            title_font_size: 38.0,
            title_line_height: 40.0,
            title_fill: "white".to_string(),
            description_offset_in: [6.25, 2.25],
            description: "Eight 4x6 blank note cards with envelopes".to_string(),
            description_style: "fill:black; font-size: 14pt; text-anchor: middle;".to_string(),
            border_in: [6.5, 4.5],
        }
    }
}

impl SheetConfig {
    pub fn validate(&self) -> CoverResult<()> {
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(CoverError::config("dpi must be finite and > 0"));
        }
        if self.page_width_in <= 0.0 || self.page_height_in <= 0.0 {
            return Err(CoverError::config("page size must be > 0"));
        }
        if self.title_wrap == 0 {
            return Err(CoverError::config("title_wrap must be > 0"));
        }
        if self.block_origins_in.is_empty() {
            return Err(CoverError::config("at least one block origin is required"));
        }
        Ok(())
    }

    /// Convert inches to whole page units, truncating toward zero.
    pub fn units(&self, inches: f64) -> i64 {
        (inches * self.dpi) as i64
    }

    pub fn page_size(&self) -> Size {
        Size::new(
            self.units(self.page_width_in).max(0) as u32,
            self.units(self.page_height_in).max(0) as u32,
        )
    }
}

/// Both halves of the geometry, as read from a `--layout` JSON file.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverConfig {
    pub layout: LayoutConfig,
    pub sheet: SheetConfig,
}

impl CoverConfig {
    pub fn from_json_str(s: &str) -> CoverResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| CoverError::config(format!("parse layout json: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> CoverResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read layout config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> CoverResult<()> {
        self.layout.validate()?;
        self.sheet.validate()
    }
}
