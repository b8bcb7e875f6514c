//! End-to-end runs: decode four images, normalize, compose, and write the outputs.
//!
//! Each stage runs to completion before the next. Any error aborts the run; files already
//! written by earlier stages are left in place.
use std::path::{Path, PathBuf};

use crate::assets::decode::open_image;
use crate::assets::resource::{LOGO, ResourceProvider};
use crate::config::{CoverConfig, LayoutConfig};
use crate::foundation::core::PixelGrid;
use crate::foundation::error::{CoverError, CoverResult};
use crate::naming::OutputNames;
use crate::raster::canvas::compose_cover;
use crate::raster::encode::write_png;
use crate::raster::normalize::normalize_to_cell;
use crate::sheet::layout::render_sheet;
use crate::sheet::preview::render_preview;

/// Number of photos on a cover.
pub const CELL_COUNT: usize = 4;

/// The four input image paths, in cell order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverInputs {
    paths: [PathBuf; CELL_COUNT],
}

impl CoverInputs {
    /// Accept exactly four paths; any other count is [`CoverError::ArgumentCount`].
    pub fn from_paths<I, P>(paths: I) -> CoverResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        let got = paths.len();
        let paths: [PathBuf; CELL_COUNT] = paths
            .try_into()
            .map_err(|_| CoverError::ArgumentCount { got })?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &[PathBuf; CELL_COUNT] {
        &self.paths
    }

    /// Decode all four images in order, stopping at the first failure.
    pub fn load(&self) -> CoverResult<[PixelGrid; CELL_COUNT]> {
        let [a, b, c, d] = &self.paths;
        Ok([
            open_image(a)?,
            open_image(b)?,
            open_image(c)?,
            open_image(d)?,
        ])
    }
}

/// Normalize the four decoded images and compose the cover raster.
#[tracing::instrument(skip_all)]
pub fn build_cover(
    images: &[PixelGrid; CELL_COUNT],
    logo: Option<&PixelGrid>,
    layout: &LayoutConfig,
) -> CoverResult<PixelGrid> {
    let [a, b, c, d] = images;
    let cells = [
        normalize_to_cell(a, layout.cell)?,
        normalize_to_cell(b, layout.cell)?,
        normalize_to_cell(c, layout.cell)?,
        normalize_to_cell(d, layout.cell)?,
    ];
    Ok(compose_cover(&cells, logo, layout))
}

fn load_logo(enabled: bool, resources: &dyn ResourceProvider) -> CoverResult<Option<PixelGrid>> {
    if !enabled {
        return Ok(None);
    }
    resources.load(LOGO).map(Some)
}

/// Raster-only run: one PNG at a caller-chosen path.
#[derive(Clone, Debug)]
pub struct RasterJob {
    pub inputs: CoverInputs,
    pub out: PathBuf,
    pub logo: bool,
    pub layout: LayoutConfig,
}

impl RasterJob {
    pub fn new(inputs: CoverInputs) -> Self {
        Self {
            inputs,
            out: PathBuf::from("cover.png"),
            logo: false,
            layout: LayoutConfig::default(),
        }
    }
}

#[tracing::instrument(skip_all, fields(out = %job.out.display()))]
pub fn run_raster(job: &RasterJob, resources: &dyn ResourceProvider) -> CoverResult<PathBuf> {
    job.layout.validate()?;
    let images = job.inputs.load()?;
    let logo = load_logo(job.logo, resources)?;

    let cover = build_cover(&images, logo.as_ref(), &job.layout)?;
    write_png(&cover, &job.out)?;
    Ok(job.out.clone())
}

/// Full run: cover PNG plus the printable back-cover SVG, named after the title.
#[derive(Clone, Debug)]
pub struct SheetJob {
    pub inputs: CoverInputs,
    pub title: String,
    pub out_dir: PathBuf,
    pub logo: bool,
    pub preview: bool,
    pub config: CoverConfig,
}

impl SheetJob {
    pub fn new(inputs: CoverInputs, title: impl Into<String>) -> Self {
        Self {
            inputs,
            title: title.into(),
            out_dir: PathBuf::from("."),
            logo: true,
            preview: false,
            config: CoverConfig::default(),
        }
    }
}

/// Files produced by [`run_sheet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetOutputs {
    pub png: PathBuf,
    pub svg: PathBuf,
    pub preview: Option<PathBuf>,
}

#[tracing::instrument(skip_all, fields(title = %job.title))]
pub fn run_sheet(job: &SheetJob, resources: &dyn ResourceProvider) -> CoverResult<SheetOutputs> {
    job.config.validate()?;
    let images = job.inputs.load()?;
    let logo = load_logo(job.logo, resources)?;

    let cover = build_cover(&images, logo.as_ref(), &job.config.layout)?;

    let names = OutputNames::for_title(&job.title, &job.out_dir);
    write_png(&cover, &names.png)?;

    let svg = render_sheet(&job.title, &names.png_href(), &job.config.sheet);
    write_text(&names.svg, &svg)?;

    let preview = if job.preview {
        let grid = render_preview(&svg, Some(job.out_dir.as_path()))?;
        write_png(&grid, &names.preview)?;
        Some(names.preview.clone())
    } else {
        None
    };

    Ok(SheetOutputs {
        png: names.png,
        svg: names.svg,
        preview,
    })
}

fn write_text(path: &Path, text: &str) -> CoverResult<()> {
    std::fs::write(path, text).map_err(|e| CoverError::write(path, e))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}
