use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::ImageEncoder as _;
use image::codecs::png::PngEncoder;

use crate::foundation::core::PixelGrid;
use crate::foundation::error::{CoverError, CoverResult};

/// Encode a grid as an 8-bit RGBA PNG (straight alpha, as PNG requires).
pub fn encode_png<W: Write>(grid: &PixelGrid, out: W) -> CoverResult<()> {
    let rgba = grid.to_rgba_image();
    PngEncoder::new(out)
        .write_image(
            rgba.as_raw(),
            grid.width(),
            grid.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(CoverError::Encode)
}

/// Encode to `path`, creating or truncating the file.
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn write_png(grid: &PixelGrid, path: &Path) -> CoverResult<()> {
    let file = File::create(path).map_err(|e| CoverError::write(path, e))?;
    let mut w = BufWriter::new(file);
    encode_png(grid, &mut w)?;
    w.flush().map_err(|e| CoverError::write(path, e))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}
