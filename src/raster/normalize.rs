use anyhow::anyhow;
use image::imageops::FilterType;

use crate::foundation::core::{PixelGrid, Size};
use crate::foundation::error::{CoverError, CoverResult};

/// Rotate a quarter turn counter-clockwise.
///
/// A `w x h` grid becomes `h x w`; the sample at `(x, y)` lands at `(y, w - 1 - x)`. No
/// interpolation happens, every sample is moved exactly once.
pub fn rotate_quarter(src: &PixelGrid) -> PixelGrid {
    let (w, h) = (src.width(), src.height());
    let mut out = PixelGrid::new(h, w);
    for y in 0..h {
        for x in 0..w {
            if let Some(p) = src.get(x, y) {
                out.set(y, w - 1 - x, p);
            }
        }
    }
    out
}

/// Uniformly scale `src` so it covers `cell` on both axes.
///
/// The larger of the two per-axis factors wins, so one axis matches the cell and the other
/// overflows (to be cropped by placement). Resampling is bilinear.
pub fn scale_to_cover(src: &PixelGrid, cell: Size) -> CoverResult<PixelGrid> {
    if src.size().is_empty() {
        return Err(CoverError::Other(anyhow!(
            "cannot scale an empty {}x{} image",
            src.width(),
            src.height()
        )));
    }

    let (w, h) = (f64::from(src.width()), f64::from(src.height()));
    let scale = (f64::from(cell.width) / w).max(f64::from(cell.height) / h);
    let new_w = ((w * scale).round() as u32).max(1);
    let new_h = ((h * scale).round() as u32).max(1);

    // Premultiplied samples interpolate without dark fringes, so the buffer is resized as-is.
    let buf = image::RgbaImage::from_raw(src.width(), src.height(), src.as_bytes().to_vec())
        .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", src.width(), src.height()))?;
    let scaled = image::imageops::resize(&buf, new_w, new_h, FilterType::Triangle);

    PixelGrid::from_premul_rgba8(new_w, new_h, scaled.into_raw())
}

/// Landscape-normalize and cover-scale one input image for a cover cell.
pub fn normalize_to_cell(src: &PixelGrid, cell: Size) -> CoverResult<PixelGrid> {
    let scaled = if src.is_portrait() {
        tracing::debug!(
            width = src.width(),
            height = src.height(),
            "portrait input, rotating"
        );
        scale_to_cover(&rotate_quarter(src), cell)?
    } else {
        scale_to_cover(src, cell)?
    };
    tracing::debug!(
        from_w = src.width(),
        from_h = src.height(),
        to_w = scaled.width(),
        to_h = scaled.height(),
        "normalized"
    );
    Ok(scaled)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/normalize.rs"]
mod tests;
