use std::path::Path;

use crate::foundation::core::PixelGrid;
use crate::foundation::error::{CoverError, CoverResult};

/// Decode any format the `image` crate was built with (PNG, JPEG, TIFF, ...) into the canonical
/// premultiplied grid.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, image::ImageError> {
    let dyn_img = image::load_from_memory(bytes)?;
    Ok(PixelGrid::from_rgba_image(dyn_img.to_rgba8()))
}

/// Read and decode one input image. The file handle is closed before decoding starts.
#[tracing::instrument(level = "debug")]
pub fn open_image(path: &Path) -> CoverResult<PixelGrid> {
    let bytes = std::fs::read(path).map_err(|e| CoverError::open(path, e))?;
    let grid = decode_image(&bytes).map_err(|source| CoverError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        "decoded {}",
        path.display()
    );
    Ok(grid)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
