use std::path::Path;
use std::sync::Arc;

use crate::foundation::core::PixelGrid;
use crate::foundation::error::{CoverError, CoverResult};

/// Rasterize an SVG page onto white paper, at one pixel per page unit.
///
/// Relative image references are resolved against `resources_dir`; system fonts are used for
/// text. Missing fonts or images are skipped by the renderer rather than reported.
#[tracing::instrument(skip(svg))]
pub fn render_preview(svg: &str, resources_dir: Option<&Path>) -> CoverResult<PixelGrid> {
    let opts = usvg::Options {
        resources_dir: resources_dir.map(Path::to_path_buf),
        fontdb: system_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
        .map_err(|e| CoverError::preview(format!("parse svg: {e}")))?;

    let size = tree.size();
    let width = (size.width().ceil() as u32).max(1);
    let height = (size.height().ceil() as u32).max(1);

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CoverError::preview(format!("allocate {width}x{height} pixmap")))?;
    pixmap.fill(resvg::tiny_skia::Color::WHITE);
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied RGBA8, the same layout as `PixelGrid`.
    PixelGrid::from_premul_rgba8(width, height, pixmap.take())
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    Arc::new(db)
}
