//! Print page with two back-cover blocks.
//!
//! A block is the cover raster, the wrapped title over it, a rotated product description along
//! the right edge, and a cut-line border. Every position is an inch offset from the block
//! origin, truncated to whole page units.
use crate::config::SheetConfig;
use crate::foundation::core::{Point, Rect, Vec2};
use crate::sheet::svg::SvgWriter;
use crate::sheet::wrap::wrap_lines;

fn offset(cfg: &SheetConfig, origin: Point, offset_in: [f64; 2]) -> Point {
    origin + Vec2::new(cfg.units(offset_in[0]) as f64, cfg.units(offset_in[1]) as f64)
}

/// Draw one back-cover block with its top-left corner at `origin` (page units).
pub fn back_block(
    svg: &mut SvgWriter,
    cfg: &SheetConfig,
    title: &str,
    raster_href: &str,
    origin: Point,
) {
    svg.group(&[("class", "back-cover")]);
    svg.title(&format!("Cover for {title} card pack"));

    let img = offset(cfg, origin, cfg.image_offset_in);
    svg.image(
        img.x as i64,
        img.y as i64,
        cfg.image_width as i64,
        cfg.units(cfg.image_height_in),
        raster_href,
    );

    let title_at = offset(cfg, origin, cfg.title_offset_in);
    let lines = wrap_lines(title, cfg.title_wrap);
    svg.text_lines(
        title_at.x as i64,
        title_at.y as i64,
        &lines,
        cfg.title_font_size,
        cfg.title_line_height,
        &cfg.title_fill,
        "middle",
    );

    let desc = offset(cfg, origin, cfg.description_offset_in);
    let (dx, dy) = (desc.x as i64, desc.y as i64);
    let rotate = format!("rotate(-90 {dx} {dy})");
    svg.text(
        dx,
        dy,
        &cfg.description,
        &[
            ("style", cfg.description_style.as_str()),
            ("transform", rotate.as_str()),
        ],
    );

    let border = Rect::from_origin_size(
        origin,
        (
            cfg.units(cfg.border_in[0]) as f64,
            cfg.units(cfg.border_in[1]) as f64,
        ),
    );
    svg.rect(
        border.x0 as i64,
        border.y0 as i64,
        border.width() as i64,
        border.height() as i64,
        &[("fill", "none"), ("stroke", "black"), ("stroke-width", "1")],
    );

    svg.group_end();
}

/// Lay out the full page: one block per configured origin, all pointing at `raster_href`.
#[tracing::instrument(skip(cfg))]
pub fn render_sheet(title: &str, raster_href: &str, cfg: &SheetConfig) -> String {
    let page = cfg.page_size();
    let font = format!("font-family: {}", cfg.font_family);

    let mut svg = SvgWriter::new();
    svg.start(page.width, page.height, &[("style", font.as_str())]);
    for [x, y] in &cfg.block_origins_in {
        let origin = Point::new(cfg.units(*x) as f64, cfg.units(*y) as f64);
        back_block(&mut svg, cfg, title, raster_href, origin);
    }
    svg.end();
    svg.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/layout.rs"]
mod tests;
