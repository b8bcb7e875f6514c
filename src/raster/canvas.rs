use crate::config::LayoutConfig;
use crate::foundation::core::{Anchor, PixelGrid, Rgba8Premul, Size};
use crate::raster::composite::over;

/// The single mutable raster every composition step draws into.
#[derive(Clone, Debug)]
pub struct Canvas {
    grid: PixelGrid,
}

impl Canvas {
    /// Allocate a fully transparent canvas.
    pub fn new(size: Size) -> Self {
        Self {
            grid: PixelGrid::new(size.width, size.height),
        }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    /// Source-over `src` with its top-left corner at `at`.
    ///
    /// Whatever falls outside the canvas is dropped. Returns the number of pixels touched.
    pub fn paste_over(&mut self, src: &PixelGrid, at: Anchor) -> u64 {
        let cw = i64::from(self.grid.width());
        let ch = i64::from(self.grid.height());

        let x0 = at.x.max(0);
        let y0 = at.y.max(0);
        let x1 = at.x.saturating_add(i64::from(src.width())).min(cw);
        let y1 = at.y.saturating_add(i64::from(src.height())).min(ch);
        if x0 >= x1 || y0 >= y1 {
            return 0;
        }

        let mut touched = 0u64;
        for dy in y0..y1 {
            let sy = (dy - at.y) as u32;
            for dx in x0..x1 {
                let sx = (dx - at.x) as u32;
                let (Some(s), Some(d)) = (src.get(sx, sy), self.grid.get(dx as u32, dy as u32))
                else {
                    continue;
                };
                self.grid.set(dx as u32, dy as u32, over(d, s));
                touched += 1;
            }
        }
        touched
    }

    /// Opaque 1px column at `x`, top to bottom.
    pub fn draw_vertical_line(&mut self, x: u32, color: Rgba8Premul) {
        for y in 0..self.grid.height() {
            self.grid.set(x, y, color);
        }
    }

    /// Opaque 1px row at `y`, left to right.
    pub fn draw_horizontal_line(&mut self, y: u32, color: Rgba8Premul) {
        for x in 0..self.grid.width() {
            self.grid.set(x, y, color);
        }
    }
}

/// Assemble the 2x2 cover: the four normalized cells in order, the optional logo, then the
/// separator cross on top.
#[tracing::instrument(skip_all, fields(logo = logo.is_some()))]
pub fn compose_cover(
    cells: &[PixelGrid; 4],
    logo: Option<&PixelGrid>,
    layout: &LayoutConfig,
) -> PixelGrid {
    let mut canvas = Canvas::new(layout.canvas);

    for (cell, at) in cells.iter().zip(layout.cell_anchors) {
        canvas.paste_over(cell, at);
    }
    if let Some(logo) = logo {
        canvas.paste_over(logo, layout.logo_anchor);
    }

    let color = layout.separator_color();
    canvas.draw_horizontal_line(layout.separator_y, color);
    canvas.draw_vertical_line(layout.separator_x, color);

    canvas.into_grid()
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
