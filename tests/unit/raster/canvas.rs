use super::*;
use crate::raster::normalize::normalize_to_cell;

const RED: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};
const GREEN: Rgba8Premul = Rgba8Premul {
    r: 0,
    g: 255,
    b: 0,
    a: 255,
};
const BLUE: Rgba8Premul = Rgba8Premul {
    r: 0,
    g: 0,
    b: 255,
    a: 255,
};
const YELLOW: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 255,
    b: 0,
    a: 255,
};

fn solid_cells(layout: &LayoutConfig) -> [PixelGrid; 4] {
    [RED, GREEN, BLUE, YELLOW].map(|c| {
        normalize_to_cell(&PixelGrid::filled(1000, 800, c), layout.cell).unwrap()
    })
}

#[test]
fn four_solid_images_land_in_their_quadrants() {
    let layout = LayoutConfig::default();
    let out = compose_cover(&solid_cells(&layout), None, &layout);

    assert_eq!(out.size(), Size::new(1560, 1200));
    assert_eq!(out.get(10, 10), Some(RED));
    assert_eq!(out.get(790, 10), Some(GREEN));
    assert_eq!(out.get(10, 610), Some(BLUE));
    assert_eq!(out.get(790, 610), Some(YELLOW));
    assert_eq!(out.get(1559, 1199), Some(YELLOW));
}

#[test]
fn separator_cross_is_opaque_white() {
    let layout = LayoutConfig::default();
    let out = compose_cover(&solid_cells(&layout), None, &layout);

    assert_eq!(out.get(780, 10), Some(Rgba8Premul::WHITE));
    assert_eq!(out.get(780, 0), Some(Rgba8Premul::WHITE));
    assert_eq!(out.get(780, 1199), Some(Rgba8Premul::WHITE));
    assert_eq!(out.get(10, 600), Some(Rgba8Premul::WHITE));
    assert_eq!(out.get(1559, 600), Some(Rgba8Premul::WHITE));
    assert_eq!(out.get(779, 10), Some(RED));
    assert_eq!(out.get(10, 601), Some(BLUE));
}

#[test]
fn vertical_separator_stops_at_canvas_height() {
    // The production program iterated the vertical line up to the canvas *width*; on a
    // wider-than-tall canvas only the rows that exist are drawn and nothing else changes.
    let mut canvas = Canvas::new(Size::new(1560, 1200));
    canvas.draw_vertical_line(780, Rgba8Premul::WHITE);

    let grid = canvas.into_grid();
    assert_eq!(grid.size(), Size::new(1560, 1200));
    let white = (0..1200)
        .filter(|&y| grid.get(780, y) == Some(Rgba8Premul::WHITE))
        .count();
    assert_eq!(white, 1200);
    assert_eq!(grid.get(781, 0), Some(Rgba8Premul::TRANSPARENT));
}

#[test]
fn paste_clips_to_canvas_and_source() {
    let mut canvas = Canvas::new(Size::new(10, 10));
    let src = PixelGrid::filled(6, 6, RED);

    assert_eq!(canvas.paste_over(&src, Anchor::new(7, 8)), 3 * 2);
    assert_eq!(canvas.grid().get(9, 9), Some(RED));
    assert_eq!(canvas.grid().get(6, 9), Some(Rgba8Premul::TRANSPARENT));

    assert_eq!(canvas.paste_over(&src, Anchor::new(-4, -5)), 2);
    assert_eq!(canvas.grid().get(0, 0), Some(RED));
    assert_eq!(canvas.grid().get(1, 0), Some(RED));
    assert_eq!(canvas.grid().get(2, 0), Some(Rgba8Premul::TRANSPARENT));

    assert_eq!(canvas.paste_over(&src, Anchor::new(10, 0)), 0);
    assert_eq!(canvas.paste_over(&src, Anchor::new(0, -6)), 0);
}

#[test]
fn paste_at_extreme_anchors_touches_nothing() {
    let mut canvas = Canvas::new(Size::new(4, 4));
    let src = PixelGrid::filled(2, 2, Rgba8Premul::WHITE);

    for at in [
        Anchor::new(i64::MAX, 0),
        Anchor::new(0, i64::MAX),
        Anchor::new(i64::MIN, 0),
        Anchor::new(0, i64::MIN),
        Anchor::new(i64::MAX, i64::MIN),
    ] {
        assert_eq!(canvas.paste_over(&src, at), 0, "{at:?}");
    }
    assert_eq!(canvas.into_grid(), PixelGrid::new(4, 4));
}

#[test]
fn logo_is_alpha_blended_over_cells() {
    let layout = LayoutConfig::default();
    let mut logo = PixelGrid::new(4, 2);
    logo.set(0, 0, Rgba8Premul::WHITE);
    logo.set(1, 0, Rgba8Premul::from_straight_rgba(255, 255, 255, 128));

    let out = compose_cover(&solid_cells(&layout), Some(&logo), &layout);
    let (lx, ly) = (layout.logo_anchor.x as u32, layout.logo_anchor.y as u32);

    assert_eq!(out.get(lx, ly), Some(Rgba8Premul::WHITE));
    let half = out.get(lx + 1, ly).unwrap();
    assert_eq!(half.a, 255);
    assert_eq!(half.b, 255);
    assert!(half.r > 120 && half.r < 136, "{half:?}");
    assert_eq!(out.get(lx + 2, ly), Some(BLUE));
}

#[test]
fn alternate_geometry_is_honoured() {
    let layout = LayoutConfig {
        canvas: Size::new(20, 10),
        cell: Size::new(10, 5),
        cell_anchors: [
            Anchor::new(0, 0),
            Anchor::new(11, 0),
            Anchor::new(0, 6),
            Anchor::new(11, 6),
        ],
        logo_anchor: Anchor::new(0, 0),
        separator_x: 10,
        separator_y: 5,
        separator_rgba: [0, 0, 0, 255],
    };
    let cells = [RED, GREEN, BLUE, YELLOW].map(|c| PixelGrid::filled(10, 5, c));
    let out = compose_cover(&cells, None, &layout);

    let black = Rgba8Premul::from_array([0, 0, 0, 255]);
    assert_eq!(out.size(), Size::new(20, 10));
    assert_eq!(out.get(10, 2), Some(black));
    assert_eq!(out.get(3, 5), Some(black));
    assert_eq!(out.get(12, 1), Some(GREEN));
    assert_eq!(out.get(12, 8), Some(YELLOW));
}
