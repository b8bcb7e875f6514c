use super::*;

fn sheet(title: &str) -> String {
    render_sheet(title, "my-card-set.png", &SheetConfig::default())
}

#[test]
fn page_is_letter_at_96_dpi() {
    let out = sheet("My Card Set");
    assert!(out.contains("<svg width=\"816\" height=\"1056\""));
    assert!(out.contains("style=\"font-family: Arial\""));
    assert!(out.trim_end().ends_with("</svg>"));
}

#[test]
fn two_blocks_at_fixed_origins() {
    let out = sheet("My Card Set");
    assert_eq!(out.matches("class=\"back-cover\"").count(), 2);
    assert_eq!(out.matches("<title>Cover for My Card Set card pack</title>").count(), 2);

    assert!(out.contains(
        "<rect x=\"48\" y=\"48\" width=\"624\" height=\"432\" fill=\"none\" stroke=\"black\" stroke-width=\"1\"/>"
    ));
    assert!(out.contains("<rect x=\"48\" y=\"528\" width=\"624\" height=\"432\""));
}

#[test]
fn raster_is_referenced_with_fixed_display_size() {
    let out = sheet("My Card Set");
    assert!(out.contains(
        "<image x=\"96\" y=\"72\" width=\"499\" height=\"384\" preserveAspectRatio=\"none\" xlink:href=\"my-card-set.png\"/>"
    ));
    assert!(out.contains("<image x=\"96\" y=\"552\" width=\"499\" height=\"384\""));
}

#[test]
fn title_is_wrapped_white_and_centred() {
    let out = sheet("My Card Set");
    assert_eq!(
        out.matches("<g style=\"font-size:38px;fill:white;text-anchor:middle\">")
            .count(),
        2
    );
    assert!(out.contains("<text x=\"348\" y=\"120\">My Card</text>"));
    assert!(out.contains("<text x=\"348\" y=\"160\">Set</text>"));
    assert!(out.contains("<text x=\"348\" y=\"600\">My Card</text>"));
    assert!(out.contains("<text x=\"348\" y=\"640\">Set</text>"));
}

#[test]
fn description_is_rotated_about_its_anchor() {
    let out = sheet("Anything");
    assert!(out.contains(
        "<text x=\"648\" y=\"264\" style=\"fill:black; font-size: 14pt; text-anchor: middle;\" transform=\"rotate(-90 648 264)\">Eight 4x6 blank note cards with envelopes</text>"
    ));
    assert!(out.contains("transform=\"rotate(-90 648 744)\""));
}

#[test]
fn titles_are_escaped() {
    let out = sheet("Salt & <Pepper>");
    assert!(out.contains("Cover for Salt &amp; &lt;Pepper&gt; card pack"));
    assert!(!out.contains("<Pepper>"));
}

#[test]
fn alternate_page_geometry() {
    let cfg = SheetConfig {
        dpi: 72.0,
        block_origins_in: vec![[1.0, 1.0]],
        ..SheetConfig::default()
    };
    let out = render_sheet("x", "x.png", &cfg);
    assert!(out.contains("<svg width=\"612\" height=\"792\""));
    assert_eq!(out.matches("class=\"back-cover\"").count(), 1);
    assert!(out.contains("<rect x=\"72\" y=\"72\" width=\"468\" height=\"324\""));
}

#[test]
fn sheet_parses_as_svg() {
    let out = sheet("My Card Set");
    let tree = usvg::Tree::from_data(out.as_bytes(), &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 816.0);
    assert_eq!(tree.size().height(), 1056.0);
}
