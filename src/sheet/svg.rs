use std::borrow::Cow;

/// Append-only SVG 1.1 document builder covering the handful of elements the sheet needs.
///
/// Coordinates are whole page units. Text content and attribute values are XML-escaped.
#[derive(Debug, Default)]
pub struct SvgWriter {
    out: String,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the root `<svg>` element. `attrs` are appended verbatim after escaping their values.
    pub fn start(&mut self, width: u32, height: u32, attrs: &[(&str, &str)]) {
        self.out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.out.push_str(&format!(
            "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" \
             xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\"{}>\n",
            attr_list(attrs)
        ));
    }

    pub fn end(&mut self) {
        self.out.push_str("</svg>\n");
    }

    pub fn group(&mut self, attrs: &[(&str, &str)]) {
        self.out.push_str(&format!("<g{}>\n", attr_list(attrs)));
    }

    pub fn group_end(&mut self) {
        self.out.push_str("</g>\n");
    }

    pub fn title(&mut self, text: &str) {
        self.out.push_str(&format!("<title>{}</title>\n", escape(text)));
    }

    /// Reference an external raster by (relative) `href`, stretched to `w x h`.
    pub fn image(&mut self, x: i64, y: i64, w: i64, h: i64, href: &str) {
        self.out.push_str(&format!(
            "<image x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" \
             preserveAspectRatio=\"none\" xlink:href=\"{}\"/>\n",
            escape(href)
        ));
    }

    pub fn text(&mut self, x: i64, y: i64, text: &str, attrs: &[(&str, &str)]) {
        self.out.push_str(&format!(
            "<text x=\"{x}\" y=\"{y}\"{}>{}</text>\n",
            attr_list(attrs),
            escape(text)
        ));
    }

    /// Stack `lines` downward from `(x, y)`, `spacing` units apart, inside one styled group.
    #[allow(clippy::too_many_arguments)]
    pub fn text_lines(
        &mut self,
        x: i64,
        y: i64,
        lines: &[String],
        size: f64,
        spacing: f64,
        fill: &str,
        anchor: &str,
    ) {
        let style = format!("font-size:{size}px;fill:{fill};text-anchor:{anchor}");
        self.group(&[("style", style.as_str())]);
        let mut line_y = y as f64;
        for line in lines {
            self.text(x, line_y as i64, line, &[]);
            line_y += spacing;
        }
        self.group_end();
    }

    pub fn rect(&mut self, x: i64, y: i64, w: i64, h: i64, attrs: &[(&str, &str)]) {
        self.out.push_str(&format!(
            "<rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\"{}/>\n",
            attr_list(attrs)
        ));
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }
}

fn attr_list(attrs: &[(&str, &str)]) -> String {
    let mut s = String::new();
    for (k, v) in attrs {
        s.push_str(&format!(" {k}=\"{}\"", escape(v)));
    }
    s
}

fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
