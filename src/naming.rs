use std::path::{Path, PathBuf};

/// Derive the shared output base name from a card-set title.
///
/// Lower-cases with full Unicode case mapping (so `Σ` at a word end becomes `ς`) and turns each
/// space into a hyphen. Nothing else is altered.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Sibling output files for one sheet run. The SVG refers to the PNG by bare file name, so they
/// always live in the same directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputNames {
    pub base: String,
    pub png: PathBuf,
    pub svg: PathBuf,
    pub preview: PathBuf,
}

impl OutputNames {
    pub fn for_title(title: &str, dir: &Path) -> Self {
        let base = slugify(title);
        Self {
            png: dir.join(format!("{base}.png")),
            svg: dir.join(format!("{base}.svg")),
            preview: dir.join(format!("{base}-preview.png")),
            base,
        }
    }

    /// Relative reference to the raster, as embedded in the SVG.
    pub fn png_href(&self) -> String {
        format!("{}.png", self.base)
    }
}
