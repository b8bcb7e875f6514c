pub mod layout;
pub mod preview;
pub mod svg;
pub mod wrap;

pub use layout::{back_block, render_sheet};
pub use preview::render_preview;
pub use svg::SvgWriter;
pub use wrap::wrap_lines;
