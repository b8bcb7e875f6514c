pub mod canvas;
pub mod composite;
pub mod encode;
pub mod normalize;

pub use canvas::{Canvas, compose_cover};
pub use encode::{encode_png, write_png};
pub use normalize::{normalize_to_cell, rotate_quarter, scale_to_cover};
