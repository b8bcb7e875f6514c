pub mod decode;
pub mod resource;

pub use decode::{decode_image, open_image};
pub use resource::{EmbeddedResources, LOGO, MapResources, ResourceProvider};
