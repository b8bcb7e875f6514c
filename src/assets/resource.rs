use std::collections::BTreeMap;

use crate::assets::decode::decode_image;
use crate::foundation::core::PixelGrid;
use crate::foundation::error::{CoverError, CoverResult};

/// Name of the white studio logo overlaid on the cover.
pub const LOGO: &str = "studio-logo-white.png";

/// Resolves a named, bundled resource into a decoded pixel grid.
pub trait ResourceProvider {
    fn load(&self, name: &str) -> CoverResult<PixelGrid>;
}

const EMBEDDED: &[(&str, &[u8])] = &[(
    LOGO,
    include_bytes!("../../assets/studio-logo-white.png").as_slice(),
)];

/// Resources compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        EMBEDDED.iter().map(|(name, _)| *name)
    }
}

impl ResourceProvider for EmbeddedResources {
    fn load(&self, name: &str) -> CoverResult<PixelGrid> {
        let bytes = EMBEDDED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, b)| *b)
            .ok_or_else(|| CoverError::UnknownResource(name.to_string()))?;
        decode_image(bytes).map_err(|source| CoverError::Resource {
            name: name.to_string(),
            source,
        })
    }
}

/// In-memory resources, for callers that synthesize their own overlays.
#[derive(Clone, Debug, Default)]
pub struct MapResources {
    grids: BTreeMap<String, PixelGrid>,
}

impl MapResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, grid: PixelGrid) -> Self {
        self.insert(name, grid);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, grid: PixelGrid) {
        self.grids.insert(name.into(), grid);
    }
}

impl ResourceProvider for MapResources {
    fn load(&self, name: &str) -> CoverResult<PixelGrid> {
        self.grids
            .get(name)
            .cloned()
            .ok_or_else(|| CoverError::UnknownResource(name.to_string()))
    }
}
