use crate::foundation::error::{CoverError, CoverResult};

pub use kurbo::{Point, Rect, Vec2};

/// Width/height pair in pixels (raster) or page units (vector).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Integer top-left placement on the canvas. May be negative or past the edge; pastes clip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    pub x: i64,
    pub y: i64,
}

impl Anchor {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Convert back to straight alpha. Fully transparent pixels become transparent black.
    pub fn to_straight_rgba(self) -> [u8; 4] {
        [
            unpremul(self.r, self.a),
            unpremul(self.g, self.a),
            unpremul(self.b, self.a),
            self.a,
        ]
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }
}

fn premul(c: u8, a: u8) -> u8 {
    (((u16::from(c) * u16::from(a)) + 127) / 255) as u8
}

fn unpremul(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
    v.min(255) as u8
}

/// Canonical in-memory image: row-major premultiplied RGBA8, origin at top-left.
///
/// Every grid used for composition has this layout regardless of what the source file was
/// encoded as. Reads and writes outside `width x height` return `None` / are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Allocate a fully transparent grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba8Premul::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Rgba8Premul) -> Self {
        let px = color.to_array();
        let len = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(len * 4);
        for _ in 0..len {
            data.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap raw premultiplied bytes. The buffer length must match the dimensions.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> CoverResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(CoverError::Other(anyhow::anyhow!(
                "pixel buffer has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from a straight-alpha `image` buffer, premultiplying every pixel.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.into_raw();
        for px in data.chunks_exact_mut(4) {
            let p = Rgba8Premul::from_straight_rgba(px[0], px[1], px[2], px[3]);
            px.copy_from_slice(&p.to_array());
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Straight-alpha copy suitable for handing to an encoder.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let p = Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]);
            out.extend_from_slice(&p.to_straight_rgba());
        }
        image::RgbaImage::from_raw(self.width, self.height, out)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        let i = self.offset(x, y)?;
        let px = &self.data[i..i + 4];
        Some(Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]))
    }

    /// Overwrite one pixel. Returns `false` (and writes nothing) when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba8Premul) -> bool {
        let Some(i) = self.offset(x, y) else {
            return false;
        };
        self.data[i..i + 4].copy_from_slice(&color.to_array());
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
