use crate::foundation::error::{WispError, WispResult};

/// An opaque 8-bit RGB color.
///
/// Serialized as a `[r, g, b]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `r, g, b` order.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(v: [u8; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        c.channels()
    }
}

/// Width and height of a raster, both non-zero once validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dims {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dims {
    /// Create validated dimensions (`width > 0 && height > 0`).
    pub fn new(width: u32, height: u32) -> WispResult<Self> {
        if width == 0 || height == 0 {
            return Err(WispError::validation(format!(
                "raster dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of bytes needed for a tightly packed RGB8 raster.
    pub fn byte_len(self) -> WispResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(3))
            .ok_or_else(|| WispError::validation("raster size overflow"))
    }
}

/// An RGB8 raster: tightly packed, row-major, 3 bytes per pixel.
///
/// Dimensions are fixed at construction; only channel values change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    dims: Dims,
    data: Vec<u8>,
}

impl Raster {
    /// Allocate a raster filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgb8) -> WispResult<Self> {
        let dims = Dims::new(width, height)?;
        let data = color.channels().repeat(dims.byte_len()? / 3);
        Ok(Self { dims, data })
    }

    /// Wrap existing RGB8 bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> WispResult<Self> {
        let dims = Dims::new(width, height)?;
        if data.len() != dims.byte_len()? {
            return Err(WispError::render(format!(
                "raster expects {} bytes for {width}x{height}, got {}",
                dims.byte_len()?,
                data.len()
            )));
        }
        Ok(Self { dims, data })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.dims.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.dims.height
    }

    /// Both dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Raw RGB8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.dims.width as usize * 3
    }

    /// Read one pixel.
    ///
    /// Panics when `(x, y)` is outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        let i = self.offset(x, y);
        Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Overwrite one pixel.
    ///
    /// Panics when `(x, y)` is outside the raster.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb8) {
        let i = self.offset(x, y);
        self.data[i..i + 3].copy_from_slice(&color.channels());
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.dims.width && y < self.dims.height,
            "pixel ({x}, {y}) outside {}x{} raster",
            self.dims.width,
            self.dims.height
        );
        (y as usize * self.dims.width as usize + x as usize) * 3
    }

    /// Convert into an `image` crate buffer (no copy).
    pub fn into_rgb_image(self) -> WispResult<image::RgbImage> {
        let Dims { width, height } = self.dims;
        image::RgbImage::from_raw(width, height, self.data)
            .ok_or_else(|| WispError::render("raster bytes do not match its dimensions"))
    }

    /// Wrap an `image` crate buffer (no copy).
    pub fn from_rgb_image(img: image::RgbImage) -> WispResult<Self> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
