//! Decoded CPU-side images.
//!
//! [`Raster`] is the decoded form of one image variant. Decoding is
//! delegated entirely to the `image` crate; this type only captures the
//! pixel data together with its dimensions and hands both to the host
//! toolkit's painter at draw time.

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::types::Size;

/// A decoded raster image.
///
/// Immutable after construction. Cloning is cheap to reason about but not
/// cheap to perform (the pixel data is copied); bundles hold each variant
/// exactly once, so in practice rasters are never cloned on the paint path.
#[derive(Clone)]
pub struct Raster {
    inner: DynamicImage,
    width: u32,
    height: u32,
}

impl Raster {
    /// Decode a raster from encoded bytes (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> image::ImageResult<Self> {
        Ok(Self::from_dynamic(image::load_from_memory(bytes)?))
    }

    /// Decode a raster from a file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> image::ImageResult<Self> {
        Ok(Self::from_dynamic(image::open(path)?))
    }

    /// Wrap an already-decoded image.
    pub fn from_dynamic(inner: DynamicImage) -> Self {
        let (width, height) = inner.dimensions();
        Self {
            inner,
            width,
            height,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in pixels.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Access the decoded pixel data.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.inner
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::png_bytes;
    use super::*;
    use crate::types::Size;

    #[test]
    fn test_from_bytes_decodes_dimensions() {
        let raster = Raster::from_bytes(&png_bytes(6, 4)).unwrap();
        assert_eq!(raster.width(), 6);
        assert_eq!(raster.height(), 4);
        assert_eq!(raster.size(), Size::new(6.0, 4.0));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(Raster::from_bytes(b"definitely not an image").is_err());
    }

    #[test]
    fn test_debug_reports_dimensions_only() {
        let raster = Raster::from_bytes(&png_bytes(2, 2)).unwrap();
        let dbg = format!("{raster:?}");
        assert!(dbg.contains("width"));
        assert!(dbg.contains('2'));
    }
}
