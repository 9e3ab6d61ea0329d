//! Image bundles: a plain raster paired with an optional `@2x` counterpart.

use crate::raster::Raster;
use crate::types::Size;

/// The pair of decoded images logically representing one icon asset.
///
/// A bundle's `width`/`height` are its *logical* dimensions: the size the
/// icon occupies in layout, always derived from the plain variant when one
/// exists, regardless of which variant is actually painted. Bundles are
/// immutable after construction and exclusively owned by the icon that
/// wraps them, so no synchronization is needed anywhere on the paint path.
///
/// Bundles produced by the default factory always carry a plain variant.
/// [`ImageBundle::from_parts`] exists for alternate factories and models
/// the plain variant as optional; the paint fallback chain in
/// [`RetinaIcon`](crate::RetinaIcon) handles every combination.
#[derive(Debug, Clone)]
pub struct ImageBundle {
    plain: Option<Raster>,
    retina: Option<Raster>,
    width: u32,
    height: u32,
}

impl ImageBundle {
    /// Create a bundle from a plain raster and an optional `@2x` raster.
    ///
    /// Logical dimensions are taken from the plain raster.
    pub fn new(plain: Raster, retina: Option<Raster>) -> Self {
        let width = plain.width();
        let height = plain.height();
        Self {
            plain: Some(plain),
            retina,
            width,
            height,
        }
    }

    /// Assemble a bundle from explicit parts.
    ///
    /// For alternate factory implementations; the only contract is that
    /// `width`/`height` are the logical size consumers should lay out with.
    pub fn from_parts(
        plain: Option<Raster>,
        retina: Option<Raster>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            plain,
            retina,
            width,
            height,
        }
    }

    /// The plain-resolution variant.
    pub fn plain(&self) -> Option<&Raster> {
        self.plain.as_ref()
    }

    /// The double-density variant, if one was found.
    pub fn retina(&self) -> Option<&Raster> {
        self.retina.as_ref()
    }

    /// Logical width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Logical size, independent of which variant paints.
    pub fn logical_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Whether a double-density variant is available.
    pub fn has_retina(&self) -> bool {
        self.retina.is_some()
    }

    /// Whether the bundle holds no image at all.
    ///
    /// Painting an empty bundle is a no-op, not an error.
    pub fn is_empty(&self) -> bool {
        self.plain.is_none() && self.retina.is_none()
    }
}
