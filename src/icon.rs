//! Density-aware paintable icons.

use crate::bundle::ImageBundle;
use crate::density;
use crate::paint::IconPainter;
use crate::types::{Point, Size};

/// A paintable icon that selects the right resolution variant per paint.
///
/// The icon's reported [`width`](Self::width)/[`height`](Self::height) are
/// the bundle's logical dimensions and never change, no matter which
/// variant actually loaded or paints — consumers size their layout from
/// these.
///
/// Density is re-evaluated on every [`paint`](Self::paint) call: a window
/// dragged from a HiDPI monitor to a standard one starts painting the plain
/// variant on the very next frame, with no cache to invalidate.
#[derive(Debug, Clone)]
pub struct RetinaIcon {
    bundle: ImageBundle,
}

impl RetinaIcon {
    /// Wrap an image bundle in a paintable icon.
    pub fn new(bundle: ImageBundle) -> Self {
        Self { bundle }
    }

    /// The underlying image bundle.
    pub fn bundle(&self) -> &ImageBundle {
        &self.bundle
    }

    /// Logical width in pixels.
    pub fn width(&self) -> u32 {
        self.bundle.width()
    }

    /// Logical height in pixels.
    pub fn height(&self) -> u32 {
        self.bundle.height()
    }

    /// Logical size in pixels.
    pub fn size(&self) -> Size {
        self.bundle.logical_size()
    }

    /// Paint the icon at `origin` into `painter`.
    ///
    /// On a high-density target the `@2x` variant is drawn scaled down by
    /// exactly one half, so it fills the logical width/height box; when no
    /// `@2x` variant exists the plain image is drawn unscaled instead. On a
    /// standard-density target the plain image is drawn unscaled; a bundle
    /// without a plain variant (possible only through
    /// [`ImageBundle::from_parts`]) falls back to the `@2x` image unscaled,
    /// which is visually oversized — a better-than-nothing path kept for
    /// compatibility. An empty bundle paints nothing. Never errors.
    pub fn paint(&self, painter: &mut dyn IconPainter, origin: Point) {
        if density::target_is_high_density(painter) {
            if !self.paint_retina_scaled(painter, origin) {
                self.paint_plain(painter, origin);
            }
        } else if !self.paint_plain(painter, origin) {
            self.paint_retina_unscaled(painter, origin);
        }
    }

    /// Draw the `@2x` variant at half scale into the logical box.
    fn paint_retina_scaled(&self, painter: &mut dyn IconPainter, origin: Point) -> bool {
        let Some(retina) = self.bundle.retina() else {
            return false;
        };
        painter.save();
        painter.translate(origin.x, origin.y);
        painter.scale(0.5, 0.5);
        painter.draw_raster(retina, Point::ZERO);
        painter.restore();
        true
    }

    /// Draw the plain variant unscaled at the requested origin.
    fn paint_plain(&self, painter: &mut dyn IconPainter, origin: Point) -> bool {
        let Some(plain) = self.bundle.plain() else {
            return false;
        };
        painter.draw_raster(plain, origin);
        true
    }

    /// Draw the `@2x` variant unscaled (the oversized last resort).
    fn paint_retina_unscaled(&self, painter: &mut dyn IconPainter, origin: Point) -> bool {
        let Some(retina) = self.bundle.retina() else {
            return false;
        };
        painter.draw_raster(retina, origin);
        true
    }
}
