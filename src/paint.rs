//! The host-toolkit paint-context seam.
//!
//! This crate does not render pixels; the host's renderer does. An
//! [`IconPainter`] is the minimal drawing surface an icon needs: a
//! save/restore transform stack, translate and scale, and a raster blit.
//! Any retained- or immediate-mode toolkit can adapt its draw context to
//! this trait in a few lines.

use crate::raster::Raster;
use crate::screen::Screen;
use crate::types::Point;

/// A paint context an icon can draw itself into.
///
/// Transform semantics follow the usual 2D canvas model: `save` pushes the
/// current transform, `restore` pops it, and `translate`/`scale` compose
/// onto the current transform. [`draw_raster`](IconPainter::draw_raster)
/// draws the raster at its natural pixel size under whatever transform is
/// current.
pub trait IconPainter {
    /// Push the current transform state.
    fn save(&mut self);

    /// Pop the most recently saved transform state.
    fn restore(&mut self);

    /// Translate subsequent drawing by (`tx`, `ty`).
    fn translate(&mut self, tx: f32, ty: f32);

    /// Scale subsequent drawing by (`sx`, `sy`).
    fn scale(&mut self, sx: f32, sy: f32);

    /// Draw a raster at `pos` under the current transform, at its natural
    /// size.
    fn draw_raster(&mut self, raster: &Raster, pos: Point);

    /// The display surface this context is bound to.
    ///
    /// Returns `None` for targets that are not a graphics-capable display
    /// (offscreen buffers, printers); such targets classify as standard
    /// density.
    fn target_screen(&self) -> Option<Screen>;
}
