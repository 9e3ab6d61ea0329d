//! Resolution-aware icon rendering for HiDPI displays.
//!
//! Given a base image asset, this crate locates a double-density (`@2x`)
//! counterpart by naming convention, bundles both decoded variants, and at
//! paint time draws the variant matching the target display's density —
//! with graceful fallback when only one variant exists.
//!
//! Image decoding is delegated to the `image` crate and pixel output to the
//! host toolkit through the [`IconPainter`] seam; this crate owns only the
//! selection, fallback and density logic in between.
//!
//! # Loading an icon
//!
//! ```no_run
//! use retina_icon::toolkit;
//!
//! // Loads icons/save.png, and icons/save@2x.png when present.
//! let icon = toolkit::create_icon("icons/save.png")?;
//! assert_eq!(icon.size(), icon.bundle().logical_size());
//! # Ok::<(), retina_icon::LoadError>(())
//! ```
//!
//! # Painting
//!
//! The host adapts its draw context to [`IconPainter`] and hands it to
//! [`RetinaIcon::paint`]:
//!
//! ```ignore
//! icon.paint(&mut my_painter, Point::new(x, y));
//! ```
//!
//! On a high-density target the `@2x` variant is drawn at half scale so it
//! fills the icon's logical box; on a standard target the plain variant is
//! drawn unscaled. Density is re-checked on every paint, so windows moving
//! between monitors pick up the right variant immediately.
//!
//! # Density queries
//!
//! ```ignore
//! use retina_icon::{density, MonitorScreens};
//!
//! let screens = MonitorScreens::new(window.available_monitors());
//! if density::any_high_density(&screens) {
//!     // the environment has at least one HiDPI display attached
//! }
//! ```
//!
//! A surface is classified high-density only when it reports a scale factor
//! exactly equal to 2.0; unknown or fractional scales fail closed to
//! standard density.
//!
//! # Custom loading
//!
//! The default factory is eager, synchronous and uncached. Caching, lazy
//! decoding or alternate naming conventions plug in through
//! [`ImageBundleFactory`]; archive- or network-backed assets only need a
//! [`ResourceLoader`].

mod bundle;
pub mod density;
mod error;
mod factory;
mod icon;
mod locator;
mod paint;
mod raster;
mod screen;
pub mod toolkit;
mod types;

pub use bundle::ImageBundle;
pub use error::{LoadError, LoadResult};
pub use factory::{EagerBundleFactory, FsLoader, ImageBundleFactory, ResourceLoader};
pub use icon::RetinaIcon;
pub use locator::{Locator, HIGH_DENSITY_SUFFIX};
pub use paint::IconPainter;
pub use raster::Raster;
pub use screen::{MonitorScreens, Screen, ScreenError, ScreenProvider};
pub use types::{Point, Size};

// Re-export the codec collaborator for hosts constructing rasters directly.
pub use image;
