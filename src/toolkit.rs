//! Convenience entry points with a default-configured factory.
//!
//! These free functions cover the common case — icons loaded eagerly from
//! the filesystem — without any mutable global state: the default factory
//! is a stateless, side-effect-free constant.

use crate::error::LoadResult;
use crate::factory::{EagerBundleFactory, FsLoader, ImageBundleFactory};
use crate::icon::RetinaIcon;
use crate::locator::Locator;

/// The shared default factory: eager, filesystem-backed, uncached.
static DEFAULT_FACTORY: EagerBundleFactory<FsLoader> = EagerBundleFactory::new();

/// Create an icon for `locator` using the default factory.
///
/// Loads the plain image and its derived `@2x` counterpart eagerly from the
/// filesystem.
///
/// # Errors
///
/// Fails when the plain image cannot be read or decoded.
pub fn create_icon(locator: impl Into<Locator>) -> LoadResult<RetinaIcon> {
    create_icon_with(locator, &DEFAULT_FACTORY)
}

/// Create an icon for `locator` using a specific bundle factory.
///
/// Only needed when supplying a custom [`ImageBundleFactory`] (caching,
/// lazy loading, alternate naming conventions); otherwise prefer
/// [`create_icon`].
pub fn create_icon_with(
    locator: impl Into<Locator>,
    factory: &dyn ImageBundleFactory,
) -> LoadResult<RetinaIcon> {
    let bundle = factory.create(&locator.into())?;
    Ok(RetinaIcon::new(bundle))
}
