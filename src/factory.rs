//! Bundle factories: resolving a locator into an [`ImageBundle`].
//!
//! The default [`EagerBundleFactory`] loads both variants up front on the
//! calling thread: the plain image (required, failures propagate) and the
//! derived `@2x` image (optional, failures absorbed). It performs no
//! caching — repeated calls with the same locator re-read and re-decode
//! both variants. Hosts that want caching, lazy decoding, or a different
//! naming convention wrap or replace the factory through
//! [`ImageBundleFactory`]; the only contract is that bundle dimensions are
//! the logical layout size.

use std::io;

use tracing::debug;

use crate::bundle::ImageBundle;
use crate::error::{LoadError, LoadResult};
use crate::locator::Locator;
use crate::raster::Raster;

/// Resolves a locator into an image bundle.
///
/// This trait exists to facilitate caching, background loading and other
/// more involved strategies; the bundled implementation is deliberately
/// plain.
pub trait ImageBundleFactory {
    /// Load the plain and double-density image pair for `locator`.
    ///
    /// # Errors
    ///
    /// Fails only when the *plain* variant cannot be loaded or decoded.
    fn create(&self, locator: &Locator) -> LoadResult<ImageBundle>;
}

/// Fetches the raw bytes behind a locator.
///
/// The byte-fetching collaborator of [`EagerBundleFactory`]. The bundled
/// [`FsLoader`] resolves locators as filesystem paths; hosts with archive-
/// or network-backed assets implement this instead of a whole factory.
pub trait ResourceLoader {
    /// Read the full contents of the resource at `locator`.
    fn load(&self, locator: &Locator) -> io::Result<Vec<u8>>;
}

/// [`ResourceLoader`] that treats locators as filesystem paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl ResourceLoader for FsLoader {
    fn load(&self, locator: &Locator) -> io::Result<Vec<u8>> {
        std::fs::read(locator.as_path())
    }
}

/// The default factory: eager, synchronous, uncached.
///
/// Both loads block the calling thread for the duration of the I/O and
/// decode. Hosts that need the load off the rendering thread wrap this in a
/// decorator that marshals the finished bundle back.
#[derive(Debug, Clone, Copy, Default)]
pub struct EagerBundleFactory<L: ResourceLoader = FsLoader> {
    loader: L,
}

impl EagerBundleFactory<FsLoader> {
    /// Create a factory that loads from the filesystem.
    pub const fn new() -> Self {
        Self { loader: FsLoader }
    }
}

impl<L: ResourceLoader> EagerBundleFactory<L> {
    /// Create a factory over a custom resource loader.
    pub const fn with_loader(loader: L) -> Self {
        Self { loader }
    }

    fn load_raster(&self, locator: &Locator) -> LoadResult<Raster> {
        let bytes = self.loader.load(locator).map_err(|source| LoadError::Read {
            locator: locator.clone(),
            source,
        })?;
        Raster::from_bytes(&bytes).map_err(|source| LoadError::Decode {
            locator: locator.clone(),
            source,
        })
    }
}

impl<L: ResourceLoader> ImageBundleFactory for EagerBundleFactory<L> {
    fn create(&self, locator: &Locator) -> LoadResult<ImageBundle> {
        let plain = self.load_raster(locator)?;

        // Absence of a @2x asset is a normal, expected state. Any failure
        // on this path downgrades the bundle to plain-only.
        let retina_locator = locator.derive_high_density();
        let retina = match self.load_raster(&retina_locator) {
            Ok(raster) => Some(raster),
            Err(err) => {
                debug!("no usable @2x variant for `{locator}`: {err}");
                None
            }
        };

        Ok(ImageBundle::new(plain, retina))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::raster::test_support::png_bytes;

    /// In-memory loader mapping locator strings to encoded bytes.
    #[derive(Default)]
    struct MemoryLoader {
        resources: HashMap<String, Vec<u8>>,
    }

    impl MemoryLoader {
        fn insert(mut self, locator: &str, bytes: Vec<u8>) -> Self {
            self.resources.insert(locator.to_owned(), bytes);
            self
        }
    }

    impl ResourceLoader for MemoryLoader {
        fn load(&self, locator: &Locator) -> io::Result<Vec<u8>> {
            self.resources
                .get(locator.as_str())
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, locator.as_str().to_owned()))
        }
    }

    #[test]
    fn test_create_with_both_variants() {
        let loader = MemoryLoader::default()
            .insert("icon.png", png_bytes(8, 8))
            .insert("icon@2x.png", png_bytes(16, 16));
        let factory = EagerBundleFactory::with_loader(loader);

        let bundle = factory.create(&Locator::from("icon.png")).unwrap();
        assert_eq!(bundle.width(), 8);
        assert!(bundle.has_retina());
        assert_eq!(bundle.retina().unwrap().width(), 16);
    }

    #[test]
    fn test_missing_retina_is_absorbed() {
        let loader = MemoryLoader::default().insert("icon.png", png_bytes(8, 8));
        let factory = EagerBundleFactory::with_loader(loader);

        let bundle = factory.create(&Locator::from("icon.png")).unwrap();
        assert!(bundle.plain().is_some());
        assert!(!bundle.has_retina());
    }

    #[test]
    fn test_undecodable_retina_is_absorbed() {
        let loader = MemoryLoader::default()
            .insert("icon.png", png_bytes(8, 8))
            .insert("icon@2x.png", b"corrupt".to_vec());
        let factory = EagerBundleFactory::with_loader(loader);

        let bundle = factory.create(&Locator::from("icon.png")).unwrap();
        assert!(!bundle.has_retina());
    }

    #[test]
    fn test_missing_plain_is_fatal() {
        let factory = EagerBundleFactory::with_loader(MemoryLoader::default());

        let err = factory.create(&Locator::from("gone.png")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert_eq!(err.locator().as_str(), "gone.png");
    }

    #[test]
    fn test_undecodable_plain_is_fatal() {
        let loader = MemoryLoader::default().insert("icon.png", b"corrupt".to_vec());
        let factory = EagerBundleFactory::with_loader(loader);

        let err = factory.create(&Locator::from("icon.png")).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[test]
    fn test_dimensions_always_from_plain() {
        // Even with a wildly mis-sized @2x asset present.
        let loader = MemoryLoader::default()
            .insert("icon.png", png_bytes(10, 5))
            .insert("icon@2x.png", png_bytes(64, 64));
        let factory = EagerBundleFactory::with_loader(loader);

        let bundle = factory.create(&Locator::from("icon.png")).unwrap();
        assert_eq!(bundle.width(), 10);
        assert_eq!(bundle.height(), 5);
    }

    #[test]
    fn test_extension_less_locator_derives_appended_suffix() {
        let loader = MemoryLoader::default()
            .insert("icon", png_bytes(4, 4))
            .insert("icon@2x", png_bytes(8, 8));
        let factory = EagerBundleFactory::with_loader(loader);

        let bundle = factory.create(&Locator::from("icon")).unwrap();
        assert!(bundle.has_retina());
    }

    #[test]
    fn test_fs_loader_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let plain_path = dir.path().join("save.png");
        let retina_path = dir.path().join("save@2x.png");
        std::fs::write(&plain_path, png_bytes(12, 12)).unwrap();
        std::fs::write(&retina_path, png_bytes(24, 24)).unwrap();

        let factory = EagerBundleFactory::new();
        let bundle = factory.create(&Locator::from(plain_path.as_path())).unwrap();
        assert_eq!(bundle.width(), 12);
        assert!(bundle.has_retina());
    }
}
