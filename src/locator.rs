//! Resource locators and the `@2x` naming convention.
//!
//! A [`Locator`] identifies the plain-resolution image asset. The
//! high-resolution counterpart is never supplied separately; it is derived
//! by inserting the `@2x` token before the final extension:
//!
//! - `icons/save.png` → `icons/save@2x.png`
//! - `icons/save` → `icons/save@2x`
//!
//! This is the only contract an asset packager has to follow to ship
//! high-resolution imagery; no manifest or metadata file is consulted.

use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix token marking a double-density asset.
pub const HIGH_DENSITY_SUFFIX: &str = "@2x";

/// An opaque identifier for an image asset.
///
/// The locator's string form is interpreted by whichever
/// [`ResourceLoader`](crate::ResourceLoader) resolves it; the bundled
/// [`FsLoader`](crate::FsLoader) treats it as a filesystem path.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Locator(String);

impl Locator {
    /// Create a locator from its string form.
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// The locator's string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The locator interpreted as a filesystem path.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Derive the locator of the double-density counterpart.
    ///
    /// The `@2x` token is inserted immediately before the last `.` of the
    /// string form, or appended when the locator has no extension separator.
    /// The split point is the last dot of the *whole* string, matching the
    /// packaging convention rather than any path-aware extension parsing.
    pub fn derive_high_density(&self) -> Locator {
        match self.0.rfind('.') {
            Some(dot) => {
                let (stem, ext) = self.0.split_at(dot);
                Locator(format!("{stem}{HIGH_DENSITY_SUFFIX}{ext}"))
            }
            None => Locator(format!("{}{HIGH_DENSITY_SUFFIX}", self.0)),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Locator({:?})", self.0)
    }
}

impl From<&str> for Locator {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Locator {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&Path> for Locator {
    fn from(p: &Path) -> Self {
        Self(p.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for Locator {
    fn from(p: PathBuf) -> Self {
        Self::from(p.as_path())
    }
}
