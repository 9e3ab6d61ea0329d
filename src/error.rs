//! Error types for icon loading.

use thiserror::Error;

use crate::locator::Locator;

/// Errors that can occur while building an image bundle.
///
/// Only failures of the *plain* variant surface here. A missing or
/// undecodable `@2x` variant is a normal condition and is absorbed by the
/// factory, never reported.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The plain image resource could not be read.
    #[error("failed to read image resource `{locator}`: {source}")]
    Read {
        locator: Locator,
        #[source]
        source: std::io::Error,
    },

    /// The plain image resource could not be decoded.
    #[error("failed to decode image resource `{locator}`: {source}")]
    Decode {
        locator: Locator,
        #[source]
        source: image::ImageError,
    },
}

impl LoadError {
    /// The locator of the resource that failed to load.
    pub fn locator(&self) -> &Locator {
        match self {
            LoadError::Read { locator, .. } => locator,
            LoadError::Decode { locator, .. } => locator,
        }
    }
}

/// Result type for icon loading operations.
pub type LoadResult<T> = Result<T, LoadError>;
