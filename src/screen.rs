//! Display surface descriptions and enumeration.
//!
//! Screen enumeration itself belongs to the host: the windowing layer knows
//! which monitors are attached and what their scale factors are. This module
//! defines the [`Screen`] value that density classification operates on, and
//! the [`ScreenProvider`] seam through which hosts supply attached screens.
//!
//! # winit integration
//!
//! winit is the official scale-factor source on every desktop platform
//! (`GetDpiForMonitor` on Windows, `NSScreen.backingScaleFactor` on macOS,
//! XRandR/Wayland on Linux). A host that already runs a winit event loop can
//! adapt its monitors directly:
//!
//! ```ignore
//! use retina_icon::{MonitorScreens, density};
//!
//! let screens = MonitorScreens::new(window.available_monitors());
//! if density::any_high_density(&screens) {
//!     // preload @2x assets
//! }
//! ```

use thiserror::Error;
use winit::monitor::MonitorHandle;

/// Error type for screen enumeration.
///
/// Density classification swallows these (a screen that cannot be
/// enumerated classifies as standard density); they are public so that
/// hosts querying [`ScreenProvider`] directly can still report them.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The platform reported a failure while enumerating screens.
    #[error("screen enumeration failed: {0}")]
    Enumeration(String),

    /// Screen information is not available on this platform.
    #[error("screen information is not available on this platform")]
    Unsupported,
}

/// Description of one attached display surface.
///
/// A `Screen` is a snapshot: scale factors change when windows move between
/// monitors or the user adjusts display settings, so callers re-query their
/// [`ScreenProvider`] rather than holding screens long-term.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// Human-readable name (e.g. "Dell U2720Q" or "Display 1").
    name: String,
    /// DPI scale factor (1.0 = standard, 2.0 = Retina/HiDPI at 200%).
    /// `None` when the platform cannot report it.
    scale_factor: Option<f64>,
    /// Whether this is the primary screen.
    is_primary: bool,
}

impl Screen {
    /// Create a screen description with an unknown scale factor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scale_factor: None,
            is_primary: false,
        }
    }

    /// Set the reported scale factor (builder pattern).
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    /// Mark this screen as the primary screen (builder pattern).
    #[must_use]
    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    /// Adapt a winit monitor into a screen description.
    ///
    /// winit always reports a scale factor, so the result never has an
    /// unknown scale. Monitors without a name become "Unknown display".
    pub fn from_monitor(monitor: &MonitorHandle) -> Self {
        Self {
            name: monitor
                .name()
                .unwrap_or_else(|| String::from("Unknown display")),
            scale_factor: Some(monitor.scale_factor()),
            is_primary: false,
        }
    }

    /// The human-readable name of the screen.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The DPI scale factor, if the platform reported one.
    ///
    /// Returns 1.0 for standard density and 2.0 for Retina/HiDPI displays
    /// at 200% scaling. `None` means the attribute was absent or
    /// inaccessible; density classification treats that as standard.
    pub fn scale_factor(&self) -> Option<f64> {
        self.scale_factor
    }

    /// Whether this is the primary screen.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

/// Source of the currently attached screens.
///
/// This is the platform capability seam: the default winit-backed
/// implementation is [`MonitorScreens`], tests use plain `Vec<Screen>`
/// fixtures, and embedded hosts can wire in whatever their display stack
/// reports.
pub trait ScreenProvider {
    /// Enumerate the currently attached screens.
    fn screens(&self) -> Result<Vec<Screen>, ScreenError>;
}

impl ScreenProvider for Vec<Screen> {
    fn screens(&self) -> Result<Vec<Screen>, ScreenError> {
        Ok(self.clone())
    }
}

impl ScreenProvider for [Screen] {
    fn screens(&self) -> Result<Vec<Screen>, ScreenError> {
        Ok(self.to_vec())
    }
}

impl<P: ScreenProvider + ?Sized> ScreenProvider for &P {
    fn screens(&self) -> Result<Vec<Screen>, ScreenError> {
        (**self).screens()
    }
}

/// [`ScreenProvider`] backed by winit monitor handles.
///
/// Construct from `Window::available_monitors()` or
/// `ActiveEventLoop::available_monitors()`.
#[derive(Debug, Clone)]
pub struct MonitorScreens {
    monitors: Vec<MonitorHandle>,
}

impl MonitorScreens {
    /// Wrap a set of winit monitors.
    pub fn new(monitors: impl IntoIterator<Item = MonitorHandle>) -> Self {
        Self {
            monitors: monitors.into_iter().collect(),
        }
    }
}

impl ScreenProvider for MonitorScreens {
    fn screens(&self) -> Result<Vec<Screen>, ScreenError> {
        Ok(self.monitors.iter().map(Screen::from_monitor).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_defaults() {
        let screen = Screen::new("Display 1");
        assert_eq!(screen.name(), "Display 1");
        assert_eq!(screen.scale_factor(), None);
        assert!(!screen.is_primary());
    }

    #[test]
    fn test_screen_builder() {
        let screen = Screen::new("Built-in Retina Display")
            .with_scale_factor(2.0)
            .with_primary(true);
        assert_eq!(screen.scale_factor(), Some(2.0));
        assert!(screen.is_primary());
    }

    #[test]
    fn test_vec_provider_returns_snapshot() {
        let screens = vec![
            Screen::new("A").with_scale_factor(1.0),
            Screen::new("B").with_scale_factor(2.0),
        ];
        let enumerated = screens.screens().unwrap();
        assert_eq!(enumerated.len(), 2);
        assert_eq!(enumerated[1].scale_factor(), Some(2.0));
    }

    #[test]
    fn test_slice_provider() {
        let screens = [Screen::new("only")];
        let enumerated = screens[..].screens().unwrap();
        assert_eq!(enumerated.len(), 1);
    }
}
