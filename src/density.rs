//! Display-density classification.
//!
//! A display surface is *high-density* when it reports a scale factor
//! exactly equal to the 2x sentinel ([`HIGH_DENSITY_SCALE`]). Everything
//! else — standard scales, fractional scales, unknown or unreported scales,
//! and any enumeration failure — classifies as standard density. The
//! fail-closed default matters: painting a plain image on a HiDPI display
//! is merely blurry, while painting a half-scaled image on a standard
//! display is wrong.
//!
//! Density is recomputed on every query. Surfaces change (a window dragged
//! to a different monitor, a display setting toggled), so no classification
//! is ever cached here.

use tracing::debug;

use crate::paint::IconPainter;
use crate::screen::{Screen, ScreenProvider};

/// Scale factor that classifies a surface as high-density.
pub const HIGH_DENSITY_SCALE: f64 = 2.0;

/// Whether a specific display surface is high-density.
///
/// True only when the screen reports a scale factor exactly equal to
/// [`HIGH_DENSITY_SCALE`]. An unreported scale factor classifies as
/// standard density.
pub fn is_high_density(screen: &Screen) -> bool {
    screen.scale_factor() == Some(HIGH_DENSITY_SCALE)
}

/// Whether *any* currently attached display surface is high-density.
///
/// Environment-level query, independent of any particular render target.
/// Enumeration failures are swallowed and classify as standard density.
pub fn any_high_density(provider: &impl ScreenProvider) -> bool {
    match provider.screens() {
        Ok(screens) => screens.iter().any(is_high_density),
        Err(err) => {
            debug!("screen enumeration failed, assuming standard density: {err}");
            false
        }
    }
}

/// Whether a paint target is bound to a high-density surface.
///
/// Painters that are not bound to a graphics-capable display (offscreen
/// buffers, printers, unbound contexts) report no screen and classify as
/// standard density.
pub fn target_is_high_density(painter: &dyn IconPainter) -> bool {
    match painter.target_screen() {
        Some(screen) => is_high_density(&screen),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ScreenError;

    #[test]
    fn test_scale_two_is_high_density() {
        let screen = Screen::new("retina").with_scale_factor(2.0);
        assert!(is_high_density(&screen));
    }

    #[test]
    fn test_other_scales_are_standard() {
        for scale in [1.0, 1.25, 1.5, 1.9999, 2.5, 3.0] {
            let screen = Screen::new("plain").with_scale_factor(scale);
            assert!(!is_high_density(&screen), "scale {scale} must be standard");
        }
    }

    #[test]
    fn test_unknown_scale_is_standard() {
        assert!(!is_high_density(&Screen::new("mystery")));
    }

    #[test]
    fn test_any_high_density_finds_one_among_many() {
        let screens = vec![
            Screen::new("a").with_scale_factor(1.0),
            Screen::new("b").with_scale_factor(2.0),
            Screen::new("c").with_scale_factor(1.5),
        ];
        assert!(any_high_density(&screens));
    }

    #[test]
    fn test_any_high_density_all_standard() {
        let screens = vec![
            Screen::new("a").with_scale_factor(1.0),
            Screen::new("b"),
        ];
        assert!(!any_high_density(&screens));
    }

    #[test]
    fn test_any_high_density_no_screens() {
        let screens: Vec<Screen> = Vec::new();
        assert!(!any_high_density(&screens));
    }

    struct BrokenProvider;

    impl ScreenProvider for BrokenProvider {
        fn screens(&self) -> Result<Vec<Screen>, ScreenError> {
            Err(ScreenError::Enumeration(String::from("display server gone")))
        }
    }

    #[test]
    fn test_enumeration_failure_classifies_standard() {
        assert!(!any_high_density(&BrokenProvider));
    }
}
