//! The rendering surface that resolves CSS color strings.

use crate::error::UnresolvableColorError;

/// A trait to abstract over the surface that resolves color strings.
///
/// CSS color strings vary widely: `CadetBlue`, `#0f0`, `rgb(255,0,0)`,
/// `hsl(120,100%,50%)`. Rather than parse them, this crate lets a rendering
/// surface do the work: paint a single pixel with the string as fill style,
/// then read the pixel back. Any substitute implementation must accept the
/// full legal CSS color grammar, from the named colors through short and
/// long hex to `rgb()`/`rgba()` and `hsl()`/`hsla()`, and return byte-exact
/// RGBA.
///
/// Resolution mutates the surface and reads it back in one step, so the
/// method takes `&mut self`: the surface is an exclusively owned scratch
/// resource, and the borrow rules keep two resolutions from interleaving.
/// An embedding that shares one surface across threads must add its own
/// lock.
pub trait Surface {
    /// Resolve the CSS color string to its four RGBA bytes.
    fn resolve(&mut self, css: &str) -> Result<[u8; 4], UnresolvableColorError>;
}

// ====================================================================================================================

/// A surface backed by a 1×1 [`Canvas`](unicanvas::Canvas).
///
/// The canvas is allocated once and reused for every resolution, which is
/// the intended way of using this type: create one surface and keep it
/// around. Each resolution clears the pixel before painting, so a
/// translucent fill reads back as itself instead of compositing with the
/// previous resolution.
///
/// ```
/// # use unicolor::{PaintSurface, Surface};
/// # fn main() -> Result<(), unicolor::error::UnresolvableColorError> {
/// let mut surface = PaintSurface::new();
/// assert_eq!(surface.resolve("cadetblue")?, [95, 158, 160, 255]);
/// assert_eq!(surface.resolve("rgba(255,0,0,0.5)")?, [255, 0, 0, 128]);
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "paint")]
#[derive(Clone, Debug)]
pub struct PaintSurface {
    canvas: unicanvas::Canvas,
}

#[cfg(feature = "paint")]
impl PaintSurface {
    /// Create a new paint surface.
    pub fn new() -> Self {
        Self {
            canvas: unicanvas::Canvas::new(1, 1),
        }
    }
}

#[cfg(feature = "paint")]
impl Default for PaintSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "paint")]
impl Surface for PaintSurface {
    fn resolve(&mut self, css: &str) -> Result<[u8; 4], UnresolvableColorError> {
        self.canvas.clear_rect(0, 0, 1, 1);
        self.canvas
            .set_fill_style(css)
            .map_err(|error| UnresolvableColorError::with_source(css, error))?;
        self.canvas.fill_rect(0, 0, 1, 1);
        Ok(self.canvas.pixel(0, 0))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Surface;
    use crate::error::UnresolvableColorError;

    /// A surface with a tiny hard-coded vocabulary, for exercising the color
    /// core without the real grammar.
    pub(crate) struct FakeSurface;

    impl Surface for FakeSurface {
        fn resolve(&mut self, css: &str) -> Result<[u8; 4], UnresolvableColorError> {
            match css {
                "red" => Ok([255, 0, 0, 255]),
                "cadetblue" => Ok([95, 158, 160, 255]),
                "#0f0" => Ok([0, 255, 0, 255]),
                "rgba(255,0,0,0.5)" => Ok([255, 0, 0, 128]),
                _ => Err(UnresolvableColorError::new(css)),
            }
        }
    }

    #[cfg(feature = "paint")]
    mod paint {
        use super::super::{PaintSurface, Surface};
        use crate::css::hex_string;
        use crate::error::UnresolvableColorError;

        #[test]
        fn test_resolve_forms() -> Result<(), UnresolvableColorError> {
            let mut surface = PaintSurface::new();
            assert_eq!(surface.resolve("red")?, [255, 0, 0, 255]);
            assert_eq!(surface.resolve("CadetBlue")?, [95, 158, 160, 255]);
            assert_eq!(surface.resolve("#0f0")?, [0, 255, 0, 255]);
            assert_eq!(surface.resolve("#ff10a0")?, [255, 16, 160, 255]);
            assert_eq!(surface.resolve("rgb(255, 0, 0)")?, [255, 0, 0, 255]);
            assert_eq!(surface.resolve("hsl(120, 100%, 50%)")?, [0, 255, 0, 255]);
            Ok(())
        }

        #[test]
        fn test_resolutions_do_not_composite() -> Result<(), UnresolvableColorError> {
            // The shared pixel is cleared between resolutions, so painting a
            // translucent color after an opaque one reads back the
            // translucent color itself, not a blend.
            let mut surface = PaintSurface::new();
            surface.resolve("blue")?;
            assert_eq!(surface.resolve("rgba(255,0,0,0.5)")?, [255, 0, 0, 128]);
            Ok(())
        }

        #[test]
        fn test_unresolvable() {
            let mut surface = PaintSurface::new();
            let error = surface
                .resolve("no-such-color")
                .expect_err("nonsense should not resolve");
            assert_eq!(error.color(), "no-such-color");
            assert!(std::error::Error::source(&error).is_some());
        }

        #[test]
        fn test_ramp_round_trip() -> Result<(), UnresolvableColorError> {
            // Every all-ramp color takes the short hex form, and resolving
            // that form recovers the exact bytes.
            let mut surface = PaintSurface::new();
            for r in (0..=255_u16).step_by(17) {
                for g in (0..=255_u16).step_by(17) {
                    for b in (0..=255_u16).step_by(17) {
                        let (r, g, b) = (r as u8, g as u8, b as u8);
                        let hex = hex_string(r, g, b, true);
                        assert_eq!(hex.len(), 4, "ramp color should be short: {hex}");
                        assert_eq!(surface.resolve(&hex)?, [r, g, b, 255]);
                    }
                }
            }
            Ok(())
        }

        #[test]
        fn test_long_hex_round_trip() -> Result<(), UnresolvableColorError> {
            let mut surface = PaintSurface::new();
            for (r, g, b) in [(10, 20, 30), (1, 2, 3), (200, 100, 50), (254, 0, 255)] {
                let hex = hex_string(r, g, b, true);
                assert_eq!(hex.len(), 7, "non-ramp color should be long: {hex}");
                assert_eq!(surface.resolve(&hex)?, [r, g, b, 255]);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
pub(crate) use test::FakeSurface;
