use crate::css;
use crate::error::{ColorSourceError, OutOfBoundsError, UnresolvableColorError};
use crate::surface::Surface;

/// A color value with three coherent views.
///
/// Every color is four bytes, `r,g,b,a`, each in `0..=255` with 255 meaning
/// fully opaque. Those bytes are the single source of truth, read and
/// written through three views:
///
///   * the **byte view**, via [`as_bytes`](Color::as_bytes), the channel
///     accessors, and [`set_rgba`](Color::set_rgba);
///   * the **pixel view**, via [`pixel`](Color::pixel) and
///     [`set_pixel`](Color::set_pixel), which reinterprets the same four
///     bytes as one `u32` in the platform's storage order. It is a
///     reinterpretation, not a conversion, so the two views can never
///     disagree;
///   * the **string view**, via [`css_string`](Color::css_string), which
///     lazily computes the [canonical CSS form](css::canonical_string) and
///     caches it until the next mutation.
///
/// One value therefore serves raster pixel buffers, GPU vertex data, and
/// CSS-styled drawing without conversion layers in between.
///
/// # The string cache
///
/// The cached string always derives from the current bytes. Every mutating
/// method clears it first; the next [`css_string`](Color::css_string)
/// recomputes it. In particular, [`set_css`](Color::set_css) does *not*
/// store the input string: resolving `"red"` and asking for the string back
/// yields the canonical `"#f00"`. That normalization is deliberate: the
/// cache holds what this crate would emit, never what the caller happened
/// to type. [`cached_css`](Color::cached_css) exposes the cache state for
/// anyone who needs to observe the discipline.
///
/// # Equality
///
/// Two colors are equal when their packed pixels are bit-identical, which
/// compares all four bytes including alpha in one go. The string cache
/// never participates.
///
/// ```
/// # use unicolor::Color;
/// let mut color = Color::from_rgb(255, 0, 0);
/// assert_eq!(color.as_bytes(), &[255, 0, 0, 255]);
/// assert_eq!(color.pixel(), u32::from_ne_bytes([255, 0, 0, 255]));
/// assert_eq!(color.css_string(), "#f00");
///
/// color.set_rgba(10, 20, 30, 255);
/// assert_eq!(color.cached_css(), None);
/// assert_eq!(color.css_string(), "#0a141e");
/// ```
#[derive(Clone, Debug)]
pub struct Color {
    bytes: [u8; 4],
    css: Option<String>,
}

impl Color {
    /// Create a new opaque color from its three channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 255)
    }

    /// Create a new color from its four components.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            bytes: [r, g, b, a],
            css: None,
        }
    }

    /// Create a new color wrapping the caller's four bytes, in `r,g,b,a`
    /// order.
    ///
    /// This is the constructor for callers that already hold byte-level
    /// pixel data, say an entry of a decoded image. The four bytes live
    /// inline in the color, so nothing is allocated.
    pub const fn from_array(bytes: [u8; 4]) -> Self {
        Self { bytes, css: None }
    }

    /// Create a new color from a packed pixel.
    ///
    /// The pixel's bytes become the color's bytes in the platform's storage
    /// order, mirroring [`pixel`](Color::pixel).
    pub const fn from_pixel(pixel: u32) -> Self {
        Self::from_array(pixel.to_ne_bytes())
    }

    /// Create a new color by resolving a CSS color string.
    ///
    /// Any form the surface understands is fine: a name, hex, `rgb()`,
    /// `hsl()`, and so on. The surface reports strings it cannot resolve.
    ///
    /// ```
    /// # use unicolor::{Color, PaintSurface};
    /// # fn main() -> Result<(), unicolor::error::UnresolvableColorError> {
    /// let mut surface = PaintSurface::new();
    /// let lime = Color::from_css("hsl(120,100%,50%)", &mut surface)?;
    /// assert_eq!(lime.as_bytes(), &[0, 255, 0, 255]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_css<S: Surface>(
        css: &str,
        surface: &mut S,
    ) -> Result<Self, UnresolvableColorError> {
        surface.resolve(css).map(Self::from_array)
    }

    /// Create a new color from whatever shape of source the caller holds.
    ///
    /// This is the single dynamic entry point for boundaries where the
    /// source shape varies at runtime. Each [`ColorSource`] variant maps
    /// onto one of the named constructors: a pixel becomes the packed
    /// bytes, a 4-byte sequence wraps as is, a 3-byte sequence gets an
    /// opaque alpha, and a string resolves through the surface. A sequence
    /// of any other length is an error, as is an unresolvable string;
    /// either way no color is constructed.
    ///
    /// ```
    /// # use unicolor::{Color, ColorSource, PaintSurface};
    /// # fn main() -> Result<(), unicolor::error::ColorSourceError> {
    /// let mut surface = PaintSurface::new();
    /// let a = Color::try_from_source("red", &mut surface)?;
    /// let b = Color::try_from_source(&[255_u8, 0, 0], &mut surface)?;
    /// let c = Color::try_from_source(a.pixel(), &mut surface)?;
    /// assert!(a == b && b == c);
    /// # Ok(())
    /// # }
    /// ```
    pub fn try_from_source<'a, T, S>(source: T, surface: &mut S) -> Result<Self, ColorSourceError>
    where
        T: Into<ColorSource<'a>>,
        S: Surface,
    {
        match source.into() {
            ColorSource::Pixel(pixel) => Ok(Self::from_pixel(pixel)),
            ColorSource::Sequence(bytes) => match *bytes {
                [r, g, b] => Ok(Self::from_rgb(r, g, b)),
                [r, g, b, a] => Ok(Self::from_rgba(r, g, b, a)),
                _ => Err(OutOfBoundsError::new(bytes.len(), 3..=4).into()),
            },
            ColorSource::Css(css) => Ok(Self::from_css(css, surface)?),
        }
    }

    /// Create a new opaque color with uniformly random channels.
    ///
    /// The channels come from the thread-local generator, so two calls
    /// won't repeat. Code that needs reproducible colors, tests above all,
    /// should seed a generator and use [`random_with`](Color::random_with).
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Create a new opaque color with channels drawn from the given
    /// generator.
    pub fn random_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_rgb(rng.random(), rng.random(), rng.random())
    }

    /// Access the four bytes, in `r,g,b,a` order.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.bytes
    }

    /// Get the red channel.
    pub const fn r(&self) -> u8 {
        self.bytes[0]
    }

    /// Get the green channel.
    pub const fn g(&self) -> u8 {
        self.bytes[1]
    }

    /// Get the blue channel.
    pub const fn b(&self) -> u8 {
        self.bytes[2]
    }

    /// Get the alpha channel, 255 meaning fully opaque.
    pub const fn a(&self) -> u8 {
        self.bytes[3]
    }

    /// Get the packed pixel: the four bytes reinterpreted as one `u32` in
    /// the platform's storage order.
    pub const fn pixel(&self) -> u32 {
        u32::from_ne_bytes(self.bytes)
    }

    /// Access the cached canonical string, if one is currently cached.
    ///
    /// The cache is populated by [`css_string`](Color::css_string) and
    /// cleared by every mutation; this accessor observes that lifecycle
    /// without changing it.
    pub fn cached_css(&self) -> Option<&str> {
        self.css.as_deref()
    }

    /// Get the canonical CSS string for this color, computing and caching
    /// it on first use.
    ///
    /// Between mutations the method is idempotent: repeated calls return
    /// the identical cached string without recomputation.
    pub fn css_string(&mut self) -> &str {
        let [r, g, b, a] = self.bytes;
        self.css
            .get_or_insert_with(|| css::canonical_string(r, g, b, a))
            .as_str()
    }

    /// Overwrite all four components.
    pub fn set_rgba(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.invalidate();
        self.bytes = [r, g, b, a];
    }

    /// Overwrite the three color channels, making the color opaque.
    pub fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.set_rgba(r, g, b, 255);
    }

    /// Overwrite the color through the pixel view.
    ///
    /// Equivalent to overwriting all four bytes with the pixel's byte
    /// decomposition in the platform's storage order.
    pub fn set_pixel(&mut self, pixel: u32) {
        self.invalidate();
        self.bytes = pixel.to_ne_bytes();
    }

    /// Overwrite the color by resolving a CSS color string.
    ///
    /// The string resolves before anything is written, so a failed call
    /// leaves the color, bytes and cache alike, exactly as it was. On
    /// success the cache is cleared, not set to the input: the next
    /// [`css_string`](Color::css_string) yields the canonical form of the
    /// resolved bytes, which may differ textually from `css`.
    pub fn set_css<S: Surface>(
        &mut self,
        css: &str,
        surface: &mut S,
    ) -> Result<(), UnresolvableColorError> {
        let [r, g, b, a] = surface.resolve(css)?;
        self.set_rgba(r, g, b, a);
        Ok(())
    }

    /// Housekeeping when the color is about to change.
    fn invalidate(&mut self) {
        self.css = None;
    }

    /// Calculate the perceptually weighted distance to the given RGB
    /// channels.
    ///
    /// The metric is the squared channel differences with the red and blue
    /// weights varying by the mean red level and green fixed at 4×, an
    /// inexpensive approximation of perceptual non-uniformity. The square
    /// root is omitted since nearest-color searches only compare relative
    /// magnitudes. The exact integer arithmetic is part of this method's
    /// contract: lookup tables computed against it remain valid across
    /// versions. Alpha does not participate.
    ///
    /// ```
    /// # use unicolor::Color;
    /// let black = Color::from_rgb(0, 0, 0);
    /// assert_eq!(black.rgb_distance(0, 0, 0), 0);
    /// assert!(black.rgb_distance(255, 255, 255) > black.rgb_distance(1, 1, 1));
    /// ```
    pub fn rgb_distance(&self, r: u8, g: u8, b: u8) -> u32 {
        let (r1, g1, b1) = (
            i32::from(self.bytes[0]),
            i32::from(self.bytes[1]),
            i32::from(self.bytes[2]),
        );
        let (r2, g2, b2) = (i32::from(r), i32::from(g), i32::from(b));

        // Rounded mean; the sum is non-negative, so +1 then halving rounds
        // halves up.
        let r_mean = (r1 + r2 + 1) / 2;
        let (dr, dg, db) = (r1 - r2, g1 - g2, b1 - b2);

        let distance = (((512 + r_mean) * dr * dr) >> 8)
            + 4 * dg * dg
            + (((767 - r_mean) * db * db) >> 8);
        distance as u32
    }
}

impl PartialEq for Color {
    /// Compare the packed pixels, which covers all four bytes including
    /// alpha. The string cache is a derived value and never participates.
    fn eq(&self, other: &Self) -> bool {
        self.pixel() == other.pixel()
    }
}

impl Eq for Color {}

impl std::ops::Index<usize> for Color {
    type Output = u8;

    /// Access the component with the given index, `r,g,b,a` order.
    ///
    /// # Panics
    ///
    /// This method panics if `3 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.bytes[index]
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Self::from_array(value)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_pixel(value)
    }
}

impl std::fmt::Display for Color {
    /// Format the canonical CSS string for this color.
    ///
    /// Unlike [`css_string`](Color::css_string), formatting computes the
    /// string fresh and leaves the cache untouched, since `Display` works
    /// through a shared reference.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.bytes;
        f.write_str(&css::canonical_string(r, g, b, a))
    }
}

// ====================================================================================================================

/// A source value a color can be constructed from.
///
/// This type is the boundary between callers holding run-time-shaped data
/// and the closed set of constructors on [`Color`]. The `From`
/// implementations cover packed pixels, byte slices and arrays, and CSS
/// strings, so most call sites can pass their value straight to
/// [`Color::try_from_source`].
#[derive(Clone, Copy, Debug)]
pub enum ColorSource<'a> {
    /// A packed pixel.
    Pixel(u32),

    /// A byte sequence, `r,g,b` or `r,g,b,a`.
    Sequence(&'a [u8]),

    /// A CSS color string.
    Css(&'a str),
}

impl From<u32> for ColorSource<'_> {
    fn from(value: u32) -> Self {
        ColorSource::Pixel(value)
    }
}

impl<'a> From<&'a [u8]> for ColorSource<'a> {
    fn from(value: &'a [u8]) -> Self {
        ColorSource::Sequence(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ColorSource<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        ColorSource::Sequence(value)
    }
}

impl<'a> From<&'a str> for ColorSource<'a> {
    fn from(value: &'a str) -> Self {
        ColorSource::Css(value)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, ColorSource};
    use crate::error::ColorSourceError;
    use crate::surface::FakeSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_byte_view() {
        let color = Color::from_rgba(1, 2, 3, 4);
        assert_eq!(color.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!((color.r(), color.g(), color.b(), color.a()), (1, 2, 3, 4));
        assert_eq!(color[0], 1);
        assert_eq!(color[3], 4);
        assert_eq!(Color::from_rgb(9, 8, 7).a(), 255);
    }

    #[test]
    fn test_view_coherence() {
        // The pixel view is a reinterpretation of the byte view, so each
        // must observe writes through the other exactly.
        let mut color = Color::from_rgb(0, 0, 0);
        for pixel in [0, 1, 0xdead_beef, 0x0102_0304, u32::MAX] {
            color.set_pixel(pixel);
            assert_eq!(color.pixel(), pixel);
            assert_eq!(color.as_bytes(), &pixel.to_ne_bytes());
        }

        let color = Color::from_rgba(11, 22, 33, 44);
        assert_eq!(color.pixel(), u32::from_ne_bytes([11, 22, 33, 44]));
        assert_eq!(
            Color::from_pixel(0xcafe_f00d).as_bytes(),
            &0xcafe_f00d_u32.to_ne_bytes()
        );
    }

    #[test]
    fn test_string_caching() {
        let mut color = Color::from_rgb(255, 0, 0);
        assert_eq!(color.cached_css(), None);

        let first = color.css_string().to_string();
        assert_eq!(first, "#f00");
        assert_eq!(color.cached_css(), Some("#f00"));
        assert_eq!(color.css_string(), first);

        color.set_rgba(10, 20, 30, 255);
        assert_eq!(color.cached_css(), None);
        assert_eq!(color.css_string(), "#0a141e");

        color.set_pixel(u32::from_ne_bytes([255, 0, 0, 128]));
        assert_eq!(color.cached_css(), None);
        assert_eq!(color.css_string(), "rgba(255,0,0,0.502)");
    }

    #[test]
    fn test_set_css_normalizes() {
        let mut color = Color::from_rgb(0, 0, 0);
        color
            .set_css("red", &mut FakeSurface)
            .expect("fake surface resolves red");

        // The cache holds the canonical rendering of the resolved bytes,
        // never the input text.
        assert_eq!(color.cached_css(), None);
        assert_eq!(color.css_string(), "#f00");
    }

    #[test]
    fn test_failed_set_css_preserves_state() {
        let mut color = Color::from_rgb(10, 20, 30);
        assert_eq!(color.css_string(), "#0a141e");

        let error = color
            .set_css("bluish", &mut FakeSurface)
            .expect_err("fake surface rejects bluish");
        assert_eq!(error.color(), "bluish");
        assert_eq!(color.as_bytes(), &[10, 20, 30, 255]);
        assert_eq!(color.cached_css(), Some("#0a141e"));
    }

    #[test]
    fn test_equality() {
        assert_eq!(Color::from_rgba(1, 2, 3, 4), Color::from_rgba(1, 2, 3, 4));
        assert_ne!(Color::from_rgba(1, 2, 3, 4), Color::from_rgba(0, 2, 3, 4));
        assert_ne!(Color::from_rgba(1, 2, 3, 4), Color::from_rgba(1, 0, 3, 4));
        assert_ne!(Color::from_rgba(1, 2, 3, 4), Color::from_rgba(1, 2, 0, 4));
        assert_ne!(Color::from_rgba(1, 2, 3, 4), Color::from_rgba(1, 2, 3, 0));

        // Caching a string does not affect equality.
        let mut cached = Color::from_rgba(1, 2, 3, 4);
        let _ = cached.css_string();
        assert_eq!(cached, Color::from_rgba(1, 2, 3, 4));
    }

    #[test]
    fn test_distance() {
        let black = Color::from_rgb(0, 0, 0);
        assert_eq!(black.rgb_distance(0, 0, 0), 0);

        // Reference values pin the exact arithmetic.
        assert_eq!(black.rgb_distance(255, 255, 255), 584_970);
        assert_eq!(Color::from_rgb(10, 10, 10).rgb_distance(11, 11, 11), 8);

        // Far apart dwarfs nearly identical.
        assert!(black.rgb_distance(255, 255, 255) > 1_000 * Color::from_rgb(10, 10, 10).rgb_distance(11, 11, 11));

        // The rounded mean makes the metric symmetric.
        let (a, b) = (Color::from_rgb(200, 10, 90), Color::from_rgb(13, 240, 7));
        assert_eq!(a.rgb_distance(13, 240, 7), b.rgb_distance(200, 10, 90));

        // Alpha never participates.
        assert_eq!(
            Color::from_rgba(5, 5, 5, 0).rgb_distance(5, 5, 5),
            0
        );
    }

    #[test]
    fn test_sources() -> Result<(), ColorSourceError> {
        let mut surface = FakeSurface;

        let from_css = Color::try_from_source("red", &mut surface)?;
        assert_eq!(from_css.as_bytes(), &[255, 0, 0, 255]);

        let from_triple = Color::try_from_source(&[255_u8, 0, 0], &mut surface)?;
        assert_eq!(from_triple.as_bytes(), &[255, 0, 0, 255]);

        let from_quad = Color::try_from_source(&[255_u8, 0, 0, 128], &mut surface)?;
        assert_eq!(from_quad.as_bytes(), &[255, 0, 0, 128]);

        let from_pixel = Color::try_from_source(from_css.pixel(), &mut surface)?;
        assert_eq!(from_pixel, from_css);

        let slice: &[u8] = &[1, 2, 3, 4];
        assert_eq!(
            Color::try_from_source(slice, &mut surface)?,
            Color::from_rgba(1, 2, 3, 4)
        );

        Ok(())
    }

    #[test]
    fn test_source_errors() {
        let mut surface = FakeSurface;

        let error = Color::try_from_source(&[1_u8, 2][..], &mut surface)
            .expect_err("two bytes are too few");
        assert!(matches!(
            error,
            ColorSourceError::Sequence(ref bounds)
                if bounds.value == 2 && bounds.expected == (3..=4)
        ));

        let error = Color::try_from_source(ColorSource::Css("bluish"), &mut surface)
            .expect_err("fake surface rejects bluish");
        assert!(matches!(error, ColorSourceError::Css(_)));
    }

    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let first = Color::random_with(&mut rng);
        assert_eq!(first.a(), 255);

        let mut rng = StdRng::seed_from_u64(0x5eed);
        assert_eq!(Color::random_with(&mut rng), first);

        assert_eq!(Color::random().a(), 255);
    }

    #[test]
    fn test_display() {
        let color = Color::from_rgb(255, 0, 0);
        assert_eq!(format!("{color}"), "#f00");
        assert_eq!(color.cached_css(), None);
        assert_eq!(
            format!("{}", Color::from_rgba(255, 0, 0, 128)),
            "rgba(255,0,0,0.502)"
        );
    }
}
