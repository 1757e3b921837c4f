//! CSS string forms of byte-level colors.
//!
//! This module implements the emitting half of string interchange: pure,
//! stateless functions from RGBA bytes to the `rgb()`/`rgba()`,
//! `hsl()`/`hsla()`, and hashed hexadecimal notations, plus the
//! [canonical form](canonical_string) the rest of the crate prefers.
//!
//! The parsing half is deliberately absent. Resolving an arbitrary CSS
//! color string means implementing the full CSS color grammar, names and
//! all, and that job belongs to the [rendering surface](crate::Surface);
//! [`bytes_from_css`] only delegates to it.

use crate::error::{OutOfBoundsError, UnresolvableColorError};
use crate::surface::Surface;

/// Format an alpha byte as a CSS alpha value.
///
/// The fraction a/255 is rendered with 4 significant digits, which is just
/// enough to round-trip a byte (1/255 is about 0.0039). Trailing zeros are
/// trimmed, since CSS serialization has no use for them: 128 becomes
/// `0.502`, not `0.5020`.
fn format_alpha(a: u8) -> String {
    if a == 0 {
        return "0".to_string();
    }

    let alpha = f64::from(a) / 255.0;
    let digits: usize = if alpha >= 0.1 {
        4
    } else if alpha >= 0.01 {
        5
    } else {
        6
    };

    let mut formatted = format!("{alpha:.digits$}");
    while formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }
    formatted
}

/// Convert the four RGBA bytes to an `rgb()` or `rgba()` string.
///
/// An opaque color takes the three-component form; anything else appends
/// the alpha as a fraction with 4 significant digits.
///
/// ```
/// # use unicolor::css::rgba_string;
/// assert_eq!(rgba_string(255, 0, 0, 255), "rgb(255,0,0)");
/// assert_eq!(rgba_string(255, 0, 0, 128), "rgba(255,0,0,0.502)");
/// ```
pub fn rgba_string(r: u8, g: u8, b: u8, a: u8) -> String {
    if a == 255 {
        format!("rgb({r},{g},{b})")
    } else {
        format!("rgba({r},{g},{b},{})", format_alpha(a))
    }
}

/// Convert HSL coordinates to an `hsl()` or `hsla()` string.
///
/// The hue is in degrees; since 360 duplicates 0, callers wanting unique
/// strings should stay in 0..=359. Saturation and lightness are
/// percentages. The alpha byte branches and formats exactly as in
/// [`rgba_string`].
///
/// ```
/// # use unicolor::css::hsl_string;
/// assert_eq!(hsl_string(120, 100, 50, 255), "hsl(120,100%,50%)");
/// assert_eq!(hsl_string(120, 100, 50, 128), "hsla(120,100%,50%,0.502)");
/// ```
pub fn hsl_string(h: u16, s: u8, l: u8, a: u8) -> String {
    if a == 255 {
        format!("hsl({h},{s}%,{l}%)")
    } else {
        format!("hsla({h},{s}%,{l}%,{})", format_alpha(a))
    }
}

/// Emit the 4-character short hex form for three nibble values.
fn short_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:x}{g:x}{b:x}")
}

/// Convert the three RGB bytes to a hashed hexadecimal string.
///
/// With `short_ok`, channels that are all exact multiples of 17 (the 16
/// ramp values 0, 17, 34, through 255 that a single hex digit can express)
/// produce the 4-character `#rgb` form. Everything else produces the
/// 7-character `#rrggbb` form, zero-padded per channel. The test is exact
/// divisibility, never rounding: 16 and 18 are near the ramp but take the
/// long form. Hex notation carries no alpha; translucent colors belong to
/// [`rgba_string`].
///
/// ```
/// # use unicolor::css::hex_string;
/// assert_eq!(hex_string(255, 0, 0, true), "#f00");
/// assert_eq!(hex_string(255, 0, 0, false), "#ff0000");
/// assert_eq!(hex_string(10, 20, 30, true), "#0a141e");
/// ```
pub fn hex_string(r: u8, g: u8, b: u8, short_ok: bool) -> String {
    if short_ok && r % 17 == 0 && g % 17 == 0 && b % 17 == 0 {
        short_hex(r / 17, g / 17, b / 17)
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Convert three nibble values to the 4-character short hex form.
///
/// Each input must be at most 15; the emitted color is equivalent to the
/// inputs scaled by 17, so `hex_short_string(15, 0, 0)` denotes the same
/// color as `#ff0000`. [`hex_string`] performs the scaling test and
/// division for full byte values.
pub fn hex_short_string(r: u8, g: u8, b: u8) -> Result<String, OutOfBoundsError> {
    for value in [r, g, b] {
        if value > 15 {
            return Err(OutOfBoundsError::new(value, 0..=15));
        }
    }
    Ok(short_hex(r, g, b))
}

/// Convert the four RGBA bytes to the canonical string form.
///
/// The canonical form is a hybrid: hashed hexadecimal, short form
/// preferred, for opaque colors, and [`rgba_string`] for everything else.
/// It is the form [`Color`](crate::Color) caches.
///
/// ```
/// # use unicolor::css::canonical_string;
/// assert_eq!(canonical_string(255, 0, 0, 255), "#f00");
/// assert_eq!(canonical_string(255, 0, 0, 128), "rgba(255,0,0,0.502)");
/// ```
pub fn canonical_string(r: u8, g: u8, b: u8, a: u8) -> String {
    if a == 255 {
        hex_string(r, g, b, true)
    } else {
        rgba_string(r, g, b, a)
    }
}

/// Resolve an arbitrary CSS color string to its four RGBA bytes.
///
/// This function delegates entirely to the rendering surface: the string is
/// painted as a fill style and the resulting pixel read back. Delegation
/// sidesteps reimplementing the CSS color grammar here, at the price of
/// requiring a capable surface; see [`Surface`] for what capable means.
pub fn bytes_from_css<S: Surface>(
    surface: &mut S,
    css: &str,
) -> Result<[u8; 4], UnresolvableColorError> {
    surface.resolve(css)
}

// ====================================================================================================================
