use crate::err::ColorParseError;
use crate::named;

/// Parse a 24-bit or 32-bit color in hashed hexadecimal format. Single-digit
/// coordinates duplicate their nibble, so `#f00` equals `#ff0000`.
fn parse_hashed(s: &str) -> Result<[u8; 4], ColorParseError> {
    fn digit(s: &str, index: usize) -> Result<u8, ColorParseError> {
        let t = s
            .get(index..index + 1)
            .ok_or(ColorParseError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorParseError::MalformedHex)?;
        Ok(17 * n)
    }

    fn pair(s: &str, index: usize) -> Result<u8, ColorParseError> {
        let t = s
            .get(index..index + 2)
            .ok_or(ColorParseError::UnexpectedCharacters)?;
        u8::from_str_radix(t, 16).map_err(|_| ColorParseError::MalformedHex)
    }

    let digits = &s[1..];
    match digits.len() {
        3 => Ok([digit(digits, 0)?, digit(digits, 1)?, digit(digits, 2)?, 255]),
        4 => Ok([
            digit(digits, 0)?,
            digit(digits, 1)?,
            digit(digits, 2)?,
            digit(digits, 3)?,
        ]),
        6 => Ok([pair(digits, 0)?, pair(digits, 2)?, pair(digits, 4)?, 255]),
        8 => Ok([
            pair(digits, 0)?,
            pair(digits, 2)?,
            pair(digits, 4)?,
            pair(digits, 6)?,
        ]),
        _ => Err(ColorParseError::UnexpectedCharacters),
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Split a function body into three components plus an optional alpha. Both
/// the legacy comma syntax and the modern space syntax with `/` alpha are
/// recognized.
fn split_components(body: &str) -> Result<(&str, &str, &str, Option<&str>), ColorParseError> {
    if body.contains(',') {
        let mut iter = body.split(',').map(str::trim);
        let c1 = iter.next().ok_or(ColorParseError::MissingComponent)?;
        let c2 = iter.next().ok_or(ColorParseError::MissingComponent)?;
        let c3 = iter.next().ok_or(ColorParseError::MissingComponent)?;
        let alpha = iter.next();
        if iter.next().is_some() {
            return Err(ColorParseError::TooManyComponents);
        }
        Ok((c1, c2, c3, alpha))
    } else {
        let (channels, alpha) = match body.split_once('/') {
            Some((channels, alpha)) => (channels, Some(alpha.trim())),
            None => (body, None),
        };
        let mut iter = channels.split_whitespace();
        let c1 = iter.next().ok_or(ColorParseError::MissingComponent)?;
        let c2 = iter.next().ok_or(ColorParseError::MissingComponent)?;
        let c3 = iter.next().ok_or(ColorParseError::MissingComponent)?;
        if iter.next().is_some() {
            return Err(ColorParseError::TooManyComponents);
        }
        Ok((c1, c2, c3, alpha))
    }
}

/// Scale a unit fraction to a byte.
fn scale(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parse a color channel, either a number in 0..=255 or a percentage.
/// Out-of-range values clamp rather than fail, as they do in CSS.
fn parse_channel(t: &str) -> Result<u8, ColorParseError> {
    if let Some(p) = t.strip_suffix('%') {
        let v: f64 = p.parse().map_err(|_| ColorParseError::MalformedNumber)?;
        Ok(scale(v / 100.0))
    } else {
        let v: f64 = t.parse().map_err(|_| ColorParseError::MalformedNumber)?;
        Ok(v.clamp(0.0, 255.0).round() as u8)
    }
}

/// Parse an alpha component, either a number in 0..=1 or a percentage.
fn parse_alpha(t: &str) -> Result<u8, ColorParseError> {
    if let Some(p) = t.strip_suffix('%') {
        let v: f64 = p.parse().map_err(|_| ColorParseError::MalformedNumber)?;
        Ok(scale(v / 100.0))
    } else {
        let v: f64 = t.parse().map_err(|_| ColorParseError::MalformedNumber)?;
        Ok(scale(v))
    }
}

/// Parse a hue in degrees. The `deg` unit is optional and any magnitude is
/// legal; the conversion wraps it into one turn.
fn parse_hue(t: &str) -> Result<f64, ColorParseError> {
    let t = t.strip_suffix("deg").unwrap_or(t);
    t.parse().map_err(|_| ColorParseError::MalformedNumber)
}

/// Parse saturation or lightness as a unit fraction. The `%` sign is
/// canonical but tolerated as absent.
fn parse_fraction(t: &str) -> Result<f64, ColorParseError> {
    let t = t.strip_suffix('%').unwrap_or(t);
    let v: f64 = t.parse().map_err(|_| ColorParseError::MalformedNumber)?;
    Ok((v / 100.0).clamp(0.0, 1.0))
}

/// Convert HSL coordinates to RGB bytes. Hue is in degrees, saturation and
/// lightness are unit fractions. Each channel rounds to the nearest byte, so
/// the primaries come out exact: `hsl(120,100%,50%)` is `0,255,0`.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    fn sector(p: f64, q: f64, t: f64) -> f64 {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    if s <= 0.0 {
        let v = scale(l);
        return [v, v, v];
    }

    let h = h.rem_euclid(360.0) / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        scale(sector(p, q, h + 1.0 / 3.0)),
        scale(sector(p, q, h)),
        scale(sector(p, q, h - 1.0 / 3.0)),
    ]
}

/// Parse an `rgb()`, `rgba()`, `hsl()`, or `hsla()` function. The `a`-suffixed
/// names are plain aliases; every function accepts an optional alpha.
fn parse_function(s: &str) -> Result<[u8; 4], ColorParseError> {
    // Munge the function name
    let (is_hsl, rest) = s
        .strip_prefix("rgba")
        .or_else(|| s.strip_prefix("rgb"))
        .map(|r| (false, r))
        .or_else(|| {
            s.strip_prefix("hsla")
                .or_else(|| s.strip_prefix("hsl"))
                .map(|r| (true, r))
        })
        .ok_or(ColorParseError::UnknownFunction)?;

    // Munge the parentheses after trimming leading whitespace
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorParseError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorParseError::NoClosingParenthesis)
        })?;

    let (c1, c2, c3, alpha) = split_components(body)?;
    let alpha = alpha.map_or(Ok(255), parse_alpha)?;

    if is_hsl {
        let [r, g, b] = hsl_to_rgb(parse_hue(c1)?, parse_fraction(c2)?, parse_fraction(c3)?);
        Ok([r, g, b, alpha])
    } else {
        Ok([
            parse_channel(c1)?,
            parse_channel(c2)?,
            parse_channel(c3)?,
            alpha,
        ])
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string as a CSS color.
///
/// This function recognizes the complete set of color forms a fill style may
/// take: the named colors including `transparent`, hashed hexadecimal with 3,
/// 4, 6, or 8 digits, and the `rgb()`/`rgba()`/`hsl()`/`hsla()` functions in
/// both the legacy comma syntax and the modern space syntax with `/` alpha.
/// Before dispatching on the form, it trims leading and trailing white space
/// and converts ASCII letters to lowercase, so `CadetBlue` and ` #F00 ` are
/// fine.
///
/// ```
/// # use unicanvas::parse;
/// assert_eq!(parse("CadetBlue"), Ok([95, 158, 160, 255]));
/// assert_eq!(parse("#f00"), Ok([255, 0, 0, 255]));
/// assert_eq!(parse("rgb(255 0 0 / 0.5)"), Ok([255, 0, 0, 128]));
/// assert_eq!(parse("hsl(120, 100%, 50%)"), Ok([0, 255, 0, 255]));
/// ```
pub fn parse(s: &str) -> Result<[u8; 4], ColorParseError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        parse_hashed(s)
    } else if s.contains('(') {
        parse_function(s)
    } else {
        named::lookup(s).ok_or(ColorParseError::UnknownName)
    }
}

// ====================================================================================================================
