//! Utility module with unicolor's errors.

/// An out-of-bounds error.
///
/// This error indicates a value that is out of bounds for some range. The
/// ranges used by this crate include:
///
///   * `0..=15` for the nibble values accepted by
///     [`hex_short_string`](crate::css::hex_short_string);
///   * `3..=4` for the length of byte sequences accepted by
///     [`ColorSource`](crate::ColorSource).
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An error indicating a CSS color string the rendering surface could not
/// resolve.
///
/// The surface produces this error; the color core merely propagates it. It
/// carries the offending string and, when the surface has one, the
/// surface's own diagnosis as [`source`](std::error::Error::source).
#[derive(Debug)]
pub struct UnresolvableColorError {
    color: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl UnresolvableColorError {
    /// Create a new unresolvable color error.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            source: None,
        }
    }

    /// Create a new unresolvable color error with the underlying cause.
    pub fn with_source(
        color: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            color: color.into(),
            source: Some(source.into()),
        }
    }

    /// Access the string that failed to resolve.
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl std::fmt::Display for UnresolvableColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "could not resolve `{}` as a CSS color",
            self.color
        ))
    }
}

impl std::error::Error for UnresolvableColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|e| e as _)
    }
}

// ====================================================================================================================

/// An error while constructing a color from a [`ColorSource`](crate::ColorSource).
///
/// Construction fails in one of two ways: a byte sequence has an unusable
/// length, or a CSS string does not resolve. Both leave no color behind.
#[derive(Debug)]
pub enum ColorSourceError {
    /// A byte sequence whose length is not 3 or 4.
    Sequence(OutOfBoundsError),

    /// A CSS string the rendering surface rejected.
    Css(UnresolvableColorError),
}

impl std::fmt::Display for ColorSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequence(error) => {
                f.write_fmt(format_args!("color sequence length {error}"))
            }
            Self::Css(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for ColorSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sequence(error) => Some(error),
            Self::Css(error) => Some(error),
        }
    }
}

impl From<OutOfBoundsError> for ColorSourceError {
    fn from(value: OutOfBoundsError) -> Self {
        Self::Sequence(value)
    }
}

impl From<UnresolvableColorError> for ColorSourceError {
    fn from(value: UnresolvableColorError) -> Self {
        Self::Css(value)
    }
}
