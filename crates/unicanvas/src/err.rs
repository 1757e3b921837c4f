//! Utility module with unicanvas' errors.

/// An erroneous CSS color string.
///
/// Each variant captures one way a fill style can fail to denote a color.
/// Since the canvas resolves colors for callers that treat the grammar as a
/// black box, variants describe the malformed *text*, not canvas state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    /// A color string that is not a recognized CSS color name. For example,
    /// `bluish` names no color, and neither does the empty string.
    UnknownName,

    /// A functional color notation other than `rgb()`, `rgba()`, `hsl()`, or
    /// `hsla()`. For example, `cmyk(0 0 0 1)` uses an unsupported function.
    UnknownFunction,

    /// A hexadecimal color with an unexpected number of digits or characters
    /// that do not align with character boundaries. For example, `#ff` is
    /// missing a digit, whereas `#💩00` has the correct byte length but
    /// contains an unsuitable character.
    UnexpectedCharacters,

    /// A hexadecimal color with a malformed digit. For example, `#0g0` has a
    /// malformed second digit.
    MalformedHex,

    /// A functional notation with a component that is not a number or
    /// percentage. For example, `rgb(red, 0, 0)` has a malformed first
    /// component.
    MalformedNumber,

    /// A functional notation without the opening parenthesis. For example,
    /// `rgb 0, 0, 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A functional notation without the closing parenthesis. For example,
    /// `hsl(120, 100%, 50%` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A functional notation with too few components. For example,
    /// `rgb(1, 2)` is missing the third component.
    MissingComponent,

    /// A functional notation with too many components. For example,
    /// `rgb(1, 2, 3, 4, 5)` has one component too many.
    TooManyComponents,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorParseError::*;

        match self {
            UnknownName => f.write_str("color string should be a CSS color name but is not"),
            UnknownFunction => {
                f.write_str("color function should be `rgb()`, `rgba()`, `hsl()`, or `hsla()`")
            }
            UnexpectedCharacters => {
                f.write_str("hex color should have 3, 4, 6, or 8 hexadecimal digits")
            }
            MalformedHex => f.write_str("hex color digits should be hexadecimal but are not"),
            MalformedNumber => {
                f.write_str("color components should be numbers or percentages but are not")
            }
            NoOpeningParenthesis => {
                f.write_str("color function should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color function should include a closing parenthesis but has none")
            }
            MissingComponent => f.write_str("color function should have 3 components but has fewer"),
            TooManyComponents => f.write_str("color function should have 3 components plus alpha but has more"),
        }
    }
}

impl std::error::Error for ColorParseError {}
