//! Utility module with nearcolor's errors.

/// An erroneous color format.
///
/// This error indicates a hexadecimal color string that could not be parsed
/// into an [`Rgba`](crate::Rgba) color. Parsing accepts an optional `#`
/// prefix followed by 3, 6, or 8 hexadecimal digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format without any characters. For example, `""` and `"#"`
    /// both are empty.
    EmptyString,

    /// A color format with an unexpected number of characters. For example,
    /// `#ff00` has neither 3, 6, nor 8 hexadecimal digits.
    UnexpectedCharacters,

    /// A color format with a malformed hexadecimal number as a channel. For
    /// example, `#ff00gg` has a malformed third channel.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::EmptyString => f.write_str("color format should not be empty but is"),
            Self::UnexpectedCharacters => {
                f.write_str("color format should have 3, 6, or 8 hex digits but does not")
            }
            Self::MalformedHex => {
                f.write_str("color format channels should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An error while matching a query against a palette.
///
/// Nearest-color queries fail for exactly two reasons: the palette has no
/// entries to match against, or the query was given in hexadecimal notation
/// and did not parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// A nearest-color query against a matcher without any palette entries.
    EmptyPalette,

    /// A nearest-color query with a malformed hexadecimal color string.
    MalformedQuery(ColorFormatError),
}

impl From<ColorFormatError> for MatchError {
    fn from(value: ColorFormatError) -> Self {
        Self::MalformedQuery(value)
    }
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::EmptyPalette => f.write_str("palette should have at least one entry but has none"),
            Self::MalformedQuery(_) => f.write_str("could not parse color query"),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::EmptyPalette => None,
            Self::MalformedQuery(ref error) => Some(error),
        }
    }
}
