//! Palette construction and nearest-color matching.

use crate::error::MatchError;
use crate::rgba::Rgba;

/// An RGBA color with an optional alpha channel.
///
/// Palette entries may omit their alpha channel, in which case the owning
/// [`Matcher`] fills it with its default alpha upon insertion. Making the
/// alpha an `Option` keeps an explicit alpha of zero distinct from an absent
/// alpha, so fully transparent entries survive insertion unchanged.
///
/// The conversions from tuples and arrays cover the common cases:
/// ```
/// # use nearcolor::PartialRgba;
/// assert_eq!(PartialRgba::from((255, 255, 0)).a, None);
/// assert_eq!(PartialRgba::from((255, 255, 255, 123)).a, Some(123));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PartialRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<u8>,
}

impl PartialRgba {
    /// Create a new palette entry without an alpha channel.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Create a new palette entry with an explicit alpha channel.
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a: Some(a) }
    }
}

impl From<Rgba> for PartialRgba {
    fn from(value: Rgba) -> Self {
        Self::with_alpha(value.red(), value.green(), value.blue(), value.alpha())
    }
}

impl From<(u8, u8, u8)> for PartialRgba {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<(u8, u8, u8, u8)> for PartialRgba {
    fn from(value: (u8, u8, u8, u8)) -> Self {
        Self::with_alpha(value.0, value.1, value.2, value.3)
    }
}

impl From<[u8; 3]> for PartialRgba {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<[u8; 4]> for PartialRgba {
    fn from(value: [u8; 4]) -> Self {
        Self::with_alpha(value[0], value[1], value[2], value[3])
    }
}

// ====================================================================================================================

/// A nearest-color query.
///
/// A query is either a color in hashed hexadecimal notation, which the
/// matcher parses with its default alpha, or an already complete [`Rgba`]
/// color. The two cases are explicit variants so that query dispatch never
/// relies on runtime type inspection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorQuery<'q> {
    /// A color in hashed hexadecimal notation.
    Hex(&'q str),
    /// A complete RGBA color.
    Color(Rgba),
}

impl<'q> From<&'q str> for ColorQuery<'q> {
    fn from(value: &'q str) -> Self {
        Self::Hex(value)
    }
}

impl From<Rgba> for ColorQuery<'_> {
    fn from(value: Rgba) -> Self {
        Self::Color(value)
    }
}

// ====================================================================================================================

/// Find the candidate closest to the origin.
///
/// Scanning in candidate order with a strict less-than comparison, this
/// function keeps the earliest candidate amongst those with minimal distance.
/// It returns `None` if there are no candidates.
fn find_closest<'c, C>(origin: &Rgba, candidates: C) -> Option<usize>
where
    C: IntoIterator<Item = &'c Rgba>,
{
    let mut min_distance = u32::MAX;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = origin.squared_euclidian_distance(candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

// ====================================================================================================================

/// A nearest-color matcher.
///
/// A matcher owns an insertion-ordered palette of [`Rgba`] colors and answers
/// nearest-color queries against it, using Euclidian distance in the
/// four-dimensional space spanned by the red, green, blue, and alpha
/// channels. When two entries are equidistant from a query, the entry
/// inserted earlier wins.
///
/// The palette grows through [`Matcher::extend_with_hex`] and
/// [`Matcher::extend_with_colors`], both of which return `&mut Self` for
/// fluent chaining. Entries are copied into the palette; the matcher never
/// aliases caller-owned data. An entry without an alpha channel and a
/// hexadecimal entry without alpha digits both receive the matcher's default
/// alpha, which is 255 unless the matcher was created with
/// [`Matcher::with_default_alpha`].
///
/// ```
/// # use nearcolor::{Matcher, Rgba};
/// let mut matcher = Matcher::new();
/// matcher
///     .extend_with_hex(["#ff0000", "#ff00ff", "#0f0"])
///     .extend_with_colors([(255, 255, 0)]);
///
/// assert_eq!(matcher.nearest("#ff00aa")?, Rgba::opaque(255, 0, 255));
/// assert_eq!(matcher.nearest_hex("#ff00aa")?, "#ff00ff");
/// # Ok::<(), nearcolor::error::MatchError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Matcher {
    palette: Vec<Rgba>,
    default_alpha: u8,
}

impl Default for Matcher {
    /// Create a new matcher with an empty palette and a default alpha of
    /// 255.
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    /// Create a new matcher with an empty palette and a default alpha of
    /// 255.
    pub fn new() -> Self {
        Self::with_default_alpha(0xff)
    }

    /// Create a new matcher with an empty palette and the given default
    /// alpha.
    pub fn with_default_alpha(default_alpha: u8) -> Self {
        Self {
            palette: Vec::new(),
            default_alpha,
        }
    }

    /// Access this matcher's default alpha.
    pub const fn default_alpha(&self) -> u8 {
        self.default_alpha
    }

    /// Get the number of palette entries.
    pub fn len(&self) -> usize {
        self.palette.len()
    }

    /// Determine whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty()
    }

    /// Add the given colors to the palette, in order.
    ///
    /// Every entry is copied into the palette. An entry whose alpha channel
    /// is absent receives this matcher's default alpha; an explicit alpha,
    /// including zero, is preserved.
    ///
    /// ```
    /// # use nearcolor::{Matcher, PartialRgba, Rgba};
    /// let mut matcher = Matcher::new();
    /// matcher.extend_with_colors([
    ///     PartialRgba::new(255, 255, 0),
    ///     PartialRgba::with_alpha(255, 255, 255, 123),
    /// ]);
    /// assert_eq!(matcher.as_ref()[0], Rgba::opaque(255, 255, 0));
    /// assert_eq!(matcher.as_ref()[1], Rgba::new(255, 255, 255, 123));
    /// ```
    pub fn extend_with_colors<C, E>(&mut self, entries: C) -> &mut Self
    where
        C: IntoIterator<Item = E>,
        E: Into<PartialRgba>,
    {
        for entry in entries {
            let PartialRgba { r, g, b, a } = entry.into();
            self.palette
                .push(Rgba::new(r, g, b, a.unwrap_or(self.default_alpha)));
        }
        self
    }

    /// Add the given colors in hashed hexadecimal notation to the palette,
    /// in order.
    ///
    /// Every string is parsed with this matcher's default alpha. A string
    /// that does not parse is silently skipped, so one malformed entry never
    /// invalidates the rest of a palette.
    ///
    /// ```
    /// # use nearcolor::Matcher;
    /// let mut matcher = Matcher::new();
    /// matcher.extend_with_hex(["#ff0000", "not-a-color", "#0f0"]);
    /// assert_eq!(matcher.len(), 2);
    /// ```
    pub fn extend_with_hex<C, S>(&mut self, strings: C) -> &mut Self
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for s in strings {
            if let Ok(color) = Rgba::from_hex_with_alpha(s.as_ref(), self.default_alpha) {
                self.palette.push(color);
            }
        }
        self
    }

    /// Find the palette entry closest to the query.
    ///
    /// A hexadecimal query is parsed with this matcher's default alpha first
    /// and fails with [`MatchError::MalformedQuery`] if it does not parse.
    /// The matched color is returned by value. Querying an empty palette
    /// fails with [`MatchError::EmptyPalette`].
    pub fn nearest<'q, Q>(&self, query: Q) -> Result<Rgba, MatchError>
    where
        Q: Into<ColorQuery<'q>>,
    {
        let origin = match query.into() {
            ColorQuery::Hex(s) => Rgba::from_hex_with_alpha(s, self.default_alpha)?,
            ColorQuery::Color(color) => color,
        };

        find_closest(&origin, &self.palette)
            .and_then(|index| self.palette.get(index).copied())
            .ok_or(MatchError::EmptyPalette)
    }

    /// Find the palette entry closest to the query and format it in hashed
    /// hexadecimal notation.
    ///
    /// This method matches exactly like [`Matcher::nearest`] but serializes
    /// the result. A fully opaque match is formatted without its alpha pair,
    /// for 6 hexadecimal digits after the `#`; any other match includes the
    /// alpha pair, for 8 digits.
    pub fn nearest_hex<'q, Q>(&self, query: Q) -> Result<String, MatchError>
    where
        Q: Into<ColorQuery<'q>>,
    {
        self.nearest(query).map(|color| format!("{:#}", color))
    }
}

impl AsRef<[Rgba]> for Matcher {
    /// Access the palette entries, in insertion order.
    fn as_ref(&self) -> &[Rgba] {
        &self.palette
    }
}

impl Extend<PartialRgba> for Matcher {
    fn extend<T: IntoIterator<Item = PartialRgba>>(&mut self, iter: T) {
        self.extend_with_colors(iter);
    }
}

// ====================================================================================================================
