//! The RGBA color representation.

use crate::error::ColorFormatError;
use crate::parse::parse;

/// An RGBA color with four 8-bit channels.
///
/// Rust code creates RGBA colors directly from their channels with
/// [`Rgba::new`] or, for fully opaque colors, with [`Rgba::opaque`].
/// ```
/// # use nearcolor::Rgba;
/// let purple = Rgba::new(255, 0, 255, 255);
/// assert_eq!(purple, Rgba::opaque(255, 0, 255));
/// ```
///
/// It can also parse colors from hashed hexadecimal notation with [`Rgba as
/// FromStr`](struct.Rgba.html#impl-FromStr-for-Rgba), which accepts an
/// optional `#` prefix followed by 3, 6, or 8 hexadecimal digits and fills a
/// missing alpha channel with 255.
/// ```
/// # use nearcolor::Rgba;
/// let red: Rgba = "#ff0000".parse()?;
/// assert_eq!(red, Rgba::new(255, 0, 0, 255));
///
/// let red_too: Rgba = "#f00".parse()?;
/// assert_eq!(red_too, red);
///
/// let faded: Rgba = "#ff0000ae".parse()?;
/// assert_eq!(faded.alpha(), 174);
/// # Ok::<(), nearcolor::error::ColorFormatError>(())
/// ```
///
/// It can access the channels with [`Rgba as AsRef<[u8;
/// 4]>`](struct.Rgba.html#impl-AsRef%3C%5Bu8;+4%5D%3E-for-Rgba) or with
/// [`Rgba as Index<usize>`](struct.Rgba.html#impl-Index%3Cusize%3E-for-Rgba).
/// ```
/// # use nearcolor::Rgba;
/// let sea_foam = Rgba::opaque(0xb6, 0xeb, 0xd4);
/// assert_eq!(sea_foam.as_ref(), &[182_u8, 235, 212, 255]);
/// assert_eq!(sea_foam[1], 235);
/// ```
///
/// Finally, it can format itself in hashed hexadecimal notation with [`Rgba
/// as Display`](struct.Rgba.html#impl-Display-for-Rgba). The display form
/// always includes the alpha channel, for 8 hexadecimal digits. The alternate
/// form drops the trailing alpha pair when the color is fully opaque.
/// ```
/// # use nearcolor::Rgba;
/// let sand = Rgba::opaque(0xee, 0xdc, 0xad);
/// assert_eq!(format!("{}", sand), "#eedcadff");
/// assert_eq!(format!("{:#}", sand), "#eedcad");
/// assert_eq!(format!("{:#}", Rgba::new(0, 0, 255, 80)), "#0000ff50");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba([u8; 4]);

impl Rgba {
    /// Create a new RGBA color from its channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Create a new, fully opaque RGBA color, i.e., with an alpha of 255.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 0xff])
    }

    /// Parse a color from hashed hexadecimal notation, filling a missing
    /// alpha channel with the given default instead of 255.
    ///
    /// ```
    /// # use nearcolor::Rgba;
    /// let faded = Rgba::from_hex_with_alpha("#ff00ff", 80)?;
    /// assert_eq!(faded, Rgba::new(255, 0, 255, 80));
    ///
    /// // An explicit alpha always wins over the default.
    /// let clear = Rgba::from_hex_with_alpha("#ff00ff00", 80)?;
    /// assert_eq!(clear.alpha(), 0);
    /// # Ok::<(), nearcolor::error::ColorFormatError>(())
    /// ```
    pub fn from_hex_with_alpha(s: &str, default_alpha: u8) -> Result<Self, ColorFormatError> {
        parse(s, default_alpha).map(Self)
    }

    /// Access the red channel.
    pub const fn red(&self) -> u8 {
        self.0[0]
    }

    /// Access the green channel.
    pub const fn green(&self) -> u8 {
        self.0[1]
    }

    /// Access the blue channel.
    pub const fn blue(&self) -> u8 {
        self.0[2]
    }

    /// Access the alpha channel.
    pub const fn alpha(&self) -> u8 {
        self.0[3]
    }

    /// Determine whether this color is fully opaque, i.e., has an alpha of
    /// 255.
    pub const fn is_opaque(&self) -> bool {
        self.0[3] == 0xff
    }

    /// Calculate the squared Euclidian distance between the two colors.
    ///
    /// The distance treats a color as a point in the four-dimensional space
    /// spanned by the red, green, blue, and alpha channels. Since squaring is
    /// strictly monotone on non-negative numbers, comparing squared distances
    /// orders colors exactly as comparing Euclidian distances would, ties
    /// included, while staying in exact integer arithmetic.
    pub fn squared_euclidian_distance(&self, other: &Rgba) -> u32 {
        fn delta_squared(c1: u8, c2: u8) -> u32 {
            let delta = c1 as i32 - c2 as i32;
            (delta * delta) as u32
        }

        delta_squared(self.0[0], other.0[0])
            + delta_squared(self.0[1], other.0[1])
            + delta_squared(self.0[2], other.0[2])
            + delta_squared(self.0[3], other.0[3])
    }
}

impl AsRef<[u8; 4]> for Rgba {
    fn as_ref(&self) -> &[u8; 4] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgba {
    type Output = u8;

    /// Access the channel with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `3 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from(value: (u8, u8, u8, u8)) -> Self {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

impl std::str::FromStr for Rgba {
    type Err = ColorFormatError;

    /// Parse a color from hashed hexadecimal notation.
    ///
    /// A missing alpha channel is filled with 255. Use
    /// [`Rgba::from_hex_with_alpha`] to fill it with another default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_with_alpha(s, 0xff)
    }
}

impl std::fmt::Display for Rgba {
    /// Format this color in hashed hexadecimal notation.
    ///
    /// The default form always spells out all four channels, for 8
    /// hexadecimal digits after the `#`. The alternate form, selected with
    /// `{:#}`, drops the trailing alpha pair when the alpha is exactly 255.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = *self.as_ref();
        if f.alternate() && a == 0xff {
            f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
        } else {
            f.write_fmt(format_args!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a))
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{ColorFormatError, Rgba};

    #[test]
    fn test_from_str() -> Result<(), ColorFormatError> {
        assert_eq!("#ff0000".parse::<Rgba>()?, Rgba::new(255, 0, 0, 255));
        assert_eq!("ff0000".parse::<Rgba>()?, Rgba::new(255, 0, 0, 255));
        assert_eq!("#ff0000ff".parse::<Rgba>()?, Rgba::new(255, 0, 0, 255));
        assert_eq!("#ff0000ae".parse::<Rgba>()?, Rgba::new(255, 0, 0, 174));
        assert_eq!("#ff00ffae".parse::<Rgba>()?, Rgba::new(255, 0, 255, 174));
        assert_eq!("#f0f".parse::<Rgba>()?, Rgba::new(255, 0, 255, 255));
        assert_eq!(
            "asdasdasd".parse::<Rgba>(),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba::opaque(255, 0, 0).to_string(), "#ff0000ff");
        assert_eq!(Rgba::new(255, 0, 0, 123).to_string(), "#ff00007b");
        assert_eq!(Rgba::new(255, 0, 0, 0).to_string(), "#ff000000");
        assert_eq!(Rgba::new(0, 255, 0, 255).to_string(), "#00ff00ff");
        assert_eq!(format!("{:#}", Rgba::opaque(0, 255, 0)), "#00ff00");
        assert_eq!(format!("{:#}", Rgba::new(0, 0, 255, 0x50)), "#0000ff50");
    }

    #[test]
    fn test_round_trip() -> Result<(), ColorFormatError> {
        for s in ["#ff0000", "#00ff00", "#0000ff", "#123456", "#b6ebd4"] {
            let color = s.parse::<Rgba>()?;
            assert_eq!(format!("{:#}", color), s, "{} should round-trip", s);
        }
        Ok(())
    }

    #[test]
    fn test_distance() {
        let black = Rgba::opaque(0, 0, 0);
        let white = Rgba::opaque(255, 255, 255);
        assert_eq!(black.squared_euclidian_distance(&black), 0);
        assert_eq!(black.squared_euclidian_distance(&white), 3 * 255 * 255);
        assert_eq!(
            white.squared_euclidian_distance(&black),
            black.squared_euclidian_distance(&white)
        );

        // The alpha channel contributes like any other channel.
        let clear_black = Rgba::new(0, 0, 0, 0);
        assert_eq!(black.squared_euclidian_distance(&clear_black), 255 * 255);
    }
}
