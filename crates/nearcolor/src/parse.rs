use crate::error::ColorFormatError;

/// Parse a color in hashed hexadecimal format. If successful, this function
/// returns the four channels as unsigned bytes. It transparently handles
/// single-digit channels as well as a missing alpha channel, which is filled
/// with the given default.
///
/// The `#` prefix is optional. After stripping it, the input must consist of
/// 3 hexadecimal digits (single-digit red, green, and blue channels), 6
/// digits (two-digit channels, no alpha), or 8 digits (two-digit channels
/// including alpha). An explicit alpha of `00` is preserved as zero; only a
/// genuinely absent alpha falls back on the default.
pub(crate) fn parse(s: &str, default_alpha: u8) -> Result<[u8; 4], ColorFormatError> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.is_empty() {
        return Err(ColorFormatError::EmptyString);
    } else if s.len() != 3 && s.len() != 6 && s.len() != 8 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_channel(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = if s.len() == 3 { 1 } else { 2 };
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_channel(s, 0)?;
    let c2 = parse_channel(s, 1)?;
    let c3 = parse_channel(s, 2)?;
    let c4 = if s.len() == 8 {
        parse_channel(s, 3)?
    } else {
        default_alpha
    };

    Ok([c1, c2, c3, c4])
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, ColorFormatError};

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(parse("#112233", 255)?, [0x11_u8, 0x22, 0x33, 0xff]);
        assert_eq!(parse("112233", 255)?, [0x11_u8, 0x22, 0x33, 0xff]);
        assert_eq!(parse("#11223344", 255)?, [0x11_u8, 0x22, 0x33, 0x44]);
        assert_eq!(parse("#ff0000ae", 255)?, [0xff_u8, 0x00, 0x00, 0xae]);

        // The three-digit form duplicates every digit.
        assert_eq!(parse("#f0f", 255)?, parse("#ff00ff", 255)?);
        assert_eq!(parse("#123", 255)?, [0x11_u8, 0x22, 0x33, 0xff]);

        // The default alpha applies only when the alpha digits are absent.
        assert_eq!(parse("#ff00ff", 77)?, [0xff_u8, 0x00, 0xff, 77]);
        assert_eq!(parse("#f0f", 77)?, [0xff_u8, 0x00, 0xff, 77]);
        assert_eq!(parse("#ff00ff00", 77)?, [0xff_u8, 0x00, 0xff, 0x00]);

        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("", 255), Err(ColorFormatError::EmptyString));
        assert_eq!(parse("#", 255), Err(ColorFormatError::EmptyString));
        assert_eq!(parse("#ff00", 255), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#ff00ff0", 255), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("asdasdasd", 255), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(parse("#💩00", 255), Err(ColorFormatError::UnexpectedCharacters));

        assert_eq!(parse("asdasd", 255), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse("#0g0", 255), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse("#00g", 255), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse("#ff00gg", 255), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse("#ff00ffzz", 255), Err(ColorFormatError::MalformedHex));
    }
}
