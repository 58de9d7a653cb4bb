//! Hex color parsing for palette definitions.

use rgb::RGB8;

use crate::palette::ParseColorError;

/// Parse a color from a hex string.
///
/// Supports the following formats:
/// - `#RRGGBB` - standard 6-digit hex with hash
/// - `RRGGBB` - standard 6-digit hex without hash
/// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
/// - `RGB` - shorthand 3-digit hex without hash
///
/// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use gray_dither::color::parse_hex;
///
/// let lime = parse_hex("#33ff33").unwrap();
/// assert_eq!((lime.r, lime.g, lime.b), (0x33, 0xFF, 0x33));
///
/// let red = parse_hex("F00").unwrap();
/// assert_eq!((red.r, red.g, red.b), (255, 0, 0));
/// ```
pub fn parse_hex(s: &str) -> Result<RGB8, ParseColorError> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    // Byte slicing below needs single-byte characters.
    if !s.is_ascii() {
        return Err(ParseColorError::NonAscii);
    }

    // `from_str_radix` alone would accept a leading sign.
    if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidDigit(c));
    }

    match s.len() {
        3 => {
            // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
            let r = u8::from_str_radix(&s[0..1], 16)? * 17;
            let g = u8::from_str_radix(&s[1..2], 16)? * 17;
            let b = u8::from_str_radix(&s[2..3], 16)? * 17;
            Ok(RGB8::new(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16)?;
            let g = u8::from_str_radix(&s[2..4], 16)?;
            let b = u8::from_str_radix(&s[4..6], 16)?;
            Ok(RGB8::new(r, g, b))
        }
        _ => Err(ParseColorError::InvalidLength),
    }
}
