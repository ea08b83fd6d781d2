//! Parse colors from the string forms a UI layer hands over.

use std::str::FromStr;

use crate::{
    error::{Error, Result},
    rgb::Rgb,
};

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a hex color from a string.
///
/// The allowed formats are:
/// * #RGB
/// * RGB
/// * #RRGGBB
/// * RRGGBB
///
/// The 3 digit shorthand expands by doubling each digit.
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let invalid = || Error::InvalidColor(hex.to_owned());

    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

    let value = match digits.len() {
        3 => digits.iter().try_fold(0u32, |acc, &c| {
            let n = nibble(c)? as u32;
            Some(acc << 8 | n << 4 | n)
        }),
        6 => digits
            .iter()
            .try_fold(0u32, |acc, &c| Some(acc << 4 | nibble(c)? as u32)),
        _ => None,
    }
    .ok_or_else(invalid)?;

    Ok(Rgb::from_u32(value))
}

/// Parse a CSS `rgb(r, g, b)` function with integer channels in [0, 255].
pub fn parse_css_rgb(s: &str) -> Result<Rgb> {
    let invalid = || Error::InvalidColor(s.to_owned());

    let args = s
        .trim()
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let channels = args
        .split(',')
        .map(|t| t.trim().parse::<u8>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>>>()?;

    match channels[..] {
        [red, green, blue] => Ok(Rgb::new(red, green, blue)),
        _ => Err(invalid()),
    }
}

/// Return true if the string is a strict 6 digit HEX color, with or without
/// the leading `#`. Shorthand forms are not accepted here.
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    digits.len() == 6 && digits.bytes().all(|c| c.is_ascii_hexdigit())
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse either a HEX color or a CSS `rgb()` function.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with("rgb(") {
            parse_css_rgb(s)
        } else {
            parse_hex(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_forms() {
        assert_eq!(parse_hex("#FF8800").unwrap(), Rgb::new(255, 136, 0));
        assert_eq!(parse_hex("ff8800").unwrap(), Rgb::new(255, 136, 0));
        assert_eq!(parse_hex("#000000").unwrap(), Rgb::BLACK);
    }

    #[test]
    fn shorthand_doubles_digits() {
        assert_eq!(parse_hex("abc").unwrap(), Rgb::new(0xAA, 0xBB, 0xCC));
        assert_eq!(parse_hex("#F00").unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn wrong_lengths_fail() {
        for hex in ["", "#", "#F", "#FF", "#FFFF", "#FFFFF", "#FFFFFFF", "#FFFFFFFF"] {
            assert!(
                matches!(parse_hex(hex), Err(Error::InvalidColor(_))),
                "{hex:?} should be rejected"
            );
        }
    }

    #[test]
    fn non_hex_digits_fail() {
        assert!(parse_hex("#GG0000").is_err());
        assert!(parse_hex("+12345").is_err());
        assert!(parse_hex("#12 456").is_err());
        assert!(parse_hex("##12345").is_err());
    }

    #[test]
    fn error_keeps_input() {
        match parse_hex("#nope") {
            Err(Error::InvalidColor(s)) => assert_eq!(s, "#nope"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn css_rgb_function() {
        assert_eq!(parse_css_rgb("rgb(1, 22, 255)").unwrap(), Rgb::new(1, 22, 255));
        assert_eq!(parse_css_rgb("rgb(1,22,255)").unwrap(), Rgb::new(1, 22, 255));
        assert!(parse_css_rgb("rgb(1, 22)").is_err());
        assert!(parse_css_rgb("rgb(1, 22, 256)").is_err());
        assert!(parse_css_rgb("rgba(1, 22, 3, 4)").is_err());
    }

    #[test]
    fn from_str_accepts_both_forms() {
        assert_eq!("#0A0B0C".parse::<Rgb>().unwrap(), Rgb::new(10, 11, 12));
        assert_eq!(" rgb(10, 11, 12) ".parse::<Rgb>().unwrap(), Rgb::new(10, 11, 12));
    }

    #[test]
    fn strict_validity() {
        assert!(is_valid_hex("#A1B2C3"));
        assert!(is_valid_hex("a1b2c3"));
        assert!(!is_valid_hex("#abc"));
        assert!(!is_valid_hex("#A1B2CG"));
    }
}
