//! This module provides a parser for coordinates written in
//! *degrees-minutes-seconds* notation, e.g. `33°47'40''N`.

use regex::{Captures, Regex};
use std::str::FromStr;

use crate::err::DmsError;

/// Converted values are rounded to this many decimal places.
const PRECISION: i32 = 8;

lazy_static! {
    /// Accepted spellings, tried in order. The doubled apostrophe has to come
    /// before the single one, or `40''` would be read with a dangling quote.
    static ref PATTERNS: [Regex; 3] = [
        Regex::new(r"([0-9]+)°([0-9]+)'([0-9.]+)''([NSEW])").unwrap(),
        Regex::new(r#"([0-9]+)°([0-9]+)'([0-9.]+)"([NSEW])"#).unwrap(),
        Regex::new(r"([0-9]+)°([0-9]+)'([0-9.]+)'([NSEW])").unwrap(),
    ];
}

/// The cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Maps `N`, `S`, `E` and `W` to their direction.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "N" => Some(Hemisphere::North),
            "S" => Some(Hemisphere::South),
            "E" => Some(Hemisphere::East),
            "W" => Some(Hemisphere::West),
            _ => None,
        }
    }

    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

/// A coordinate as written in DMS notation.
///
/// No range checks are applied: `200°75'99''N` is accepted and converts to
/// whatever the formula yields. Degrees and minutes are whole numbers but are
/// held as `f64` so arbitrarily long digit runs still convert.
#[derive(Debug, Clone, PartialEq)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

impl Dms {
    /// Signed decimal degrees, rounded to eight decimal places.
    /// South and west are negative.
    pub fn to_decimal(&self) -> f64 {
        let magnitude =
            self.degrees + self.minutes / 60.0 + self.seconds / 3600.0;
        round_to(magnitude, PRECISION) * self.hemisphere.sign()
    }

    fn from_captures(caps: &Captures) -> Result<Self, DmsError> {
        let degrees = caps[1].parse::<f64>().map_err(DmsError::Degrees)?;
        let minutes = caps[2].parse::<f64>().map_err(DmsError::Minutes)?;
        let seconds = caps[3].parse::<f64>()?;
        let hemisphere = match Hemisphere::from_letter(&caps[4]) {
            Some(h) => h,
            None => return Err(DmsError::NoMatch(caps[0].to_owned())),
        };
        Ok(Dms {
            degrees,
            minutes,
            seconds,
            hemisphere,
        })
    }
}

impl FromStr for Dms {
    type Err = DmsError;

    /// The first pattern found anywhere in the trimmed token wins; text around
    /// the match is ignored.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DmsError::Empty);
        }

        match PATTERNS.iter().filter_map(|re| re.captures(token)).next() {
            Some(caps) => Dms::from_captures(&caps),
            None => Err(DmsError::NoMatch(token.to_owned())),
        }
    }
}

/// Parse a DMS token into signed decimal degrees.
pub fn parse(token: &str) -> Result<f64, DmsError> {
    token.parse::<Dms>().map(|dms| dms.to_decimal())
}

/// Text form of a converted value as it is written to output tables.
///
/// Always plain decimal notation, never an exponent: `0.00002778` stays as
/// is. Integral values keep a trailing `.0`, so `40` is written as `40.0`.
pub fn format_decimal(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Values too large to carry `places` fractional digits are returned as is.
#[inline]
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round() / scale
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_double_apostrophe() {
        assert_eq!(parse("33°47'40''N").unwrap(), 33.79444444);
        assert_eq!(parse("89°05'27''W").unwrap(), -89.09083333);
    }

    #[test]
    fn test_double_quote() {
        assert_eq!(parse("32°19'12.8\"N").unwrap(), 32.32022222);
        assert_eq!(parse("89°40'01.0\"W").unwrap(), -89.66694444);
    }

    #[test]
    fn test_single_apostrophe() {
        assert_eq!(parse("33°08'03'N").unwrap(), 33.13416667);
        assert_eq!(parse("88°51'07'E").unwrap(), 88.85194444);
    }

    #[test]
    fn test_hemisphere_sign() {
        assert!(parse("10°30'00''N").unwrap() > 0.0);
        assert!(parse("10°30'00''E").unwrap() > 0.0);
        assert_eq!(parse("10°30'00''S").unwrap(), -10.5);
        assert_eq!(parse("10°30'00''W").unwrap(), -10.5);
    }

    #[test]
    fn test_doubled_apostrophe_reads_whole_seconds() {
        let dms: Dms = "33°47'40''N".parse().unwrap();
        assert_eq!(
            dms,
            Dms {
                degrees: 33.0,
                minutes: 47.0,
                seconds: 40.0,
                hemisphere: Hemisphere::North,
            }
        );
    }

    #[test]
    fn test_first_pattern_wins_over_earlier_position() {
        // '' before '
        assert_eq!(parse("1°0'0'N 2°0'0''N").unwrap(), 2.0);
        // " before '
        assert_eq!(parse("1°0'0'N 2°0'0\"N").unwrap(), 2.0);
        // '' before "
        assert_eq!(parse("1°0'0\"N 2°0'0''N").unwrap(), 2.0);
    }

    #[test]
    fn test_surrounding_text_is_ignored() {
        assert_eq!(parse("  ~33°47'40''N (tower)  ").unwrap(), 33.79444444);
        assert_eq!(parse("lat: 32°19'12.8\"N").unwrap(), 32.32022222);
    }

    #[test]
    fn test_no_range_validation() {
        assert_eq!(parse("200°75'90''E").unwrap(), 201.275);
    }

    #[test]
    fn test_empty_is_silent() {
        assert_matches!(parse(""), Err(DmsError::Empty));
        assert_matches!(parse("   \t"), Err(DmsError::Empty));
        assert!(parse(" ").unwrap_err().is_silent());
    }

    #[test]
    fn test_garbage() {
        let err = parse("garbage").unwrap_err();
        assert!(!err.is_silent());
        assert_matches!(err, DmsError::NoMatch(ref t) if t == "garbage");
        assert_eq!(
            parse("garbage").unwrap_err().to_string(),
            "No DMS pattern matches \"garbage\""
        );
    }

    #[test]
    fn test_decimal_input_is_not_passed_through() {
        assert_matches!(parse("33.79444444"), Err(DmsError::NoMatch(_)));
        assert_matches!(parse("-89.09083333"), Err(DmsError::NoMatch(_)));
    }

    #[test]
    fn test_missing_hemisphere() {
        assert_matches!(parse("33°47'40''"), Err(DmsError::NoMatch(_)));
        assert_matches!(parse("33°47'40''X"), Err(DmsError::NoMatch(_)));
    }

    #[test]
    fn test_malformed_seconds() {
        assert_matches!(parse("33°47'1.2.3\"N"), Err(DmsError::Seconds(_)));
    }

    #[test]
    fn test_huge_degrees() {
        assert_eq!(parse("99999999999999999999999°00'00''N").unwrap(), 1e23);
        assert_eq!(parse("0°99999999999999999999999'00''W").unwrap(), -1e23 / 60.0);
    }

    #[test]
    fn test_non_ascii_digits() {
        assert_matches!(parse("٣٣°٤٧'٤٠''N"), Err(DmsError::NoMatch(_)));
        assert_matches!(parse("３３°４７'４０''N"), Err(DmsError::NoMatch(_)));
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(33.79444444), "33.79444444");
        assert_eq!(format_decimal(-89.09083333), "-89.09083333");
        assert_eq!(format_decimal(40.0), "40.0");
        assert_eq!(format_decimal(-10.5), "-10.5");
        assert_eq!(format_decimal(parse("0°0'0''S").unwrap()), "-0.0");
        assert_eq!(format_decimal(parse("0°0'0.1''N").unwrap()), "0.00002778");
    }
}
