//! DMS angle codec for zone parameter strings.
//!
//! The zone parameter database stores angles as `"D M [S] H"` strings
//! (`"85 50 W"`, `"122 19 45 W"`) or occasionally as bare decimal degrees.
//! [`parse`] is deliberately lenient: a value that matches neither pattern
//! is carried through verbatim rather than rejected, because a zone record
//! with an odd field should degrade the visualization, never abort it.

mod dms;

use std::fmt;

pub use dms::{Dms, Hemisphere};

/// Result of parsing an angle field from a zone record.
#[derive(Debug, Clone, PartialEq)]
pub enum Angle {
    /// A `"D M [S] H"` string.
    Dms(Dms),
    /// A bare decimal-degree value (string contained a decimal point and no
    /// hemisphere letter).
    Decimal(f64),
    /// Text matching neither pattern, preserved verbatim.
    Unrecognized(String),
    /// The field was absent.
    Unspecified,
}

impl Angle {
    /// Signed decimal degrees, when the angle has a numeric value.
    #[must_use]
    pub fn signed_degrees(&self) -> Option<f64> {
        match self {
            Self::Dms(dms) => Some(dms.to_degrees()),
            Self::Decimal(deg) => Some(*deg),
            Self::Unrecognized(_) | Self::Unspecified => None,
        }
    }

    /// Format for display: `D° M′ [S″] H` for DMS, `D.DDDD°` for decimal
    /// degrees, the original text for unrecognized input, and
    /// `"not specified"` for an absent field.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dms(dms) => write!(f, "{dms}"),
            Self::Decimal(deg) => write!(f, "{deg:.4}\u{b0}"),
            Self::Unrecognized(text) => write!(f, "{text}"),
            Self::Unspecified => write!(f, "not specified"),
        }
    }
}

/// Parse an angle field from a zone parameter record.
///
/// Accepts `"D M [S] H"` with H ∈ {N, S, E, W} (case-insensitive, seconds
/// optional), or a bare decimal-degree string. Anything else comes back as
/// [`Angle::Unrecognized`]; `None` as [`Angle::Unspecified`]. This function
/// never fails.
#[must_use]
pub fn parse(input: Option<&str>) -> Angle {
    let Some(text) = input else {
        return Angle::Unspecified;
    };

    if let Some(dms) = parse_dms(text) {
        return Angle::Dms(dms);
    }

    // Decimal-degree pass-through: a decimal point and no hemisphere letter.
    if text.contains('.') {
        if let Ok(value) = text.trim().parse::<f64>() {
            return Angle::Decimal(value);
        }
    }

    Angle::Unrecognized(text.to_owned())
}

/// Match the `"D M [S] H"` pattern. Returns `None` on any deviation.
///
/// The degree/minute/second marks emitted by [`Angle::format`] are stripped
/// first, so formatted output parses back to the same value.
fn parse_dms(text: &str) -> Option<Dms> {
    let text: String = text
        .chars()
        .filter(|c| !matches!(c, '\u{b0}' | '\u{2032}' | '\u{2033}'))
        .collect();
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 3 && tokens.len() != 4 {
        return None;
    }

    let (numbers, last) = tokens.split_at(tokens.len() - 1);
    let mut letters = last[0].chars();
    let hemisphere = Hemisphere::from_letter(letters.next()?)?;
    if letters.next().is_some() {
        return None;
    }

    let mut parts = [0u32; 3];
    for (slot, token) in parts.iter_mut().zip(numbers) {
        *slot = token.parse().ok()?;
    }

    Some(Dms {
        degrees: parts[0],
        minutes: parts[1],
        seconds: parts[2],
        hemisphere,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_degrees_minutes_hemisphere() {
        let angle = parse(Some("85 50 W"));
        assert_eq!(
            angle,
            Angle::Dms(Dms {
                degrees: 85,
                minutes: 50,
                seconds: 0,
                hemisphere: Hemisphere::West,
            })
        );
        let decimal = angle.signed_degrees().unwrap();
        assert!((decimal + 85.8333).abs() < 1e-4);
    }

    #[test]
    fn parses_optional_seconds() {
        let angle = parse(Some("122 19 45 W"));
        assert_eq!(
            angle,
            Angle::Dms(Dms {
                degrees: 122,
                minutes: 19,
                seconds: 45,
                hemisphere: Hemisphere::West,
            })
        );
        assert_eq!(angle.format(), "122\u{b0} 19\u{2032} 45\u{2033} W");
    }

    #[test]
    fn hemisphere_is_case_insensitive() {
        assert_eq!(parse(Some("30 30 n")), parse(Some("30 30 N")));
    }

    #[test]
    fn decimal_string_passes_through() {
        let angle = parse(Some("-85.8333"));
        assert_eq!(angle, Angle::Decimal(-85.8333));
        assert_eq!(angle.format(), "-85.8333\u{b0}");
    }

    #[test]
    fn unrecognized_text_is_preserved() {
        let angle = parse(Some("somewhere west"));
        assert_eq!(angle, Angle::Unrecognized("somewhere west".to_owned()));
        assert_eq!(angle.format(), "somewhere west");
        assert_eq!(angle.signed_degrees(), None);
    }

    #[test]
    fn absent_input_is_unspecified() {
        let angle = parse(None);
        assert_eq!(angle, Angle::Unspecified);
        assert_eq!(angle.format(), "not specified");
    }

    #[test]
    fn format_omits_zero_seconds() {
        assert_eq!(parse(Some("85 50 W")).format(), "85\u{b0} 50\u{2032} W");
    }

    #[test]
    fn canonical_roundtrip_with_zero_seconds() {
        // Formatted output parses back to the same rendering.
        for text in ["85 50 W", "30 30 N", "0 0 E", "146 0 W"] {
            let rendered = parse(Some(text)).format();
            assert_eq!(parse(Some(rendered.as_str())).format(), rendered);
        }
    }

    #[test]
    fn formatted_seconds_roundtrip() {
        let rendered = parse(Some("122 19 45 W")).format();
        assert_eq!(parse(Some(rendered.as_str())).format(), rendered);
    }

    #[test]
    fn decimal_with_hemisphere_is_unrecognized() {
        // D must be an integer when a hemisphere letter is present.
        assert!(matches!(
            parse(Some("85.5 10 W")),
            Angle::Unrecognized(_)
        ));
    }
}
