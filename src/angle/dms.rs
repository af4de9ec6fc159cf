//! Degrees-minutes-seconds value types.

use std::fmt;

/// Hemisphere suffix of a DMS angle string.
///
/// `S` and `W` negate the decimal value; `N` and `E` leave it positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// North latitude.
    North,
    /// South latitude.
    South,
    /// East longitude.
    East,
    /// West longitude.
    West,
}

impl Hemisphere {
    /// Parse a single hemisphere letter, case-insensitive.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Sign this hemisphere applies to the decimal value.
    #[inline]
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }

    /// Uppercase letter used on output.
    #[inline]
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A parsed degrees-minutes-seconds angle.
///
/// Components are unsigned; the hemisphere carries the sign. Zone parameter
/// records store angles in this form (`"85 50 W"`, `"122 19 45 W"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    /// Whole degrees, unsigned.
    pub degrees: u32,
    /// Arc minutes.
    pub minutes: u32,
    /// Arc seconds; zero when the source string omits the field.
    pub seconds: u32,
    /// Hemisphere suffix carrying the sign.
    pub hemisphere: Hemisphere,
}

impl Dms {
    /// Signed decimal degrees: `±(D + M/60 + S/3600)`.
    #[must_use]
    pub fn to_degrees(self) -> f64 {
        let magnitude = f64::from(self.degrees)
            + f64::from(self.minutes) / 60.0
            + f64::from(self.seconds) / 3600.0;
        self.hemisphere.sign() * magnitude
    }
}

impl fmt::Display for Dms {
    /// Render as `D° M′ [S″] H`, omitting seconds when zero. Degrees are not
    /// zero-padded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.seconds == 0 {
            write!(
                f,
                "{}\u{b0} {}\u{2032} {}",
                self.degrees, self.minutes, self.hemisphere
            )
        } else {
            write!(
                f,
                "{}\u{b0} {}\u{2032} {}\u{2033} {}",
                self.degrees, self.minutes, self.seconds, self.hemisphere
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn west_negates_decimal() {
        let dms = Dms {
            degrees: 85,
            minutes: 50,
            seconds: 0,
            hemisphere: Hemisphere::West,
        };
        assert!((dms.to_degrees() + 85.833_333_333).abs() < 1e-6);
    }

    #[test]
    fn north_stays_positive() {
        let dms = Dms {
            degrees: 30,
            minutes: 30,
            seconds: 0,
            hemisphere: Hemisphere::North,
        };
        assert!((dms.to_degrees() - 30.5).abs() < 1e-12);
    }

    #[test]
    fn seconds_contribute() {
        let dms = Dms {
            degrees: 122,
            minutes: 19,
            seconds: 45,
            hemisphere: Hemisphere::West,
        };
        let expected = -(122.0 + 19.0 / 60.0 + 45.0 / 3600.0);
        assert!((dms.to_degrees() - expected).abs() < 1e-12);
    }

    #[test]
    fn display_omits_zero_seconds() {
        let dms = Dms {
            degrees: 85,
            minutes: 50,
            seconds: 0,
            hemisphere: Hemisphere::West,
        };
        assert_eq!(dms.to_string(), "85\u{b0} 50\u{2032} W");
    }

    #[test]
    fn display_includes_nonzero_seconds() {
        let dms = Dms {
            degrees: 122,
            minutes: 19,
            seconds: 45,
            hemisphere: Hemisphere::West,
        };
        assert_eq!(dms.to_string(), "122\u{b0} 19\u{2032} 45\u{2033} W");
    }

    #[test]
    fn hemisphere_letters_case_insensitive() {
        assert_eq!(Hemisphere::from_letter('n'), Some(Hemisphere::North));
        assert_eq!(Hemisphere::from_letter('W'), Some(Hemisphere::West));
        assert_eq!(Hemisphere::from_letter('x'), None);
    }
}
