//! Zone parameter record types.
//!
//! Records mirror the NOAA defining-parameter tables: angle fields stay in
//! their `"D M [S] H"` string form (decoded on demand by [`crate::angle`]),
//! and the scale denominator is normalized to one integer shape at the
//! deserialization boundary regardless of how the dataset spells it.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// The projection family a zone is defined on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    /// Transverse Mercator (cylinder tangent along a central meridian).
    TransverseMercator,
    /// Lambert Conformal Conic (cone through two standard parallels).
    LambertConformalConic,
    /// Oblique Mercator (Alaska zone 1 only).
    ObliqueMercator,
}

impl ProjectionKind {
    /// Short dataset tag for this kind.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::TransverseMercator => "TM",
            Self::LambertConformalConic => "LCC",
            Self::ObliqueMercator => "OM",
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Linear unit of a zone's false origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Units {
    /// Meters (SPCS83).
    #[default]
    #[serde(rename = "meters")]
    Meters,
    /// U.S. survey feet (SPCS27).
    #[serde(rename = "us-survey-feet")]
    UsSurveyFeet,
}

/// Projection-scale denominator `D` in `scale factor = 1 - 1/D`.
///
/// The dataset spells this as a bare integer, a string integer, or a
/// `"1/D"` fraction string; all three deserialize to the same value here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScaleDenominator(
    /// The denominator `D`.
    pub u64,
);

impl ScaleDenominator {
    /// `1 - 1/D`. `None` when the denominator is zero.
    #[must_use]
    pub fn scale_factor(self) -> Option<f64> {
        if self.0 == 0 {
            None
        } else {
            Some(1.0 - 1.0 / self.0 as f64)
        }
    }
}

impl<'de> Deserialize<'de> for ScaleDenominator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(d) => Ok(Self(d)),
            Raw::Text(text) => {
                let body = text.trim();
                let digits =
                    body.strip_prefix("1/").map_or(body, str::trim);
                digits.parse().map(Self).map_err(|_| {
                    de::Error::custom(format!(
                        "invalid scale denominator {body:?}"
                    ))
                })
            }
        }
    }
}

/// Transverse Mercator defining parameters. Angle fields are DMS strings;
/// any of them may be absent, in which case the aligner skips that
/// contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TmParams {
    /// Longitude of the tangent meridian, e.g. `"85 50 W"`.
    pub central_meridian: Option<String>,
    /// Latitude of the projection origin, e.g. `"30 30 N"`.
    pub latitude_of_origin: Option<String>,
    /// Denominator `D` of `scale factor = 1 - 1/D` at the central meridian.
    pub scale_factor_denominator: Option<ScaleDenominator>,
    /// False easting of the zone origin.
    pub false_easting: f64,
    /// False northing of the zone origin.
    pub false_northing: f64,
    /// Linear unit for the false origin.
    pub units: Units,
}

/// Lambert Conformal Conic defining parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LccParams {
    /// Longitude of the projection origin (the LCC analogue of a central
    /// meridian).
    pub longitude_of_origin: Option<String>,
    /// Latitude of the projection origin.
    pub latitude_of_origin: Option<String>,
    /// Southern standard parallel.
    pub standard_parallel_1: Option<String>,
    /// Northern standard parallel.
    pub standard_parallel_2: Option<String>,
    /// False easting of the zone origin.
    pub false_easting: f64,
    /// False northing of the zone origin.
    pub false_northing: f64,
    /// Linear unit for the false origin.
    pub units: Units,
}

/// Oblique Mercator defining parameters (Alaska zone 1 only; minimal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OmParams {
    /// Latitude of the projection center.
    pub latitude_of_center: Option<String>,
    /// Longitude of the projection center.
    pub longitude_of_center: Option<String>,
    /// Denominator of the scale factor on the skew axis.
    pub scale_factor_denominator: Option<ScaleDenominator>,
    /// Linear unit for the false origin.
    pub units: Units,
}

/// The tagged union of projection parameters, keyed by the dataset's
/// `projection` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "projection")]
pub enum ProjectionParams {
    /// `"projection": "TM"`.
    #[serde(rename = "TM")]
    TransverseMercator(TmParams),
    /// `"projection": "LCC"`.
    #[serde(rename = "LCC")]
    LambertConformalConic(LccParams),
    /// `"projection": "OM"`.
    #[serde(rename = "OM")]
    ObliqueMercator(OmParams),
}

impl ProjectionParams {
    /// The projection family these parameters belong to.
    #[must_use]
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Self::TransverseMercator(_) => ProjectionKind::TransverseMercator,
            Self::LambertConformalConic(_) => {
                ProjectionKind::LambertConformalConic
            }
            Self::ObliqueMercator(_) => ProjectionKind::ObliqueMercator,
        }
    }
}

/// One zone's parameter record, as resolved by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Regional FIPS code, 4 digits zero-padded. Filled from the dataset
    /// key at load time.
    #[serde(default)]
    pub code: String,
    /// Zone display name, e.g. `"Alabama East"`.
    pub name: String,
    /// Projection kind tag plus its parameters.
    #[serde(flatten)]
    pub params: ProjectionParams,
}

impl ZoneRecord {
    /// The projection family this zone is defined on.
    #[must_use]
    pub fn kind(&self) -> ProjectionKind {
        self.params.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_denominator_accepts_three_shapes() {
        let from_int: ScaleDenominator =
            serde_json::from_str("10000").unwrap();
        let from_text: ScaleDenominator =
            serde_json::from_str("\"10000\"").unwrap();
        let from_fraction: ScaleDenominator =
            serde_json::from_str("\"1/10000\"").unwrap();
        assert_eq!(from_int, ScaleDenominator(10_000));
        assert_eq!(from_text, from_int);
        assert_eq!(from_fraction, from_int);
    }

    #[test]
    fn scale_factor_is_exact_to_six_places() {
        let factor = ScaleDenominator(10_000).scale_factor().unwrap();
        assert!((factor - 0.9999).abs() < 5e-7);
    }

    #[test]
    fn zero_denominator_has_no_scale_factor() {
        assert_eq!(ScaleDenominator(0).scale_factor(), None);
    }

    #[test]
    fn garbage_denominator_is_rejected() {
        let result: Result<ScaleDenominator, _> =
            serde_json::from_str("\"one in ten thousand\"");
        assert!(result.is_err());
    }

    #[test]
    fn tm_record_deserializes_from_dataset_shape() {
        let record: ZoneRecord = serde_json::from_str(
            r#"{
                "name": "Alabama East",
                "projection": "TM",
                "centralMeridian": "85 50 W",
                "latitudeOfOrigin": "30 30 N",
                "scaleFactorDenominator": 25000,
                "falseEasting": 200000.0,
                "falseNorthing": 0.0,
                "units": "meters"
            }"#,
        )
        .unwrap();
        assert_eq!(record.kind(), ProjectionKind::TransverseMercator);
        let ProjectionParams::TransverseMercator(tm) = &record.params else {
            panic!("expected TM params");
        };
        assert_eq!(tm.central_meridian.as_deref(), Some("85 50 W"));
        assert_eq!(
            tm.scale_factor_denominator,
            Some(ScaleDenominator(25_000))
        );
        assert_eq!(tm.units, Units::Meters);
    }

    #[test]
    fn missing_tm_fields_default_to_absent() {
        let record: ZoneRecord = serde_json::from_str(
            r#"{ "name": "Hawaii 5", "projection": "TM",
                 "centralMeridian": "160 10 W",
                 "latitudeOfOrigin": "21 40 N" }"#,
        )
        .unwrap();
        let ProjectionParams::TransverseMercator(tm) = &record.params else {
            panic!("expected TM params");
        };
        assert_eq!(tm.scale_factor_denominator, None);
        assert_eq!(tm.false_easting, 0.0);
    }

    #[test]
    fn kind_tags_render_like_the_dataset() {
        assert_eq!(ProjectionKind::TransverseMercator.to_string(), "TM");
        assert_eq!(ProjectionKind::LambertConformalConic.to_string(), "LCC");
        assert_eq!(ProjectionKind::ObliqueMercator.to_string(), "OM");
    }
}
