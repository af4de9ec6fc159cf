//! Reference ellipsoids, geographic coordinates, and graticule sampling.

pub mod ellipsoid;
pub mod graticule;

pub use ellipsoid::{point_on_sphere, Ellipsoid, CLARKE_1866, GRS80};
pub use graticule::{Graticule, GraticuleLine};

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A horizontal datum: reference ellipsoid plus origin convention. Keys the
/// zone parameter namespaces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum Datum {
    /// North American Datum of 1983 (GRS80 ellipsoid).
    #[default]
    #[serde(rename = "NAD83")]
    Nad83,
    /// North American Datum of 1927 (Clarke 1866 ellipsoid).
    #[serde(rename = "NAD27")]
    Nad27,
}

impl Datum {
    /// Canonical dataset key for this datum.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Nad83 => "NAD83",
            Self::Nad27 => "NAD27",
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An unrecognized datum name.
///
/// Callers at the lookup boundary treat this as an absence, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownDatum;

impl fmt::Display for UnknownDatum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown datum name")
    }
}

impl std::error::Error for UnknownDatum {}

impl FromStr for Datum {
    type Err = UnknownDatum;

    /// Lenient on case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NAD83" => Ok(Self::Nad83),
            "NAD27" => Ok(Self::Nad27),
            _ => Err(UnknownDatum),
        }
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicPoint {
    /// Latitude in `[-90, 90]`, north positive.
    pub latitude_deg: f64,
    /// Longitude in `(-180, 180]`, east positive.
    pub longitude_deg: f64,
}

impl GeographicPoint {
    /// A geographic position from decimal degrees.
    #[must_use]
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Scene-frame position of this point on a sphere of the given radius.
    #[must_use]
    pub fn on_sphere(&self, radius: f64) -> glam::DVec3 {
        point_on_sphere(self.latitude_deg, self.longitude_deg, radius)
    }
}
