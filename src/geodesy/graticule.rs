//! Graticule sampling: ordered polylines along parallels and meridians.

use glam::DVec3;

use super::ellipsoid::{point_on_sphere, Ellipsoid};

/// Longitude step along a parallel ring, and latitude step along a meridian
/// arc, in degrees.
const CURVE_STEP_DEG: f64 = 2.0;

/// One sampled parallel or meridian.
#[derive(Debug, Clone, PartialEq)]
pub struct GraticuleLine {
    /// Ordered sample points. Parallels are closed rings (first point
    /// repeated at the end); meridians are open pole-to-pole arcs.
    pub points: Vec<DVec3>,
    /// True for the equator and the prime meridian, which downstream
    /// styling draws heavier.
    pub primary: bool,
}

/// The sampled grid of parallels and meridians for one ellipsoid.
#[derive(Debug, Clone, PartialEq)]
pub struct Graticule {
    /// Latitude rings from -90° to +90° inclusive.
    pub parallels: Vec<GraticuleLine>,
    /// Longitude arcs covering `[0°, 360°)`.
    pub meridians: Vec<GraticuleLine>,
}

impl Graticule {
    /// Sample the graticule at the given intervals (degrees).
    ///
    /// Points sit on a sphere of the given radius with Y scaled by the
    /// ellipsoid axis ratio. Non-positive or non-finite intervals yield an
    /// empty set for that family of curves.
    #[must_use]
    pub fn sample(
        ellipsoid: &Ellipsoid,
        radius: f64,
        lat_interval_deg: f64,
        lon_interval_deg: f64,
    ) -> Self {
        let ratio = ellipsoid.axis_ratio();

        let mut parallels = Vec::new();
        if interval_valid(lat_interval_deg) {
            let mut lat: f64 = -90.0;
            while lat <= 90.0 + 1e-9 {
                parallels.push(sample_parallel(lat.min(90.0), radius, ratio));
                lat += lat_interval_deg;
            }
        } else {
            log::warn!(
                "invalid graticule latitude interval {lat_interval_deg}; skipping parallels"
            );
        }

        let mut meridians = Vec::new();
        if interval_valid(lon_interval_deg) {
            let mut lon = 0.0;
            while lon < 360.0 - 1e-9 {
                meridians.push(sample_meridian(lon, radius, ratio));
                lon += lon_interval_deg;
            }
        } else {
            log::warn!(
                "invalid graticule longitude interval {lon_interval_deg}; skipping meridians"
            );
        }

        Self {
            parallels,
            meridians,
        }
    }
}

fn interval_valid(interval_deg: f64) -> bool {
    interval_deg.is_finite() && interval_deg > 0.0
}

/// Scale a spherical point onto the ellipsoid surface.
#[inline]
fn ellipsoid_point(lat_deg: f64, lon_deg: f64, radius: f64, ratio: f64) -> DVec3 {
    let p = point_on_sphere(lat_deg, lon_deg, radius);
    DVec3::new(p.x, p.y * ratio, p.z)
}

/// Closed ring at one latitude, stepped every [`CURVE_STEP_DEG`] of
/// longitude, first point repeated to close.
fn sample_parallel(lat_deg: f64, radius: f64, ratio: f64) -> GraticuleLine {
    let mut points = Vec::with_capacity((360.0 / CURVE_STEP_DEG) as usize + 1);
    let mut lon = 0.0;
    while lon <= 360.0 + 1e-9 {
        points.push(ellipsoid_point(lat_deg, lon, radius, ratio));
        lon += CURVE_STEP_DEG;
    }
    GraticuleLine {
        points,
        primary: lat_deg.abs() < 1e-9,
    }
}

/// Open arc at one longitude from the south pole to the north pole.
fn sample_meridian(lon_deg: f64, radius: f64, ratio: f64) -> GraticuleLine {
    let mut points = Vec::with_capacity((180.0 / CURVE_STEP_DEG) as usize + 1);
    let mut lat: f64 = -90.0;
    while lat <= 90.0 + 1e-9 {
        points.push(ellipsoid_point(lat.min(90.0), lon_deg, radius, ratio));
        lat += CURVE_STEP_DEG;
    }
    GraticuleLine {
        points,
        primary: lon_deg.abs() < 1e-9,
    }
}
