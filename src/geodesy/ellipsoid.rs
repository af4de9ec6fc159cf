//! Reference ellipsoids and point generation on the globe surface.
//!
//! The scene frame is right-handed with +Y as the polar axis, +Z toward the
//! 0° meridian, and +X toward 90°E. Graticule and Earth-scale geometry use a
//! spherical approximation; the ellipsoid surface additionally scales Y by
//! the semi-minor/semi-major axis ratio.

use glam::DVec3;

use super::Datum;

/// A biaxial reference ellipsoid, one per datum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Equatorial radius in meters.
    pub semi_major_axis: f64,
    /// Flattening `f = (a - b) / a`.
    pub flattening: f64,
}

/// GRS80, the NAD83 reference ellipsoid.
pub const GRS80: Ellipsoid = Ellipsoid {
    semi_major_axis: 6_378_137.0,
    flattening: 1.0 / 298.257_222_101,
};

/// Clarke 1866, the NAD27 reference ellipsoid.
pub const CLARKE_1866: Ellipsoid = Ellipsoid {
    semi_major_axis: 6_378_206.4,
    flattening: 1.0 / 294.978_698_2,
};

impl Ellipsoid {
    /// The reference ellipsoid for a datum.
    #[must_use]
    pub fn for_datum(datum: Datum) -> Self {
        match datum {
            Datum::Nad83 => GRS80,
            Datum::Nad27 => CLARKE_1866,
        }
    }

    /// Polar radius `b = a(1 - f)` in meters.
    #[inline]
    #[must_use]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening)
    }

    /// `b / a`, the Y scale applied to spherical points to land on the
    /// ellipsoid surface.
    #[inline]
    #[must_use]
    pub fn axis_ratio(&self) -> f64 {
        self.semi_minor_axis() / self.semi_major_axis
    }

    /// A point on the ellipsoid surface over the unit square:
    /// `lon = 2πu`, `lat = π(v - ½)`, Y scaled by the axis ratio.
    #[must_use]
    pub fn surface_point(&self, u: f64, v: f64, radius: f64) -> DVec3 {
        let lon_deg = u * 360.0;
        let lat_deg = (v - 0.5) * 180.0;
        let spherical = point_on_sphere(lat_deg, lon_deg, radius);
        DVec3::new(
            spherical.x,
            spherical.y * self.axis_ratio(),
            spherical.z,
        )
    }
}

/// A point on a sphere of the given radius, in the scene frame.
///
/// `x = r·cos(lat)·sin(lon)`, `y = r·sin(lat)`, `z = r·cos(lat)·cos(lon)`.
#[must_use]
pub fn point_on_sphere(lat_deg: f64, lon_deg: f64, radius: f64) -> DVec3 {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    DVec3::new(
        radius * lat.cos() * lon.sin(),
        radius * lat.sin(),
        radius * lat.cos() * lon.cos(),
    )
}
