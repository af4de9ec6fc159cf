//! Angle wrapping and unit-conversion helpers shared by the orbit
//! interpolator and the projection aligner.

use std::f64::consts::{PI, TAU};

/// Wrap an angle delta into `[-π, π]` so interpolation always takes the
/// shortest arc, including across the ±180° seam.
#[inline]
#[must_use]
pub fn wrap_delta_to_pi(mut delta: f64) -> f64 {
    while delta > PI {
        delta -= TAU;
    }
    while delta < -PI {
        delta += TAU;
    }
    delta
}

/// Azimuthal camera angle (theta) for a longitude, east positive.
#[inline]
#[must_use]
pub fn theta_from_longitude_deg(lon_deg: f64) -> f64 {
    lon_deg.to_radians()
}

/// Polar camera angle (phi) for a latitude, measured down from the pole
/// axis: `phi = (90° - lat)·π/180`, so the north pole is 0 and the south
/// pole is π.
#[inline]
#[must_use]
pub fn phi_from_latitude_deg(lat_deg: f64) -> f64 {
    (90.0 - lat_deg).to_radians()
}
