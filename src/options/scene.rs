//! Global scene options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geodesy::Datum;

/// Scene-wide settings shared by the 2D map and the 3D globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SceneOptions {
    /// Datum whose zone namespace and ellipsoid the scene uses.
    pub datum: Datum,
    /// Globe radius in scene units (the ellipsoid semi-major axis maps to
    /// this).
    pub globe_radius: f64,
    /// Show the zone-boundary polygons from the external feed.
    pub show_zone_boundaries: bool,
    /// Show the projection surface for the selected zone.
    pub show_projection_surface: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            datum: Datum::Nad83,
            globe_radius: 1.0,
            show_zone_boundaries: true,
            show_projection_surface: true,
        }
    }
}
