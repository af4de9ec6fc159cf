//! Graticule display options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Graticule sampling intervals and visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GraticuleOptions {
    /// Draw the graticule at all.
    pub visible: bool,
    /// Spacing between parallels, degrees.
    pub lat_interval_deg: f64,
    /// Spacing between meridians, degrees.
    pub lon_interval_deg: f64,
}

impl Default for GraticuleOptions {
    fn default() -> Self {
        Self {
            visible: true,
            lat_interval_deg: 15.0,
            lon_interval_deg: 15.0,
        }
    }
}
