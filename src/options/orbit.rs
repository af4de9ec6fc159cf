//! Camera orbit options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tuning for the fly-to-zone camera orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OrbitOptions {
    /// Orbit toward a clicked zone instead of jumping.
    pub animate: bool,
    /// Duration of one orbit run, milliseconds.
    pub duration_ms: u64,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            animate: true,
            duration_ms: 1000,
        }
    }
}

impl OrbitOptions {
    /// The run duration as a [`web_time::Duration`].
    #[must_use]
    pub fn duration(&self) -> web_time::Duration {
        web_time::Duration::from_millis(self.duration_ms)
    }
}
