use serde::{Deserialize, Serialize};

use crate::systems::orbit::OrbitParams;

/// Scene configuration. Defaults reproduce the classic demo scene;
/// every field may be omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of orbiting circles drawn per frame (default: 10000).
    pub orbit_count: u32,
    /// Constants of the orbit sampler.
    pub orbit: OrbitParams,
    /// Radius of the face circle at the world origin (default: 50).
    pub face_radius: f64,
    /// Radius of the cursor marker and of every orbit circle (default: 20).
    pub marker_radius: f64,
    /// Half length of each overlay crosshair arm, in pixels (default: 20).
    pub crosshair_half_length: f64,
    /// Pen width for outlines (default: 1).
    pub stroke_width: f32,
    /// Seed for the built-in random source (default: 42).
    pub seed: u64,
    /// Skip orbit circles that land off the surface (default: false).
    pub cull_offscreen: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            orbit_count: 10_000,
            orbit: OrbitParams::default(),
            face_radius: 50.0,
            marker_radius: 20.0,
            crosshair_half_length: 20.0,
            stroke_width: 1.0,
            seed: 42,
            cull_offscreen: false,
        }
    }
}

impl SceneConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
