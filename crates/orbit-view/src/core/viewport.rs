use std::f64::consts::TAU;

use glam::DVec2;
use serde::{Deserialize, Deserializer, Serialize};

/// Reduce an angle in radians into `[0, 2π)`.
pub fn normalize_rotation(radians: f64) -> f64 {
    let r = radians.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if r >= TAU { 0.0 } else { r }
}

fn deserialize_rotation<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(normalize_rotation)
}

fn default_scale() -> f64 {
    1.0
}

/// Scale, rotation and center that define how the world is framed on a surface.
///
/// Owned by the host and mutated through whatever property binding it uses.
/// The transform code only reads it, once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Zoom factor. Not validated: zero and negative values are accepted.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// World-space point shown at the middle of the surface.
    #[serde(default)]
    pub center: DVec2,
    /// Rotation in radians, always kept in `[0, 2π)`.
    #[serde(default, deserialize_with = "deserialize_rotation")]
    rotation: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: DVec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.set_rotation(radians);
        self
    }

    pub fn with_center(mut self, center: DVec2) -> Self {
        self.center = center;
        self
    }

    /// Rotation in radians, in `[0, 2π)`.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Store a rotation, reducing it modulo 2π.
    pub fn set_rotation(&mut self, radians: f64) {
        self.rotation = normalize_rotation(radians);
    }

    /// Whether `surface_to_world` will produce finite coordinates.
    pub fn is_invertible(&self) -> bool {
        self.scale != 0.0 && self.scale.is_finite()
    }
}

/// Live dimensions of the drawable area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Half extents; the surface point the world center is anchored to.
    pub fn half(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a surface-space point lies inside the surface grown by `margin` on every side.
    pub fn contains(&self, point: DVec2, margin: f64) -> bool {
        point.x >= -margin
            && point.x <= self.width + margin
            && point.y >= -margin
            && point.y <= self.height + margin
    }
}
