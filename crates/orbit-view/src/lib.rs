pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::SceneConfig;
pub use api::runner::CanvasRunner;
pub use crate::core::time::{Clock, FixedClock, Stopwatch};
pub use crate::core::transform::{surface_to_world, world_to_surface, ViewportTransform};
pub use crate::core::viewport::{normalize_rotation, SurfaceSize, Viewport};
pub use components::shape::{Color, Shape, Stroke, SweepDirection};
pub use renderer::draw_list::{CircleBatch, CircleInstance, DrawCommand, DrawItem, DrawList, Space};
pub use renderer::traits::Painter;
pub use systems::frame::{FrameBuilder, FrameInput};
pub use systems::orbit::{orbit_input, orbit_position, sample_orbits, OrbitParams};
pub use systems::rng::{Rng, UnitRandom};

#[cfg(feature = "vectors")]
pub use systems::vector::{flatten_arc, flatten_shape, Polyline};

/// World- and surface-space points.
pub type Point2D = glam::DVec2;
