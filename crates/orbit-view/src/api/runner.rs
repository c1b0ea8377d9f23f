use glam::DVec2;

use crate::api::config::SceneConfig;
use crate::core::time::{Clock, Stopwatch};
use crate::core::transform::ViewportTransform;
use crate::core::viewport::{SurfaceSize, Viewport};
use crate::renderer::draw_list::DrawList;
use crate::renderer::traits::Painter;
use crate::systems::frame::{FrameBuilder, FrameInput};
use crate::systems::rng::{Rng, UnitRandom};

/// Glue between a host control and the scene.
///
/// Holds the bindable properties (scale, rotation, center), the live surface
/// size and the last pointer position. The host forwards property changes,
/// resizes and pointer moves, then calls [`CanvasRunner::render_frame`] from
/// its render callback, as often as it likes.
pub struct CanvasRunner<C: Clock = Stopwatch, R: UnitRandom = Rng> {
    viewport: Viewport,
    surface: SurfaceSize,
    cursor: DVec2,
    clock: C,
    rng: R,
    builder: FrameBuilder,
    frames: u64,
}

impl CanvasRunner {
    /// Runner with a stopwatch started now and the built-in generator seeded from `config`.
    pub fn new(config: SceneConfig) -> Self {
        let rng = Rng::new(config.seed);
        Self::with_parts(config, Stopwatch::start_new(), rng)
    }
}

impl<C: Clock, R: UnitRandom> CanvasRunner<C, R> {
    pub fn with_parts(config: SceneConfig, clock: C, rng: R) -> Self {
        log::info!(
            "orbit-view: {} orbits, seed {}, culling {}",
            config.orbit_count,
            config.seed,
            if config.cull_offscreen { "on" } else { "off" }
        );
        Self {
            viewport: Viewport::default(),
            surface: SurfaceSize::default(),
            cursor: DVec2::ZERO,
            clock,
            rng,
            builder: FrameBuilder::new(config),
            frames: 0,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.set_scale(viewport.scale);
        self.viewport = viewport;
    }

    pub fn set_scale(&mut self, scale: f64) {
        if !self.viewport.with_scale(scale).is_invertible() {
            log::warn!("viewport scale {scale} is not invertible; pointer mapping will be non-finite");
        }
        self.viewport.scale = scale;
    }

    /// Rotation in radians; stored reduced modulo 2π.
    pub fn set_rotation(&mut self, radians: f64) {
        self.viewport.set_rotation(radians);
    }

    pub fn set_center(&mut self, center: DVec2) {
        self.viewport.center = center;
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        log::debug!("surface resized to {width}x{height}");
        self.surface = SurfaceSize::new(width, height);
    }

    /// Record the pointer position in surface coordinates.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.cursor = DVec2::new(x, y);
    }

    pub fn cursor(&self) -> DVec2 {
        self.cursor
    }

    /// Pointer position mapped into world space.
    pub fn cursor_world(&self) -> DVec2 {
        self.transform().surface_to_world(self.cursor)
    }

    pub fn transform(&self) -> ViewportTransform {
        ViewportTransform::new(self.viewport, self.surface)
    }

    pub fn config(&self) -> &SceneConfig {
        self.builder.config()
    }

    /// Swap the scene configuration. The random source keeps its state.
    pub fn set_config(&mut self, config: SceneConfig) {
        self.builder.set_config(config);
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Number of frames built so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Build the display list for the current state and time.
    pub fn render_frame(&mut self) -> &DrawList {
        let input = FrameInput {
            viewport: self.viewport,
            surface: self.surface,
            cursor: self.cursor,
            elapsed_ms: self.clock.elapsed_millis(),
        };
        self.frames += 1;
        self.builder.build(&input, &mut self.rng)
    }

    /// Build a frame and replay it straight into `painter`.
    pub fn paint(&mut self, painter: &mut impl Painter) {
        self.render_frame().replay(painter);
    }
}
