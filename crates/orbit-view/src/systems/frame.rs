//! Composes the demo scene into a [`DrawList`] for one frame.
//!
//! Paint order:
//! 1. surface background and clip
//! 2. world: face, eyes, smile, cursor marker, orbit field
//! 3. surface overlay: crosshair at the pointer

use glam::DVec2;

use crate::api::config::SceneConfig;
use crate::components::shape::{Color, Shape, Stroke, SweepDirection};
use crate::core::transform::ViewportTransform;
use crate::core::viewport::{SurfaceSize, Viewport};
use crate::renderer::draw_list::{CircleInstance, DrawList, Space};
use crate::systems::rng::UnitRandom;

/// Everything the host supplies for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub viewport: Viewport,
    pub surface: SurfaceSize,
    /// Pointer position in surface coordinates.
    pub cursor: DVec2,
    /// Milliseconds since the animation started.
    pub elapsed_ms: f64,
}

/// Builds frames, reusing its buffers between calls.
pub struct FrameBuilder {
    config: SceneConfig,
    list: DrawList,
    positions: Vec<DVec2>,
}

impl FrameBuilder {
    pub fn new(config: SceneConfig) -> Self {
        let count = config.orbit_count as usize;
        Self {
            config,
            list: DrawList::with_instance_capacity(count),
            positions: Vec::with_capacity(count),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SceneConfig) {
        self.config = config;
    }

    /// The most recently built frame.
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    /// Rebuild the display list for `input`.
    pub fn build(&mut self, input: &FrameInput, rng: &mut impl UnitRandom) -> &DrawList {
        let transform = ViewportTransform::new(input.viewport, input.surface);
        let cfg = &self.config;
        let pen = Some(Stroke::new(Color::BLACK, cfg.stroke_width));

        self.list.clear();
        self.list.set_world_matrix(transform.world_matrix());

        let size = DVec2::new(input.surface.width, input.surface.height);
        self.list.set_clip(DVec2::ZERO, size);
        self.list
            .push_shape(Space::Surface, Shape::rect(DVec2::ZERO, size), Some(Color::WHITE), pen);

        push_face(&mut self.list, cfg.face_radius, pen);

        let cursor_world = transform.surface_to_world(input.cursor);
        self.list.push_shape(
            Space::World,
            Shape::circle(cursor_world, cfg.marker_radius),
            Some(Color::GRAY),
            pen,
        );

        cfg.orbit
            .sample_into(cfg.orbit_count, input.elapsed_ms, rng, &mut self.positions);
        let radius = cfg.marker_radius;
        let margin = radius * input.viewport.scale.abs();
        let cull = cfg.cull_offscreen;
        self.list.push_circles(
            Space::World,
            Some(Color::GRAY),
            pen,
            self.positions
                .iter()
                .filter(|p| !cull || transform.is_world_point_visible(**p, margin))
                .map(|p| CircleInstance::new(*p, radius)),
        );

        let arm = cfg.crosshair_half_length;
        let c = input.cursor;
        self.list.push_shape(
            Space::Surface,
            Shape::line(c + DVec2::new(-arm, 0.0), c + DVec2::new(arm, 0.0)),
            None,
            pen,
        );
        self.list.push_shape(
            Space::Surface,
            Shape::line(c + DVec2::new(0.0, -arm), c + DVec2::new(0.0, arm)),
            None,
            pen,
        );

        log::trace!(
            "frame at {:.1}ms: {} shapes, {} orbit instances",
            input.elapsed_ms,
            self.list.shape_count(),
            self.list.instance_count()
        );

        &self.list
    }
}

/// Face outline, two eyes and the smile, proportioned to `radius`.
fn push_face(list: &mut DrawList, radius: f64, pen: Option<Stroke>) {
    list.push_shape(
        Space::World,
        Shape::circle(DVec2::ZERO, radius),
        Some(Color::WHITE),
        pen,
    );

    let eye_x = radius / 2.0;
    let eye_low = -radius / 10.0;
    let eye_high = radius * 3.0 / 10.0;
    for x in [-eye_x, eye_x] {
        list.push_shape(
            Space::World,
            Shape::line(DVec2::new(x, eye_low), DVec2::new(x, eye_high)),
            None,
            pen,
        );
    }

    let mouth_y = -radius / 5.0;
    list.push_shape(
        Space::World,
        Shape::Arc {
            from: DVec2::new(-eye_x, mouth_y),
            to: DVec2::new(eye_x, mouth_y),
            radius: radius / 5.0,
            large_arc: false,
            sweep: SweepDirection::Clockwise,
        },
        None,
        pen,
    );
}
