//! World ↔ surface coordinate mapping.
//!
//! World space is Y-up with the scene defined around the origin. Surface space
//! is the drawable area in pixels, origin top-left, Y down. The forward mapping
//! is the affine composition
//!
//! ```text
//! Translate(w/2, h/2) · Rotate(rotation) · Scale(scale, -scale) · Translate(-center)
//! ```

use glam::{DAffine2, DMat2, DVec2};

use super::viewport::{SurfaceSize, Viewport};

/// Maps points between world and surface space for one frame.
///
/// Cheap to build; construct one per frame from the current viewport and surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub viewport: Viewport,
    pub surface: SurfaceSize,
}

impl ViewportTransform {
    pub fn new(viewport: Viewport, surface: SurfaceSize) -> Self {
        Self { viewport, surface }
    }

    /// Forward matrix taking world points to surface points.
    pub fn world_matrix(&self) -> DAffine2 {
        let vp = &self.viewport;
        DAffine2::from_translation(self.surface.half())
            * DAffine2::from_angle(vp.rotation())
            * DAffine2::from_scale(DVec2::new(vp.scale, -vp.scale))
            * DAffine2::from_translation(-vp.center)
    }

    pub fn world_to_surface(&self, world: DVec2) -> DVec2 {
        self.world_matrix().transform_point2(world)
    }

    /// Map a surface point (e.g. the pointer) back into world space.
    ///
    /// Division by `scale` is not guarded: a zero scale yields infinities or NaN.
    pub fn surface_to_world(&self, surface: DVec2) -> DVec2 {
        let vp = &self.viewport;
        let mut p = DVec2::new(surface.x, -surface.y);
        p += DVec2::new(-self.surface.width / 2.0, self.surface.height / 2.0);
        p /= vp.scale;
        // Same rotation sense as the forward path. The Y flip above already
        // mirrors the rotation, so this undoes the forward rotation.
        p = DMat2::from_angle(vp.rotation()) * p;
        p + vp.center
    }

    /// Whether a world point lands on the surface, allowing `margin` pixels of slack.
    pub fn is_world_point_visible(&self, world: DVec2, margin: f64) -> bool {
        self.surface.contains(self.world_to_surface(world), margin)
    }
}

/// Map a world point to surface space.
pub fn world_to_surface(world: DVec2, viewport: &Viewport, surface: SurfaceSize) -> DVec2 {
    ViewportTransform::new(*viewport, surface).world_to_surface(world)
}

/// Map a surface point to world space.
pub fn surface_to_world(point: DVec2, viewport: &Viewport, surface: SurfaceSize) -> DVec2 {
    ViewportTransform::new(*viewport, surface).surface_to_world(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn assert_close(a: DVec2, b: DVec2) {
        assert!((a - b).length() < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn identity_viewport_flips_y_and_centers() {
        let surface = SurfaceSize::new(400.0, 300.0);
        let p = world_to_surface(DVec2::new(50.0, 50.0), &Viewport::default(), surface);
        assert_eq!(p, DVec2::new(250.0, 100.0));
    }

    #[test]
    fn origin_maps_to_surface_center() {
        let surface = SurfaceSize::new(640.0, 480.0);
        for (scale, rot) in [(1.0, 0.0), (3.5, 1.2), (-0.25, 4.0), (0.0, 2.0)] {
            let vp = Viewport::new().with_scale(scale).with_rotation(rot);
            let p = world_to_surface(DVec2::ZERO, &vp, surface);
            assert_close(p, DVec2::new(320.0, 240.0));
        }
    }

    #[test]
    fn center_is_shown_at_surface_middle() {
        let vp = Viewport::new()
            .with_scale(2.0)
            .with_rotation(0.7)
            .with_center(DVec2::new(-30.0, 12.0));
        let surface = SurfaceSize::new(200.0, 100.0);
        let p = world_to_surface(DVec2::new(-30.0, 12.0), &vp, surface);
        assert_close(p, DVec2::new(100.0, 50.0));
    }

    #[test]
    fn scale_doubles_distance_from_center() {
        let vp = Viewport::new().with_scale(2.0);
        let surface = SurfaceSize::new(400.0, 300.0);
        let p = world_to_surface(DVec2::new(10.0, 10.0), &vp, surface);
        assert_close(p, DVec2::new(220.0, 130.0));
    }

    #[test]
    fn quarter_turn_rotates_after_flip() {
        // (10, 0) -> scale/flip (10, 0) -> rotate 90° (0, 10) -> + half (200, 160)
        let vp = Viewport::new().with_rotation(FRAC_PI_2);
        let surface = SurfaceSize::new(400.0, 300.0);
        let p = world_to_surface(DVec2::new(10.0, 0.0), &vp, surface);
        assert_close(p, DVec2::new(200.0, 160.0));
    }

    #[test]
    fn matrix_matches_staged_pipeline() {
        let vp = Viewport::new()
            .with_scale(1.7)
            .with_rotation(2.3)
            .with_center(DVec2::new(5.0, -8.0));
        let surface = SurfaceSize::new(800.0, 600.0);
        let world = DVec2::new(13.0, 42.0);

        let mut staged = world - vp.center;
        staged *= DVec2::new(vp.scale, -vp.scale);
        staged = DMat2::from_angle(vp.rotation()) * staged;
        staged += surface.half();

        assert_close(world_to_surface(world, &vp, surface), staged);
    }

    #[test]
    fn surface_center_maps_to_viewport_center() {
        let vp = Viewport::new()
            .with_scale(0.5)
            .with_rotation(PI)
            .with_center(DVec2::new(7.0, 9.0));
        let surface = SurfaceSize::new(300.0, 200.0);
        let w = surface_to_world(DVec2::new(150.0, 100.0), &vp, surface);
        assert_close(w, DVec2::new(7.0, 9.0));
    }

    #[test]
    fn surface_to_world_inverts_world_to_surface() {
        let surface = SurfaceSize::new(1024.0, 768.0);
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(50.0, 50.0),
            DVec2::new(-120.5, 33.25),
            DVec2::new(999.0, -431.0),
        ];
        for (scale, rot, center) in [
            (1.0, 0.0, DVec2::ZERO),
            (2.0, 0.3, DVec2::new(10.0, -20.0)),
            (0.1, 3.9, DVec2::new(-500.0, 250.0)),
            (-1.5, 5.5, DVec2::new(1.0, 1.0)),
        ] {
            let vp = Viewport::new()
                .with_scale(scale)
                .with_rotation(rot)
                .with_center(center);
            for p in points {
                let s = world_to_surface(p, &vp, surface);
                let back = surface_to_world(s, &vp, surface);
                assert!((back - p).length() < 1e-6, "round trip {p:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn zero_scale_inverse_is_not_finite() {
        let vp = Viewport::new().with_scale(0.0);
        let surface = SurfaceSize::new(100.0, 100.0);
        let w = surface_to_world(DVec2::new(10.0, 10.0), &vp, surface);
        assert!(!w.is_finite());
    }

    #[test]
    fn visibility_uses_surface_bounds() {
        let t = ViewportTransform::new(Viewport::default(), SurfaceSize::new(400.0, 300.0));
        assert!(t.is_world_point_visible(DVec2::new(0.0, 0.0), 0.0));
        assert!(!t.is_world_point_visible(DVec2::new(250.0, 0.0), 0.0));
        assert!(t.is_world_point_visible(DVec2::new(250.0, 0.0), 60.0));
    }
}
