use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// RGBA color, components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Pack into `0xRRGGBBAA`.
    pub fn to_rgba8(self) -> u32 {
        let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (c(self.r) << 24) | (c(self.g) << 16) | (c(self.b) << 8) | c(self.a)
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Web "gray" (#808080).
    pub const GRAY: Self = Self::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// How open line ends are finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    Flat,
    Square,
    #[default]
    Round,
}

/// Outline pen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    /// Line width in the space the shape is drawn in.
    pub width: f32,
    #[serde(default)]
    pub cap: LineCap,
}

impl Stroke {
    /// Pen with round caps.
    pub const fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Round,
        }
    }

    pub const fn with_cap(self, cap: LineCap) -> Self {
        Self { cap, ..self }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

/// Direction an arc travels from its start point to its end point,
/// judged in the coordinate system it is drawn in.
///
/// `Clockwise` is the SVG sweep flag set: angles increase from start to end
/// (clockwise on a Y-down surface).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepDirection {
    Clockwise,
    CounterClockwise,
}

/// Backend-neutral geometric primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle from its minimum corner.
    Rect { origin: DVec2, size: DVec2 },
    Circle { center: DVec2, radius: f64 },
    Line { from: DVec2, to: DVec2 },
    /// Elliptical-arc segment with SVG endpoint semantics and equal radii.
    /// A radius shorter than half the chord is grown to fit.
    Arc {
        from: DVec2,
        to: DVec2,
        radius: f64,
        large_arc: bool,
        sweep: SweepDirection,
    },
}

/// Center parameterization of an arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: DVec2,
    pub radius: f64,
    /// Angle of the start point around `center`, radians.
    pub start_angle: f64,
    /// Signed angle swept from start to end; positive for `Clockwise`.
    pub sweep_angle: f64,
}

impl ArcGeometry {
    /// Point at fraction `t` (0..=1) along the arc.
    pub fn point_at(&self, t: f64) -> DVec2 {
        let a = self.start_angle + self.sweep_angle * t;
        self.center + DVec2::new(a.cos(), a.sin()) * self.radius
    }

    /// Whether the direction `angle` lies on the swept range.
    pub fn covers_angle(&self, angle: f64) -> bool {
        let offset = if self.sweep_angle >= 0.0 {
            (angle - self.start_angle).rem_euclid(TAU)
        } else {
            (self.start_angle - angle).rem_euclid(TAU)
        };
        offset <= self.sweep_angle.abs()
    }
}

impl Shape {
    pub fn rect(origin: DVec2, size: DVec2) -> Self {
        Shape::Rect { origin, size }
    }

    pub fn circle(center: DVec2, radius: f64) -> Self {
        Shape::Circle { center, radius }
    }

    pub fn line(from: DVec2, to: DVec2) -> Self {
        Shape::Line { from, to }
    }

    /// Axis-aligned bounds as (min, max).
    pub fn bounds(&self) -> (DVec2, DVec2) {
        match *self {
            Shape::Rect { origin, size } => {
                let other = origin + size;
                (origin.min(other), origin.max(other))
            }
            Shape::Circle { center, radius } => {
                let r = DVec2::splat(radius.abs());
                (center - r, center + r)
            }
            Shape::Line { from, to } => (from.min(to), from.max(to)),
            Shape::Arc { from, to, .. } => {
                let mut min = from.min(to);
                let mut max = from.max(to);
                if let Some(arc) = self.arc_geometry() {
                    for k in 0..4 {
                        let angle = k as f64 * FRAC_PI_2;
                        if arc.covers_angle(angle) {
                            let p = arc.center + DVec2::new(angle.cos(), angle.sin()) * arc.radius;
                            min = min.min(p);
                            max = max.max(p);
                        }
                    }
                }
                (min, max)
            }
        }
    }

    /// Resolve an arc to center form following the SVG endpoint rules.
    ///
    /// `None` for other shapes and for degenerate arcs (zero radius or
    /// coincident endpoints), which draw as a straight segment or nothing.
    pub fn arc_geometry(&self) -> Option<ArcGeometry> {
        let Shape::Arc { from, to, radius, large_arc, sweep } = *self else {
            return None;
        };
        let half_chord = (from - to) / 2.0;
        let half = half_chord.length();
        if half == 0.0 || radius == 0.0 {
            return None;
        }
        let r = radius.abs().max(half);
        let positive = sweep == SweepDirection::Clockwise;

        let factor = ((r * r - half * half) / (half * half)).max(0.0).sqrt();
        let sign = if large_arc == positive { -1.0 } else { 1.0 };
        let center = (from + to) / 2.0 + DVec2::new(half_chord.y, -half_chord.x) * (sign * factor);

        let (a, b) = (from - center, to - center);
        let start_angle = a.y.atan2(a.x);
        let end_angle = b.y.atan2(b.x);
        let mut sweep_angle = end_angle - start_angle;
        if positive && sweep_angle < 0.0 {
            sweep_angle += TAU;
        } else if !positive && sweep_angle > 0.0 {
            sweep_angle -= TAU;
        }

        Some(ArcGeometry {
            center,
            radius: r,
            start_angle,
            sweep_angle,
        })
    }
}
