//! Lyon-based flattening of draw-list shapes into polylines.
//!
//! For hosts whose drawing API has lines but no arcs or circles (or that
//! feed a line renderer on the GPU). Arcs follow SVG endpoint rules, so an
//! undersized radius is grown to span the chord.
//!
//! ```ignore
//! let smile = flatten_shape(&cmd.shape, 0.1);
//! painter.polyline(&smile.points, smile.closed);
//! ```

use glam::DVec2;
use lyon::geom::ArcFlags;
use lyon::math::{point, vector, Angle, Point};
use lyon::path::builder::SvgPathBuilder;
use lyon::path::iterator::PathIterator;
use lyon::path::{Path, PathEvent, Winding};

use crate::components::shape::{Shape, SweepDirection};

/// Flattened outline of a single shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<DVec2>,
    /// The last point connects back to the first.
    pub closed: bool,
}

fn to_lyon(p: DVec2) -> Point {
    point(p.x as f32, p.y as f32)
}

fn from_lyon(p: Point) -> DVec2 {
    DVec2::new(p.x as f64, p.y as f64)
}

/// Flatten an SVG-style arc with equal radii into line segments no further
/// than `tolerance` from the true curve.
///
/// A zero radius gives the straight segment `[from, to]`; coincident
/// endpoints give the single point `[from]`.
pub fn flatten_arc(
    from: DVec2,
    to: DVec2,
    radius: f64,
    large_arc: bool,
    sweep: SweepDirection,
    tolerance: f32,
) -> Polyline {
    if from == to {
        return Polyline {
            points: vec![from],
            closed: false,
        };
    }
    if radius == 0.0 {
        return Polyline {
            points: vec![from, to],
            closed: false,
        };
    }

    let mut builder = Path::builder().with_svg();
    builder.move_to(to_lyon(from));
    builder.arc_to(
        vector(radius as f32, radius as f32),
        Angle::radians(0.0),
        ArcFlags {
            large_arc,
            sweep: sweep == SweepDirection::Clockwise,
        },
        to_lyon(to),
    );
    let path = builder.build();
    collect(&path, tolerance)
}

/// Flatten any [`Shape`] into a polyline.
pub fn flatten_shape(shape: &Shape, tolerance: f32) -> Polyline {
    match *shape {
        Shape::Line { from, to } => Polyline {
            points: vec![from, to],
            closed: false,
        },
        Shape::Rect { origin, size } => Polyline {
            points: vec![
                origin,
                origin + DVec2::new(size.x, 0.0),
                origin + size,
                origin + DVec2::new(0.0, size.y),
            ],
            closed: true,
        },
        Shape::Circle { center, radius } => {
            if radius <= 0.0 {
                return Polyline::default();
            }
            let mut builder = Path::builder();
            builder.add_circle(to_lyon(center), radius as f32, Winding::Positive);
            collect(&builder.build(), tolerance)
        }
        Shape::Arc {
            from,
            to,
            radius,
            large_arc,
            sweep,
        } => flatten_arc(from, to, radius, large_arc, sweep, tolerance),
    }
}

fn collect(path: &Path, tolerance: f32) -> Polyline {
    let mut out = Polyline::default();
    for event in path.iter().flattened(tolerance) {
        match event {
            PathEvent::Begin { at } => out.points.push(from_lyon(at)),
            PathEvent::Line { to, .. } => out.points.push(from_lyon(to)),
            PathEvent::End { close, .. } => out.closed |= close,
            _ => {}
        }
    }
    out
}
