//! Host drawing contract.
//!
//! The crate never touches pixels. A host (GUI toolkit drawing context,
//! Canvas2D, a GPU backend) implements [`Painter`] and replays a
//! [`DrawList`] into it once per redraw.
//!
//! ```ignore
//! struct CanvasPainter<'a> { ctx: &'a web_sys::CanvasRenderingContext2d }
//!
//! impl Painter for CanvasPainter<'_> {
//!     fn push_transform(&mut self, m: DAffine2) {
//!         self.ctx.save();
//!         let [a, b, c, d, e, f] = m.to_cols_array();
//!         let _ = self.ctx.transform(a, b, c, d, e, f);
//!     }
//!     fn pop_transform(&mut self) { self.ctx.restore(); }
//!     fn draw_shape(&mut self, shape: &Shape, fill: Option<Color>, stroke: Option<Stroke>) {
//!         // build a path, fill, stroke...
//!     }
//! }
//! ```

use glam::{DAffine2, DVec2};

use super::draw_list::{CircleInstance, DrawItem, DrawList, Space};
use crate::components::shape::{Color, Shape, Stroke};

/// Drawing surface implemented by the host.
pub trait Painter {
    /// Restrict painting to a surface-space rectangle. Called before any item.
    fn set_clip(&mut self, _origin: DVec2, _size: DVec2) {}

    /// Compose `matrix` onto the current transform until the matching pop.
    fn push_transform(&mut self, matrix: DAffine2);

    fn pop_transform(&mut self);

    fn draw_shape(&mut self, shape: &Shape, fill: Option<Color>, stroke: Option<Stroke>);

    /// Draw many circles with one paint. Hosts with instancing should override;
    /// the default issues one `draw_shape` per circle.
    fn draw_circles(
        &mut self,
        circles: &[CircleInstance],
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        for c in circles {
            self.draw_shape(&Shape::circle(c.center(), c.radius as f64), fill, stroke);
        }
    }
}

impl DrawList {
    /// Paint every item in order, wrapping runs of world-space items in the world matrix.
    pub fn replay(&self, painter: &mut impl Painter) {
        if let Some((origin, size)) = self.clip {
            painter.set_clip(origin, size);
        }

        let mut in_world = false;
        for item in &self.items {
            match (item.space(), in_world) {
                (Space::World, false) => {
                    painter.push_transform(self.world_matrix);
                    in_world = true;
                }
                (Space::Surface, true) => {
                    painter.pop_transform();
                    in_world = false;
                }
                _ => {}
            }

            match item {
                DrawItem::Shape(cmd) => painter.draw_shape(&cmd.shape, cmd.fill, cmd.stroke),
                DrawItem::Circles(batch) => {
                    painter.draw_circles(self.batch_instances(batch), batch.fill, batch.stroke)
                }
            }
        }

        if in_world {
            painter.pop_transform();
        }
    }
}
