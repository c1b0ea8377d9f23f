use bytemuck::{Pod, Zeroable};
use glam::{DAffine2, DVec2};

use crate::components::shape::{Color, Shape, Stroke};

/// Per-instance circle data for instanced rendering of the orbit field.
/// 3 floats = 12 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 3;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            x: center.x as f32,
            y: center.y as f32,
            radius: radius as f32,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }
}

/// Coordinate space a draw item is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    /// Pixels, origin top-left, Y down.
    Surface,
    /// Scene units, drawn under the list's world matrix.
    World,
}

/// A single shape with its paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub space: Space,
    pub shape: Shape,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

/// A run of circle instances sharing one paint.
/// `start..end` indexes into [`DrawList::instances`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleBatch {
    pub space: Space,
    pub start: u32,
    pub end: u32,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl CircleBatch {
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawItem {
    Shape(DrawCommand),
    Circles(CircleBatch),
}

impl DrawItem {
    pub fn space(&self) -> Space {
        match self {
            DrawItem::Shape(cmd) => cmd.space,
            DrawItem::Circles(batch) => batch.space,
        }
    }
}

/// Ordered display list for one frame.
///
/// Items are painted in insertion order. Cleared and refilled every frame;
/// allocations are kept between frames.
#[derive(Debug, Clone)]
pub struct DrawList {
    pub items: Vec<DrawItem>,
    pub instances: Vec<CircleInstance>,
    /// Maps world-space items onto the surface.
    pub world_matrix: DAffine2,
    /// Surface-space clip rectangle as (origin, size).
    pub clip: Option<(DVec2, DVec2)>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(16),
            instances: Vec::new(),
            world_matrix: DAffine2::IDENTITY,
            clip: None,
        }
    }

    pub fn with_instance_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.instances.clear();
        self.world_matrix = DAffine2::IDENTITY;
        self.clip = None;
    }

    pub fn set_world_matrix(&mut self, matrix: DAffine2) {
        self.world_matrix = matrix;
    }

    pub fn set_clip(&mut self, origin: DVec2, size: DVec2) {
        self.clip = Some((origin, size));
    }

    pub fn push_shape(
        &mut self,
        space: Space,
        shape: Shape,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        self.items.push(DrawItem::Shape(DrawCommand {
            space,
            shape,
            fill,
            stroke,
        }));
    }

    /// Append a batch of circles sharing one paint.
    pub fn push_circles<I>(
        &mut self,
        space: Space,
        fill: Option<Color>,
        stroke: Option<Stroke>,
        circles: I,
    ) where
        I: IntoIterator<Item = CircleInstance>,
    {
        let start = self.instances.len() as u32;
        self.instances.extend(circles);
        let end = self.instances.len() as u32;
        self.items.push(DrawItem::Circles(CircleBatch {
            space,
            start,
            end,
            fill,
            stroke,
        }));
    }

    /// Instances belonging to `batch`.
    pub fn batch_instances(&self, batch: &CircleBatch) -> &[CircleInstance] {
        &self.instances[batch.start as usize..batch.end as usize]
    }

    pub fn shapes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Shape(cmd) => Some(cmd),
            DrawItem::Circles(_) => None,
        })
    }

    pub fn shape_count(&self) -> usize {
        self.shapes().count()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as raw bytes, ready for a GPU vertex buffer upload.
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_instance_is_3_floats() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 12);
        assert_eq!(CircleInstance::STRIDE_BYTES, 12);
    }

    #[test]
    fn push_circles_records_range() {
        let mut list = DrawList::new();
        list.push_circles(
            Space::World,
            Some(Color::GRAY),
            None,
            [CircleInstance::new(DVec2::ZERO, 1.0); 4],
        );
        list.push_circles(
            Space::World,
            None,
            None,
            [CircleInstance::new(DVec2::ONE, 2.0); 2],
        );
        list.push_circles(Space::World, None, None, std::iter::empty());
        let batches: Vec<_> = list
            .items
            .iter()
            .filter_map(|i| match i {
                DrawItem::Circles(b) => Some(*b),
                _ => None,
            })
            .collect();
        assert_eq!((batches[0].start, batches[0].end), (0, 4));
        assert_eq!((batches[1].start, batches[1].end), (4, 6));
        assert_eq!(list.batch_instances(&batches[1])[0].radius, 2.0);
        assert_eq!(list.instance_count(), 6);

        assert_eq!(batches[0].len(), 4);
        assert_eq!(batches[1].len(), 2);
        assert!(!batches[1].is_empty());
        // a fully culled batch is still recorded, just empty
        assert_eq!((batches[2].start, batches[2].end), (6, 6));
        assert!(batches[2].is_empty());
        assert!(list.batch_instances(&batches[2]).is_empty());
    }

    #[test]
    fn instance_bytes_match_stride() {
        let mut list = DrawList::new();
        list.push_circles(
            Space::World,
            None,
            None,
            [CircleInstance::new(DVec2::new(1.0, 2.0), 3.0)],
        );
        let bytes = list.instance_bytes();
        assert_eq!(bytes.len(), CircleInstance::STRIDE_BYTES);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = DrawList::new();
        list.set_clip(DVec2::ZERO, DVec2::ONE);
        list.set_world_matrix(DAffine2::from_scale(DVec2::splat(2.0)));
        list.push_shape(Space::Surface, Shape::line(DVec2::ZERO, DVec2::ONE), None, None);
        list.clear();
        assert!(list.items.is_empty());
        assert!(list.clip.is_none());
        assert_eq!(list.world_matrix, DAffine2::IDENTITY);
        assert_eq!(list.shape_count(), 0);
    }
}
