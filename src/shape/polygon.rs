use serde::{Deserialize, Serialize};

use crate::color::ColorData;
use crate::geometry::{Point2D, Rect};
use crate::shape::ShapeId;

/// A closed polygon over an ordered vertex sequence. The closing edge from
/// the last vertex back to the first is implied, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolygonShape {
    id: ShapeId,
    vertices: Vec<Point2D>,
    stroke_color: ColorData,
    fill_color: Option<ColorData>,
}

impl PolygonShape {
    /// Returns `None` for fewer than three vertices.
    pub(crate) fn new(
        vertices: Vec<Point2D>,
        stroke_color: ColorData,
        fill_color: Option<ColorData>,
    ) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        Some(Self {
            id: ShapeId::generate(),
            vertices,
            stroke_color,
            fill_color,
        })
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Vertices in the order given at construction.
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn stroke_color(&self) -> ColorData {
        self.stroke_color
    }

    pub fn fill_color(&self) -> Option<ColorData> {
        self.fill_color
    }

    pub fn bounds(&self) -> Rect {
        // vertices is never empty (three or more by construction)
        Rect::from_points(&self.vertices).unwrap_or(Rect {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        })
    }
}
