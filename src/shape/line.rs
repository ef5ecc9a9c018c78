use serde::{Deserialize, Serialize};

use crate::color::ColorData;
use crate::geometry::{Point2D, Rect};
use crate::shape::ShapeId;

/// A straight segment between two points. Stroke-only: a line never has a
/// fill, so the variant carries no fill slot at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSegment {
    id: ShapeId,
    start: Point2D,
    end: Point2D,
    stroke_color: ColorData,
}

impl LineSegment {
    pub(crate) fn new(start: Point2D, end: Point2D, stroke_color: ColorData) -> Self {
        Self {
            id: ShapeId::generate(),
            start,
            end,
            stroke_color,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn start(&self) -> Point2D {
        self.start
    }

    pub fn end(&self) -> Point2D {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn stroke_color(&self) -> ColorData {
        self.stroke_color
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }
}
