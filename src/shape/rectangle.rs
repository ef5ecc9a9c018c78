use serde::{Deserialize, Serialize};

use crate::color::ColorData;
use crate::geometry::Rect;
use crate::shape::ShapeId;

/// An axis-aligned rectangle. Its geometry is fully described by `bounds`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleShape {
    id: ShapeId,
    bounds: Rect,
    stroke_color: ColorData,
    fill_color: Option<ColorData>,
}

impl RectangleShape {
    pub(crate) fn new(bounds: Rect, stroke_color: ColorData, fill_color: Option<ColorData>) -> Self {
        Self {
            id: ShapeId::generate(),
            bounds,
            stroke_color,
            fill_color,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn stroke_color(&self) -> ColorData {
        self.stroke_color
    }

    pub fn fill_color(&self) -> Option<ColorData> {
        self.fill_color
    }
}
