use serde::{Deserialize, Serialize};

use crate::color::ColorData;
use crate::geometry::{Point2D, Rect};
use crate::shape::ShapeId;

// Width-per-character ratio used for the bounds estimate. Real metrics
// belong to the rendering layer, which this crate does not know about.
const GLYPH_ASPECT: f64 = 0.6;

/// A run of text anchored at a point. The color lives in the stroke slot;
/// text has no fill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextShape {
    id: ShapeId,
    text: String,
    position: Point2D,
    font_size: f64,
    font_name: String,
    color: ColorData,
}

impl TextShape {
    /// Returns `None` when the content is empty, the font size is not a
    /// positive finite number, or the font name is empty.
    pub(crate) fn new(
        text: String,
        position: Point2D,
        font_size: f64,
        font_name: String,
        color: ColorData,
    ) -> Option<Self> {
        if text.is_empty() || font_name.is_empty() {
            return None;
        }
        if !font_size.is_finite() || font_size <= 0.0 {
            return None;
        }
        Some(Self {
            id: ShapeId::generate(),
            text,
            position,
            font_size,
            font_name,
            color,
        })
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Point2D {
        self.position
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn color(&self) -> ColorData {
        self.color
    }

    /// Estimated bounding box: one line of text laid out from the anchor.
    pub fn bounds(&self) -> Rect {
        let chars = self.text.chars().count() as f64;
        Rect {
            x: self.position.x,
            y: self.position.y,
            width: chars * self.font_size * GLYPH_ASPECT,
            height: self.font_size,
        }
    }
}
