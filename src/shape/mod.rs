use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// Re-export concrete shape variants
pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod rectangle;
pub(crate) mod text;

pub use ellipse::EllipseShape;
pub use line::LineSegment;
pub use polygon::PolygonShape;
pub use rectangle::RectangleShape;
pub use text::TextShape;

use crate::color::ColorData;
use crate::geometry::Rect;

/// Identifier assigned to a shape at construction and never reassigned.
/// Shape identity (and equality) is defined by this id, not by geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Enumeration of all shape variants in a drawing.
///
/// The set is closed: every variant shares the capability surface below
/// (`id`, `kind`, `bounds`, stroke/fill colors) and carries its own
/// defining geometry. Serialized form is self-describing via the `kind` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Line(LineSegment),
    Rectangle(RectangleShape),
    Ellipse(EllipseShape),
    Polygon(PolygonShape),
    Text(TextShape),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Ellipse(s) => s.id(),
            Shape::Polygon(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    /// The shape variant as a string, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Rectangle(_) => "rectangle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Polygon(_) => "polygon",
            Shape::Text(_) => "text",
        }
    }

    /// Axis-aligned bounding box derived from the defining geometry.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Line(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Ellipse(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    pub fn stroke_color(&self) -> ColorData {
        match self {
            Shape::Line(s) => s.stroke_color(),
            Shape::Rectangle(s) => s.stroke_color(),
            Shape::Ellipse(s) => s.stroke_color(),
            Shape::Polygon(s) => s.stroke_color(),
            Shape::Text(s) => s.color(),
        }
    }

    /// Interior fill, absent for stroke-only variants (lines, text).
    pub fn fill_color(&self) -> Option<ColorData> {
        match self {
            Shape::Line(_) => None,
            Shape::Rectangle(s) => s.fill_color(),
            Shape::Ellipse(s) => s.fill_color(),
            Shape::Polygon(s) => s.fill_color(),
            Shape::Text(_) => None,
        }
    }
}

// Equality is identity: two shapes with identical geometry but different
// ids are distinct shapes.
impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Shape {}
